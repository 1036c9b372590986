//! 集成测试共用的数据库与数据构造工具

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use school_records::models::{
    Gender, GradeLevel,
    grades::{entities::Grade, requests::CreateGradeRequest},
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};
use school_records::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use sea_orm::{ConnectOptions, Database};

/// 内存 SQLite + 完整迁移；单连接保证所有查询看到同一个库
pub async fn setup_storage() -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("connect to in-memory sqlite");
    SeaOrmStorage::with_connection(db)
        .await
        .expect("run migrations")
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid date")
}

pub async fn subject(storage: &SeaOrmStorage, name: &str, code: &str) -> Subject {
    storage
        .create_subject(CreateSubjectRequest {
            name: name.to_string(),
            code: code.to_string(),
            description: None,
        })
        .await
        .expect("create subject")
}

pub fn teacher_request(first: &str, last: &str, subject_ids: Vec<i64>) -> CreateTeacherRequest {
    CreateTeacherRequest {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@school.example", first.to_lowercase(), last.to_lowercase()),
        phone: "+966501234567".to_string(),
        gender: Gender::Female,
        date_of_birth: date("1985-04-01"),
        hire_date: date("2015-09-01"),
        address: "1 School Road".to_string(),
        salary: Decimal::new(500_000, 2),
        subject_ids,
    }
}

pub async fn teacher(
    storage: &SeaOrmStorage,
    first: &str,
    last: &str,
    subject_ids: Vec<i64>,
) -> Teacher {
    storage
        .create_teacher(teacher_request(first, last, subject_ids))
        .await
        .expect("create teacher")
}

pub fn student_request(
    student_id: &str,
    first: &str,
    last: &str,
    grade: GradeLevel,
    subject_ids: Vec<i64>,
) -> CreateStudentRequest {
    CreateStudentRequest {
        student_id: student_id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: None,
        phone: None,
        gender: Gender::Male,
        date_of_birth: date("2014-05-20"),
        grade,
        enrollment_date: date("2020-09-01"),
        address: "7 River Road".to_string(),
        parent_name: "Parent".to_string(),
        parent_phone: "+966500000001".to_string(),
        subject_ids,
    }
}

pub async fn student(
    storage: &SeaOrmStorage,
    student_id: &str,
    first: &str,
    last: &str,
    grade: GradeLevel,
    subject_ids: Vec<i64>,
) -> Student {
    storage
        .create_student(student_request(student_id, first, last, grade, subject_ids))
        .await
        .expect("create student")
}

pub fn grade_request(
    student: &Student,
    subject: &Subject,
    teacher: &Teacher,
    grade: i64,
    exam_date: &str,
) -> CreateGradeRequest {
    CreateGradeRequest {
        student_id: student.id,
        subject_id: subject.id,
        teacher_id: teacher.id,
        grade: Decimal::from(grade),
        max_grade: Decimal::ONE_HUNDRED,
        exam_date: date(exam_date),
        notes: None,
    }
}

pub async fn grade(
    storage: &SeaOrmStorage,
    student: &Student,
    subject: &Subject,
    teacher: &Teacher,
    grade: i64,
    exam_date: &str,
) -> Grade {
    storage
        .create_grade(grade_request(student, subject, teacher, grade, exam_date))
        .await
        .expect("create grade")
}
