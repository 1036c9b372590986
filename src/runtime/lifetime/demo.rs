//! 演示数据
//!
//! 通过管理端写入接口插入，与正常录入走同样的校验。

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::models::{
    Gender, GradeLevel, grades::requests::CreateGradeRequest,
    students::requests::CreateStudentRequest, subjects::requests::CreateSubjectRequest,
    teachers::requests::CreateTeacherRequest,
};
use crate::storage::Storage;

/// 写入的记录数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    pub subjects: usize,
    pub teachers: usize,
    pub students: usize,
    pub grades: usize,
}

fn date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?)
}

fn subject(name: &str, code: &str, description: &str) -> CreateSubjectRequest {
    CreateSubjectRequest {
        name: name.to_string(),
        code: code.to_string(),
        description: Some(description.to_string()),
    }
}

pub async fn seed(storage: &dyn Storage) -> Result<DemoSummary> {
    let mut summary = DemoSummary::default();

    let math = storage
        .create_subject(subject("Math", "MTH1", "Arithmetic, algebra and geometry"))
        .await?;
    let science = storage
        .create_subject(subject("Science", "SCI1", "General science"))
        .await?;
    summary.subjects = 2;

    let amina = storage
        .create_teacher(CreateTeacherRequest {
            first_name: "Amina".to_string(),
            last_name: "K".to_string(),
            email: "amina.k@school.example".to_string(),
            phone: "+966501234567".to_string(),
            gender: Gender::Female,
            date_of_birth: date("1988-03-14")?,
            hire_date: date("2015-09-01")?,
            address: "12 Garden Street".to_string(),
            salary: Decimal::new(850_000, 2),
            subject_ids: vec![math.id],
        })
        .await?;
    let yusuf = storage
        .create_teacher(CreateTeacherRequest {
            first_name: "Yusuf".to_string(),
            last_name: "H".to_string(),
            email: "yusuf.h@school.example".to_string(),
            phone: "+966507654321".to_string(),
            gender: Gender::Male,
            date_of_birth: date("1982-11-02")?,
            hire_date: date("2012-09-01")?,
            address: "4 Palm Avenue".to_string(),
            salary: Decimal::new(920_000, 2),
            subject_ids: vec![math.id, science.id],
        })
        .await?;
    summary.teachers = 2;

    let omar = storage
        .create_student(CreateStudentRequest {
            student_id: "S001".to_string(),
            first_name: "Omar".to_string(),
            last_name: "Z".to_string(),
            email: None,
            phone: None,
            gender: Gender::Male,
            date_of_birth: date("2014-05-20")?,
            grade: GradeLevel::Fifth,
            enrollment_date: date("2020-09-01")?,
            address: "7 River Road".to_string(),
            parent_name: "Zaid Z".to_string(),
            parent_phone: "+966500000001".to_string(),
            subject_ids: vec![math.id, science.id],
        })
        .await?;
    let layla = storage
        .create_student(CreateStudentRequest {
            student_id: "S002".to_string(),
            first_name: "Layla".to_string(),
            last_name: "M".to_string(),
            email: Some("layla.m@school.example".to_string()),
            phone: None,
            gender: Gender::Female,
            date_of_birth: date("2013-02-08")?,
            grade: GradeLevel::Sixth,
            enrollment_date: date("2019-09-01")?,
            address: "21 Hill Lane".to_string(),
            parent_name: "Mona M".to_string(),
            parent_phone: "+966500000002".to_string(),
            subject_ids: vec![science.id],
        })
        .await?;
    summary.students = 2;

    let grades = [
        (omar.id, math.id, amina.id, 85, "2024-01-10"),
        (omar.id, science.id, yusuf.id, 78, "2024-01-17"),
        (layla.id, science.id, yusuf.id, 92, "2024-01-17"),
    ];
    for (student_id, subject_id, teacher_id, grade, exam_date) in grades {
        storage
            .create_grade(CreateGradeRequest {
                student_id,
                subject_id,
                teacher_id,
                grade: Decimal::from(grade),
                max_grade: Decimal::ONE_HUNDRED,
                exam_date: date(exam_date)?,
                notes: None,
            })
            .await?;
        summary.grades += 1;
    }

    Ok(summary)
}
