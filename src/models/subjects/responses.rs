use rust_decimal::Decimal;
use serde::Serialize;
use ts_rs::TS;

use super::entities::Subject;
use crate::models::{
    grades::entities::GradeRecord, students::entities::Student, teachers::entities::Teacher,
};

// 带统计信息的科目
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectWithStats {
    #[serde(flatten)]
    #[ts(flatten)]
    pub subject: Subject,
    // 在读学生数（仅统计在籍学生）
    pub students_count: i64,
    // 任课教师数（仅统计在职教师）
    pub teachers_count: i64,
}

// 科目列表页
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListView {
    pub subjects: Vec<SubjectWithStats>,
}

// 科目详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectDetail {
    pub subject: Subject,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    // 最近 10 条成绩
    pub recent_grades: Vec<GradeRecord>,
    // 该科目全部成绩的平均分
    #[ts(type = "string | null")]
    pub avg_grade: Option<Decimal>,
}
