use rust_decimal::Decimal;
use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;
use crate::models::common::{Choice, PaginationInfo};
use crate::models::grades::entities::GradeRecord;
use crate::models::subjects::entities::Subject;

// 学生分页列表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Student>,
}

// 学生列表页（回显搜索与筛选条件，附带年级/性别选项）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListView {
    pub students: StudentListResponse,
    pub search_query: String,
    pub grade_filter: String,
    pub grade_choices: Vec<Choice>,
    pub gender_choices: Vec<Choice>,
}

// 学生详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentDetail {
    pub student: Student,
    pub subjects: Vec<Subject>,
    // 按考试日期倒序
    pub grades: Vec<GradeRecord>,
    #[ts(type = "string | null")]
    pub avg_grade: Option<Decimal>,
}
