use serde::Serialize;
use ts_rs::TS;

use super::entities::Teacher;
use crate::models::common::PaginationInfo;
use crate::models::subjects::entities::Subject;

// 教师分页列表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Teacher>,
}

// 教师列表页（回显搜索与筛选条件，附带科目筛选选项）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListView {
    pub teachers: TeacherListResponse,
    pub search_query: String,
    pub subject_filter: String,
    pub subjects: Vec<Subject>,
}

// 教师详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherDetail {
    pub teacher: Teacher,
    pub subjects: Vec<Subject>,
    // 所教科目下的在籍学生数（去重）
    pub students_count: i64,
    // 该教师录入的成绩数
    pub grades_count: i64,
}
