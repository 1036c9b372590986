use serde::Serialize;
use ts_rs::TS;

use super::entities::GradeRecord;
use crate::models::common::PaginationInfo;
use crate::models::subjects::entities::Subject;

// 成绩分页列表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<GradeRecord>,
}

// 成绩列表页
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListView {
    pub grades: GradeListResponse,
    pub search_query: String,
    pub subject_filter: String,
    pub subjects: Vec<Subject>,
}
