use rust_decimal::Decimal;
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::{
    filters::IdFilter, pagination::deserialize_lenient_page,
};

// 成绩列表查询参数（来自HTTP请求）
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListParams {
    pub search: Option<String>,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub subject: IdFilter,
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    #[ts(type = "string | null")]
    pub page: Option<i64>,
}

// 成绩列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct GradeListQuery {
    pub page: Option<i64>,
    pub search: Option<String>,
    pub subject_id: Option<i64>,
}

fn default_max_grade() -> Decimal {
    Decimal::ONE_HUNDRED
}

// 录入成绩请求（管理端）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub grade: Decimal,
    #[serde(default = "default_max_grade")]
    pub max_grade: Decimal,
    pub exam_date: chrono::NaiveDate,
    pub notes: Option<String>,
}
