use rust_decimal::Decimal;
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::{
    Gender,
    filters::IdFilter,
    pagination::deserialize_lenient_page,
};

// 教师列表查询参数（来自HTTP请求）
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    pub search: Option<String>,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub subject: IdFilter,
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    #[ts(type = "string | null")]
    pub page: Option<i64>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub search: Option<String>,
    pub subject_id: Option<i64>,
}

// 创建教师请求（管理端）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub date_of_birth: chrono::NaiveDate,
    pub hire_date: chrono::NaiveDate,
    pub address: String,
    pub salary: Decimal,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
}
