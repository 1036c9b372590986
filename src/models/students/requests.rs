use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::{Gender, GradeLevel, pagination::deserialize_lenient_page};

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    pub search: Option<String>,
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    #[ts(type = "string | null")]
    pub page: Option<i64>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub search: Option<String>,
    // 年级标签，按原样比较；无效标签只会得到空结果
    pub grade: Option<String>,
}

// 创建学生请求（管理端）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Gender,
    pub date_of_birth: chrono::NaiveDate,
    pub grade: GradeLevel,
    pub enrollment_date: chrono::NaiveDate,
    pub address: String,
    pub parent_name: String,
    pub parent_phone: String,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
}
