use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::Gender;

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub date_of_birth: chrono::NaiveDate,
    pub hire_date: chrono::NaiveDate,
    pub address: String,
    #[ts(type = "string")]
    pub salary: Decimal,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Teacher {
    pub fn summary(&self) -> TeacherSummary {
        TeacherSummary {
            id: self.id,
            full_name: self.full_name.clone(),
        }
    }
}

// 成绩行中引用的教师摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherSummary {
    pub id: i64,
    pub full_name: String,
}
