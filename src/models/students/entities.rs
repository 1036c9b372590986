use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::{Gender, GradeLevel};

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    // 内部ID
    pub id: i64,
    // 学号（外部分配，唯一）
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Gender,
    pub date_of_birth: chrono::NaiveDate,
    pub grade: GradeLevel,
    pub enrollment_date: chrono::NaiveDate,
    pub address: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            id: self.id,
            student_id: self.student_id.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

// 成绩行中引用的学生摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentSummary {
    pub id: i64,
    pub student_id: String,
    pub full_name: String,
}
