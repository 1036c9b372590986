use serde::Serialize;
use ts_rs::TS;

use crate::models::{students::entities::Student, teachers::entities::Teacher};

// 首页统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/home.ts")]
pub struct HomeSummary {
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_subjects: i64,
    pub total_grades: i64,
    // 最近登记的 5 名在籍学生
    pub recent_students: Vec<Student>,
    // 最近登记的 5 名在职教师
    pub recent_teachers: Vec<Teacher>,
}

// 站点显示文本（来自静态配置）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/home.ts")]
pub struct SiteInfo {
    pub header: String,
    pub title: String,
    pub index_title: String,
}

// 首页
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/home.ts")]
pub struct HomeView {
    pub site: SiteInfo,
    pub summary: HomeSummary,
}
