//! 数据模型定义
//!
//! - `entities`: 业务实体（由 SeaORM 实体转换而来）
//! - `requests`: HTTP 查询参数与管理端写入请求
//! - `responses`: 返回给视图层的结构（分页信息、回显的搜索条件、选项列表）

pub mod common;
pub mod grades;
pub mod home;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use common::{
    ApiResponse, Choice, ErrorCode, Gender, GradeLevel, PageWindow, PaginationInfo,
};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
