use serde::Deserialize;

// 创建科目请求（管理端）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}
