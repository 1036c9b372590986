use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    // 科目ID
    pub id: i64,
    // 科目名称
    pub name: String,
    // 科目代码（唯一）
    pub code: String,
    // 科目描述
    pub description: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Subject {
    pub fn summary(&self) -> SubjectSummary {
        SubjectSummary {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

// 成绩行中引用的科目摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectSummary {
    pub id: i64,
    pub name: String,
    pub code: String,
}
