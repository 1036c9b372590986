//! 列表查询参数的通用处理

use serde::Deserialize;

/// 数字 ID 过滤参数
///
/// 保留收到的原始字符串用于回显；空白内容视为未指定，非数字内容返回反序列化错误（400）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdFilter {
    pub raw: String,
    pub id: Option<i64>,
}

impl<'de> Deserialize<'de> for IdFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Unexpected};

        let raw = String::deserialize(deserializer)?;
        let id = match raw.trim() {
            "" => None,
            value => Some(value.parse::<i64>().map_err(|_| {
                Error::invalid_value(Unexpected::Str(value), &"an integer identifier")
            })?),
        };
        Ok(IdFilter { raw, id })
    }
}

/// 规范化搜索关键字：去除首尾空白，空内容视为不搜索
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 规范化分类过滤值（如年级）
pub fn normalize_filter(filter: Option<&str>) -> Option<String> {
    normalize_search(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct SubjectOnly {
        #[serde(default)]
        subject: IdFilter,
    }

    #[test]
    fn test_id_filter() {
        let parsed: SubjectOnly = serde_json::from_str(r#"{"subject":"12"}"#).unwrap();
        assert_eq!(parsed.subject.id, Some(12));

        // 回显保留原始内容
        let parsed: SubjectOnly = serde_json::from_str(r#"{"subject":" 3 "}"#).unwrap();
        assert_eq!(parsed.subject.id, Some(3));
        assert_eq!(parsed.subject.raw, " 3 ");

        let parsed: SubjectOnly = serde_json::from_str(r#"{"subject":""}"#).unwrap();
        assert_eq!(parsed.subject, IdFilter::default());

        let parsed: SubjectOnly = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.subject.id, None);
        assert_eq!(parsed.subject.raw, "");

        assert!(serde_json::from_str::<SubjectOnly>(r#"{"subject":"math"}"#).is_err());
    }

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search(Some("  Omar ")), Some("Omar".to_string()));
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(None), None);
    }
}
