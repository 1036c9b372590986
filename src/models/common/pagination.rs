use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
}

/// 根据请求页码与结果总数计算出的实际页窗口
///
/// 页码越界时不会报错：小于 1 的页码落到第一页，超过最后一页的页码落到最后一页。
/// 结果为空时返回第 1 页（共 0 页）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1 起始的页码
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PageWindow {
    pub fn resolve(requested: Option<i64>, total: u64, page_size: u64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let last = total_pages.max(1);

        let page = match requested {
            Some(p) if p < 1 => 1,
            Some(p) => (p as u64).min(last),
            None => 1,
        };

        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }

    /// 供 `Paginator::fetch_page` 使用的 0 起始页码
    pub fn zero_based(&self) -> u64 {
        self.page - 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn into_info(self) -> PaginationInfo {
        PaginationInfo {
            page: self.page as i64,
            page_size: self.page_size as i64,
            total: self.total as i64,
            total_pages: self.total_pages as i64,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            previous_page: self.has_previous().then(|| self.page as i64 - 1),
            next_page: self.has_next().then(|| self.page as i64 + 1),
        }
    }
}

/// 宽松的页码反序列化：非数字或空字符串视为未指定，不会导致请求失败
///
/// 超出 i64 范围的纯数字页码按最大值处理，随后落到最后一页。
pub(crate) fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(str::trim).and_then(parse_page))
}

fn parse_page(raw: &str) -> Option<i64> {
    if let Ok(page) = raw.parse::<i64>() {
        return Some(page);
    }
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Some(i64::MAX);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(PageWindow::resolve(Some(1), 0, 10).total_pages, 0);
        assert_eq!(PageWindow::resolve(Some(1), 10, 10).total_pages, 1);
        assert_eq!(PageWindow::resolve(Some(1), 11, 10).total_pages, 2);
        assert_eq!(PageWindow::resolve(Some(1), 31, 15).total_pages, 3);
    }

    #[test]
    fn test_page_clamps_to_first() {
        assert_eq!(PageWindow::resolve(Some(0), 25, 10).page, 1);
        assert_eq!(PageWindow::resolve(Some(-7), 25, 10).page, 1);
        assert_eq!(PageWindow::resolve(None, 25, 10).page, 1);
    }

    #[test]
    fn test_page_clamps_to_last() {
        let window = PageWindow::resolve(Some(99), 25, 10);
        assert_eq!(window.page, 3);
        assert!(window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn test_empty_result_is_first_page() {
        let window = PageWindow::resolve(Some(5), 0, 10);
        assert_eq!(window.page, 1);
        assert_eq!(window.zero_based(), 0);
        assert!(!window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn test_into_info_neighbours() {
        let info = PageWindow::resolve(Some(2), 25, 10).into_info();
        assert_eq!(info.page, 2);
        assert_eq!(info.previous_page, Some(1));
        assert_eq!(info.next_page, Some(3));
        assert!(info.has_previous && info.has_next);
    }

    #[derive(Debug, Deserialize)]
    struct PageOnly {
        #[serde(default, deserialize_with = "deserialize_lenient_page")]
        page: Option<i64>,
    }

    #[test]
    fn test_lenient_page_parsing() {
        let parsed: PageOnly = serde_json::from_str(r#"{"page":"3"}"#).unwrap();
        assert_eq!(parsed.page, Some(3));

        let parsed: PageOnly = serde_json::from_str(r#"{"page":"abc"}"#).unwrap();
        assert_eq!(parsed.page, None);

        let parsed: PageOnly = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.page, None);
    }

    #[test]
    fn test_overflowing_page_clamps_to_last() {
        let parsed: PageOnly =
            serde_json::from_str(r#"{"page":"99999999999999999999"}"#).unwrap();
        assert_eq!(parsed.page, Some(i64::MAX));

        let window = PageWindow::resolve(parsed.page, 25, 10);
        assert_eq!(window.page, 3);

        // 负数溢出仍视为无效页码
        let parsed: PageOnly =
            serde_json::from_str(r#"{"page":"-99999999999999999999"}"#).unwrap();
        assert_eq!(parsed.page, None);
    }
}
