//! 路径参数提取器
//!
//! `{id}` 无法解析为正整数时直接返回 404，与记录不存在的响应保持一致。

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.parse::<i64>().ok()).filter(|id| *id > 0)
}

/// 记录内部 ID（路径参数 `{id}`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id");
        ready(match parse_positive_id(raw) {
            Some(id) => Ok(SafeIDI64(id)),
            None => {
                let response = HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::NotFound,
                    format!("Invalid record id: {}", raw.unwrap_or_default()),
                ));
                Err(InternalError::from_response("invalid record id", response).into())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id(Some("42")), Some(42));
        assert_eq!(parse_positive_id(Some("0")), None);
        assert_eq!(parse_positive_id(Some("-3")), None);
        assert_eq!(parse_positive_id(Some("abc")), None);
        assert_eq!(parse_positive_id(None), None);
    }
}
