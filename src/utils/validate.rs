use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

// 可选的 +，可选的国家码 1，随后 9 到 15 位数字
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?\d{9,15}$").expect("Invalid phone regex"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed.");
    }
    Ok(())
}

/// 必填文本字段：去除首尾空白后不能为空，且不超过最大字符数
pub fn validate_required_text(value: &str, max_chars: usize) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("This field is required");
    }
    if trimmed.chars().count() > max_chars {
        return Err("This field is too long");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("amina.k@school.example").is_ok());
        assert!(validate_email("omar+parent@mail.co").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("amina").is_err());
        assert!(validate_email("amina@school").is_err());
        assert!(validate_email("@school.example").is_err());
    }

    #[test]
    fn test_valid_phone() {
        assert!(validate_phone("+999999999").is_ok());
        assert!(validate_phone("123456789").is_ok());
        assert!(validate_phone("+1234567890123456").is_ok());
        assert!(validate_phone("966501234567").is_ok());
    }

    #[test]
    fn test_invalid_phone() {
        assert!(validate_phone("12345678").is_err());
        assert!(validate_phone("+12-3456-7890").is_err());
        assert!(validate_phone("phone").is_err());
        assert!(validate_phone("1234567890123456789").is_err());
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Math", 100).is_ok());
        assert!(validate_required_text("   ", 100).is_err());
        assert!(validate_required_text("MATHEMATICS1", 10).is_err());
    }
}
