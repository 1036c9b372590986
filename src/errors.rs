//! 统一错误处理模块
//!
//! 校验类错误（重复代码、邮箱/电话格式、同一考试日期重复成绩等）与 NotFound 分属不同类别。
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolError {
            $($variant(String),)*
        }

        impl SchoolError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    NotFound("E004", "Resource Not Found"),
    DateParse("E005", "Date Parse Error"),
    Validation("E100", "Validation Error"),
    DuplicateCode("E101", "Duplicate Subject Code"),
    DuplicateEmail("E102", "Duplicate Email"),
    DuplicateStudentId("E103", "Duplicate Student ID"),
    InvalidEmailFormat("E104", "Invalid Email Format"),
    InvalidPhoneFormat("E105", "Invalid Phone Format"),
    InvalidGradeValue("E106", "Invalid Grade Value"),
    DuplicateStudentSubjectExamDate("E107", "Duplicate Student Subject Exam Date"),
}

impl SchoolError {
    /// 是否属于字段级校验错误（ValidationError 类），与 NotFound 等区分
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SchoolError::Validation(_)
                | SchoolError::DuplicateCode(_)
                | SchoolError::DuplicateEmail(_)
                | SchoolError::DuplicateStudentId(_)
                | SchoolError::InvalidEmailFormat(_)
                | SchoolError::InvalidPhoneFormat(_)
                | SchoolError::InvalidGradeValue(_)
                | SchoolError::DuplicateStudentSubjectExamDate(_)
        )
    }
}

impl SchoolError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolError::DatabaseOperation(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolError::database_config("test").code(), "E001");
        assert_eq!(SchoolError::not_found("test").code(), "E004");
        assert_eq!(SchoolError::validation("test").code(), "E100");
        assert_eq!(
            SchoolError::duplicate_student_subject_exam_date("test").code(),
            "E107"
        );
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolError::invalid_phone_format("test").error_type(),
            "Invalid Phone Format"
        );
        assert_eq!(
            SchoolError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_validation_kinds() {
        assert!(SchoolError::duplicate_code("MTH1").is_validation());
        assert!(SchoolError::invalid_email_format("x").is_validation());
        assert!(SchoolError::duplicate_student_subject_exam_date("x").is_validation());
        assert!(!SchoolError::not_found("student 1").is_validation());
        assert!(!SchoolError::database_operation("boom").is_validation());
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
