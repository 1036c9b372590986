use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码（写入 ApiResponse.code）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1500,

    // 学生
    StudentNotFound = 2004,

    // 教师
    TeacherNotFound = 3004,

    // 科目
    SubjectNotFound = 4004,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::StudentNotFound as i32, 2004);
        assert_eq!(ErrorCode::SubjectNotFound as i32, 4004);
    }
}
