pub mod choices;
pub mod error_code;
pub mod filters;
pub mod pagination;
pub mod response;

pub use choices::{Choice, Gender, GradeLevel};
pub use error_code::ErrorCode;
pub use filters::{normalize_filter, normalize_search};
pub use pagination::{PageWindow, PaginationInfo};
pub use response::ApiResponse;
