pub mod grades;
pub mod home;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use grades::GradeService;
pub use home::HomeService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
