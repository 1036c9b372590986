pub mod grades;

pub mod home;

pub mod students;

pub mod subjects;

pub mod teachers;

pub use grades::configure_grade_routes;
pub use home::configure_home_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use teachers::configure_teacher_routes;

use actix_web::web;

/// 注册全部只读页面路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_home_routes)
        .configure(configure_student_routes)
        .configure(configure_teacher_routes)
        .configure(configure_subject_routes)
        .configure(configure_grade_routes);
}
