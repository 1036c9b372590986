use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode, Gender, GradeLevel,
    students::{
        requests::{StudentListParams, StudentListQuery},
        responses::StudentListView,
    },
};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    params: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 回显原始的搜索与筛选值
    let search_query = params.search.clone().unwrap_or_default();
    let grade_filter = params.grade.clone().unwrap_or_default();

    let query = StudentListQuery {
        page: params.page,
        search: params.search,
        grade: params.grade,
    };

    match storage.list_students_with_pagination(query).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentListView {
                students,
                search_query,
                grade_filter,
                grade_choices: GradeLevel::choices(),
                gender_choices: Gender::choices(),
            },
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
