use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{
        requests::{GradeListParams, GradeListQuery},
        responses::GradeListView,
    },
};

pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
    params: GradeListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let search_query = params.search.clone().unwrap_or_default();
    let subject_filter = params.subject.raw.clone();

    let query = GradeListQuery {
        page: params.page,
        search: params.search,
        subject_id: params.subject.id,
    };

    let grades = match storage.list_grades_with_pagination(query).await {
        Ok(grades) => grades,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve grade list: {e}"),
                )),
            );
        }
    };

    let subjects = match storage.list_subjects().await {
        Ok(subjects) => subjects,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve subject list: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        GradeListView {
            grades,
            search_query,
            subject_filter,
            subjects,
        },
        "Grade list retrieved successfully",
    )))
}
