use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{
        requests::{TeacherListParams, TeacherListQuery},
        responses::TeacherListView,
    },
};

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    params: TeacherListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let search_query = params.search.clone().unwrap_or_default();
    let subject_filter = params.subject.raw.clone();

    let query = TeacherListQuery {
        page: params.page,
        search: params.search,
        subject_id: params.subject.id,
    };

    let teachers = match storage.list_teachers_with_pagination(query).await {
        Ok(teachers) => teachers,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve teacher list: {e}"),
                )),
            );
        }
    };

    // 科目筛选下拉框
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
        TeacherListView {
            teachers,
            search_query,
            subject_filter,
            subjects,
        },
        "Teacher list retrieved successfully",
    )))
}
