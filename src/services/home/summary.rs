use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeService;
use crate::models::{ApiResponse, ErrorCode, home::responses::HomeView};

pub async fn get_summary(service: &HomeService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_home_summary().await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            HomeView {
                site: service.get_site_info(request),
                summary,
            },
            "Home summary retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve home summary: {e}"),
            )),
        ),
    }
}
