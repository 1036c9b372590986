use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::HomeService;

// 懒加载的全局 HOME_SERVICE 实例
static HOME_SERVICE: Lazy<HomeService> = Lazy::new(HomeService::new_lazy);

// HTTP处理程序
pub async fn get_home(req: HttpRequest) -> ActixResult<HttpResponse> {
    HOME_SERVICE.get_summary(&req).await
}

// 配置路由
pub fn configure_home_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(get_home)));
}
