pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::home::responses::SiteInfo;
use crate::storage::Storage;

pub struct HomeService {
    storage: Option<Arc<dyn Storage>>,
}

impl HomeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 站点显示文本：优先使用注册到 app_data 的值，否则读取全局配置
    pub(crate) fn get_site_info(&self, request: &HttpRequest) -> SiteInfo {
        request
            .app_data::<web::Data<SiteInfo>>()
            .map(|site| site.get_ref().clone())
            .unwrap_or_else(|| AppConfig::get().site_info())
    }

    // 首页统计
    pub async fn get_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        summary::get_summary(self, request).await
    }
}
