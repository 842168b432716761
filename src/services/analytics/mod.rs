pub mod platform;
pub mod student_stats;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct AnalyticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnalyticsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 管理端平台统计
    pub async fn platform_analytics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        platform::handle_platform_analytics(self, request).await
    }

    // 管理端学生列表（带统计）
    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        students::handle_list_students(self, request).await
    }

    // 学生个人学习统计
    pub async fn student_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        student_stats::handle_student_stats(self, request).await
    }
}
