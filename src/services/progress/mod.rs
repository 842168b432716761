pub mod list;
pub mod mark_watched;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::progress::{MarkWatchedRequest, ProgressListQuery};
use crate::storage::Storage;

pub struct ProgressService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProgressService {
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

    // 标记视频已观看
    pub async fn mark_watched(
        &self,
        mark_request: MarkWatchedRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark_watched::handle_mark_watched(self, mark_request, request).await
    }

    // 当前用户的观看记录
    pub async fn list_progress(
        &self,
        query: ProgressListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_progress(self, query, request).await
    }
}
