pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attempts::{AttemptListQuery, SubmitAttemptRequest};
use crate::storage::Storage;

pub struct AttemptService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttemptService {
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

    // 学生提交答案，服务端判分
    pub async fn submit_attempt(
        &self,
        submit_request: SubmitAttemptRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_attempt(self, submit_request, request).await
    }

    // 当前用户的答题历史
    pub async fn list_attempts(
        &self,
        query: AttemptListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_attempts(self, query, request).await
    }
}
