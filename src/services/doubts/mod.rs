pub mod delete;
pub mod get;
pub mod list;
pub mod respond;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::doubts::{DoubtListQuery, RespondDoubtRequest, SubmitDoubtRequest};
use crate::storage::Storage;

pub struct DoubtService {
    storage: Option<Arc<dyn Storage>>,
}

impl DoubtService {
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

    // 学生提交疑问
    pub async fn submit_doubt(
        &self,
        submit_request: SubmitDoubtRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_doubt(self, submit_request, request).await
    }

    // 当前用户的疑问列表
    pub async fn list_my_doubts(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_my_doubts(self, request).await
    }

    // 管理员查看全部疑问
    pub async fn list_all_doubts(
        &self,
        query: DoubtListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_all_doubts(self, query, request).await
    }

    // 查看单条疑问（本人或管理员）
    pub async fn get_doubt(
        &self,
        doubt_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_doubt(self, doubt_id, request).await
    }

    // 管理员回复疑问
    pub async fn respond_doubt(
        &self,
        doubt_id: i64,
        respond_request: RespondDoubtRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        respond::handle_respond_doubt(self, doubt_id, respond_request, request).await
    }

    // 管理员删除疑问
    pub async fn delete_doubt(
        &self,
        doubt_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_doubt(self, doubt_id, request).await
    }
}
