pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::videos::{CreateVideoRequest, UpdateVideoRequest, VideoListQuery};
use crate::storage::Storage;

pub struct VideoService {
    storage: Option<Arc<dyn Storage>>,
}

impl VideoService {
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

    // 管理员添加视频
    pub async fn create_video(
        &self,
        create_request: CreateVideoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_video(self, create_request, request).await
    }

    // 按分类筛选视频列表
    pub async fn list_videos(
        &self,
        query: VideoListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_videos(self, query, request).await
    }

    // 按学生偏好推荐视频
    pub async fn recommended_videos(
        &self,
        query: VideoListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_recommended_videos(self, query, request).await
    }

    // 获取单个视频
    pub async fn get_video(
        &self,
        video_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_video(self, video_id, request).await
    }

    // 管理员更新视频
    pub async fn update_video(
        &self,
        video_id: i64,
        update_request: UpdateVideoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_video(self, video_id, update_request, request).await
    }

    // 管理员删除视频
    pub async fn delete_video(
        &self,
        video_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_video(self, video_id, request).await
    }
}
