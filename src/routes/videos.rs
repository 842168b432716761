use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::videos::{CreateVideoRequest, UpdateVideoRequest, VideoListQuery};
use crate::services::VideoService;
use crate::utils::SafeVideoIdI64;

// 懒加载的全局 VideoService 实例
static VIDEO_SERVICE: Lazy<VideoService> = Lazy::new(VideoService::new_lazy);

pub async fn list_videos(
    req: HttpRequest,
    query: web::Query<VideoListQuery>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.list_videos(query.into_inner(), &req).await
}

pub async fn recommended_videos(
    req: HttpRequest,
    query: web::Query<VideoListQuery>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE
        .recommended_videos(query.into_inner(), &req)
        .await
}

pub async fn get_video(req: HttpRequest, video_id: SafeVideoIdI64) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.get_video(video_id.0, &req).await
}

pub async fn create_video(
    req: HttpRequest,
    video_data: web::Json<CreateVideoRequest>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE
        .create_video(video_data.into_inner(), &req)
        .await
}

pub async fn update_video(
    req: HttpRequest,
    video_id: SafeVideoIdI64,
    update_data: web::Json<UpdateVideoRequest>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE
        .update_video(video_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_video(req: HttpRequest, video_id: SafeVideoIdI64) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.delete_video(video_id.0, &req).await
}

// 配置路由
pub fn configure_videos_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/videos")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_videos))
                    .route(
                        web::post()
                            .to(create_video)
                            // 仅管理员可以添加视频
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .route("/recommended", web::get().to(recommended_videos))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_video))
                    .route(
                        web::put()
                            .to(update_video)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_video)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
