use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::categories::Categories;
use crate::models::categories::defaults::{
    CONFIG_KEY_CLASSES, CONFIG_KEY_SUBJECTS, default_chapters_for, default_classes,
    default_subjects,
};
use crate::models::{ApiResponse, ErrorCode};

use super::CategoryService;

pub async fn handle_get_categories(
    service: &CategoryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 年级和学科缺省时写入默认值，保证首个请求之后配置就存在
    let classes = match storage.get_platform_config(CONFIG_KEY_CLASSES).await {
        Ok(Some(values)) => values,
        Ok(None) => {
            let defaults = default_classes();
            if let Err(e) = storage
                .set_platform_config(CONFIG_KEY_CLASSES, defaults.clone())
                .await
            {
                tracing::warn!("Failed to seed default classes: {}", e);
            }
            defaults
        }
        Err(e) => return Ok(internal_error(e)),
    };

    let subjects = match storage.get_platform_config(CONFIG_KEY_SUBJECTS).await {
        Ok(Some(values)) => values,
        Ok(None) => {
            let defaults = default_subjects();
            if let Err(e) = storage
                .set_platform_config(CONFIG_KEY_SUBJECTS, defaults.clone())
                .await
            {
                tracing::warn!("Failed to seed default subjects: {}", e);
            }
            defaults
        }
        Err(e) => return Ok(internal_error(e)),
    };

    let stored_chapters = match storage.list_chapters().await {
        Ok(chapters) => chapters,
        Err(e) => return Ok(internal_error(e)),
    };

    let mut chapters: HashMap<String, Vec<String>> = HashMap::new();
    for chapter in stored_chapters {
        chapters.entry(chapter.subject).or_default().push(chapter.name);
    }

    // 没有章节记录的学科用内置章节补齐并落库
    for subject in &subjects {
        if !chapters.contains_key(subject) {
            let defaults = default_chapters_for(subject);
            if !defaults.is_empty() {
                if let Err(e) = storage.replace_chapters(subject, defaults.clone()).await {
                    tracing::warn!("Failed to seed chapters for {}: {}", subject, e);
                }
            }
            chapters.insert(subject.clone(), defaults);
        }
    }

    let categories = Categories {
        classes,
        subjects,
        chapters,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(categories, "Categories retrieved")))
}

fn internal_error(e: crate::errors::ElearnError) -> HttpResponse {
    tracing::error!("Failed to load categories: {}", e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Failed to load categories",
    ))
}
