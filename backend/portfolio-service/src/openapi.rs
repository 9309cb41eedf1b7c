/// OpenAPI documentation for Portfolio Service
use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::error::{ErrorBody, ValidationErrorBody};
use crate::handlers::{blog, contact, media, timeline};
use crate::models::{
    AspectRatio, BlogPost, ContactSubmission, FieldViolation, MediaItem, MediaType, NewBlogPost,
    NewContactSubmission, NewMediaItem, NewTimelineMilestone, TimelineMilestone, ViolationCode,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Service API",
        version = "1.0.0",
        description = "Content backend for a personal portfolio site: journal posts, career timeline milestones, media gallery items and contact form submissions. Records are held in memory and validated before storage.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    paths(
        blog::list_posts,
        blog::get_post,
        blog::create_post,
        timeline::list_milestones,
        timeline::create_milestone,
        media::list_media_items,
        media::create_media_item,
        contact::list_submissions,
        contact::create_submission,
    ),
    components(schemas(
        BlogPost,
        NewBlogPost,
        TimelineMilestone,
        NewTimelineMilestone,
        MediaItem,
        NewMediaItem,
        MediaType,
        AspectRatio,
        ContactSubmission,
        NewContactSubmission,
        FieldViolation,
        ViolationCode,
        ErrorBody,
        ValidationErrorBody,
    )),
    tags(
        (name = "blog", description = "Journal posts"),
        (name = "timeline", description = "Career timeline milestones"),
        (name = "media", description = "Media gallery items"),
        (name = "contact", description = "Contact form submissions"),
    ),
)]
pub struct ApiDoc;

/// Serve the generated document as JSON.
pub async fn openapi_json() -> actix_web::Result<HttpResponse> {
    let body = ApiDoc::openapi().to_json().map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_api_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/blog",
            "/api/blog/{id}",
            "/api/timeline",
            "/api/media",
            "/api/contact",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn includes_error_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("ValidationErrorBody"));
        assert!(components.schemas.contains_key("FieldViolation"));
    }
}
