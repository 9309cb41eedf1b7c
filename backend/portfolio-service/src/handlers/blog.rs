/// Blog handlers - journal posts
use super::ApiResponse;
use crate::error::{AppError, ErrorBody, Result, ValidationErrorBody};
use crate::models::{BlogPost, NewBlogPost};
use crate::services::Storage;

/// List posts, newest first
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    responses(
        (status = 200, description = "Posts ordered by publishedAt, newest first", body = [BlogPost])
    )
)]
pub async fn list_posts(storage: &dyn Storage) -> Result<ApiResponse> {
    let posts = storage.list_blog_posts().await?;
    ApiResponse::ok(&posts)
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    tag = "blog",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "The post", body = BlogPost),
        (status = 404, description = "Post not found", body = ErrorBody)
    )
)]
pub async fn get_post(storage: &dyn Storage, id: &str) -> Result<ApiResponse> {
    match storage.get_blog_post(id).await? {
        Some(post) => ApiResponse::ok(&post),
        None => Err(AppError::not_found("Post not found")),
    }
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/api/blog",
    tag = "blog",
    request_body = NewBlogPost,
    responses(
        (status = 201, description = "Post created", body = BlogPost),
        (status = 400, description = "Invalid blog post data", body = ValidationErrorBody)
    )
)]
pub async fn create_post(storage: &dyn Storage, post: NewBlogPost) -> Result<ApiResponse> {
    let post = storage.create_blog_post(post).await?;
    tracing::info!(post_id = %post.id, title = %post.title, "blog post created");
    ApiResponse::created(&post)
}
