/// Media handlers - playlists, images and videos
use super::ApiResponse;
use crate::error::{Result, ValidationErrorBody};
use crate::models::{MediaItem, NewMediaItem};
use crate::services::Storage;

#[utoipa::path(
    get,
    path = "/api/media",
    tag = "media",
    responses(
        (status = 200, description = "Media items in insertion order", body = [MediaItem])
    )
)]
pub async fn list_media_items(storage: &dyn Storage) -> Result<ApiResponse> {
    let items = storage.list_media_items().await?;
    ApiResponse::ok(&items)
}

#[utoipa::path(
    post,
    path = "/api/media",
    tag = "media",
    request_body = NewMediaItem,
    responses(
        (status = 201, description = "Media item created", body = MediaItem),
        (status = 400, description = "Invalid media item data", body = ValidationErrorBody)
    )
)]
pub async fn create_media_item(storage: &dyn Storage, item: NewMediaItem) -> Result<ApiResponse> {
    let item = storage.create_media_item(item).await?;
    tracing::info!(
        media_id = %item.id,
        media_type = item.media_type.as_str(),
        "media item created"
    );
    ApiResponse::created(&item)
}
