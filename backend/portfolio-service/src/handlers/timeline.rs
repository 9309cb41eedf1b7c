/// Timeline handlers - career milestones
use super::ApiResponse;
use crate::error::{Result, ValidationErrorBody};
use crate::models::{NewTimelineMilestone, TimelineMilestone};
use crate::services::Storage;

#[utoipa::path(
    get,
    path = "/api/timeline",
    tag = "timeline",
    responses(
        (status = 200, description = "Milestones ordered by `order`", body = [TimelineMilestone])
    )
)]
pub async fn list_milestones(storage: &dyn Storage) -> Result<ApiResponse> {
    let milestones = storage.list_milestones().await?;
    ApiResponse::ok(&milestones)
}

#[utoipa::path(
    post,
    path = "/api/timeline",
    tag = "timeline",
    request_body = NewTimelineMilestone,
    responses(
        (status = 201, description = "Milestone created", body = TimelineMilestone),
        (status = 400, description = "Invalid milestone data", body = ValidationErrorBody)
    )
)]
pub async fn create_milestone(
    storage: &dyn Storage,
    milestone: NewTimelineMilestone,
) -> Result<ApiResponse> {
    let milestone = storage.create_milestone(milestone).await?;
    tracing::info!(
        milestone_id = %milestone.id,
        order = milestone.order,
        "timeline milestone created"
    );
    ApiResponse::created(&milestone)
}
