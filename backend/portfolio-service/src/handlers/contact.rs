/// Contact handlers - messages from the contact form
use super::ApiResponse;
use crate::error::{Result, ValidationErrorBody};
use crate::models::{ContactSubmission, NewContactSubmission};
use crate::services::Storage;

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Submissions, newest first", body = [ContactSubmission])
    )
)]
pub async fn list_submissions(storage: &dyn Storage) -> Result<ApiResponse> {
    let submissions = storage.list_contact_submissions().await?;
    ApiResponse::ok(&submissions)
}

/// Store a contact message. `submittedAt` is assigned here, never taken from
/// the payload.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = NewContactSubmission,
    responses(
        (status = 201, description = "Submission stored", body = ContactSubmission),
        (status = 400, description = "Invalid contact submission data", body = ValidationErrorBody)
    )
)]
pub async fn create_submission(
    storage: &dyn Storage,
    submission: NewContactSubmission,
) -> Result<ApiResponse> {
    let submission = storage.create_contact_submission(submission).await?;
    // the message body stays out of the logs
    tracing::info!(submission_id = %submission.id, "contact submission received");
    ApiResponse::created(&submission)
}
