/// HTTP handlers for portfolio endpoints
///
/// Request handling is split in two layers:
/// - `dispatch`: transport-agnostic. Takes a method, route and raw body and
///   produces a status plus JSON body. All validation, storage calls and
///   error mapping happen here.
/// - `server` and `functions`: the two transport shapes. `server` mounts the
///   routes on a long-running actix-web app; `functions` mounts each route as
///   an independent function with permissive CORS headers and an `OPTIONS`
///   short-circuit.
///
/// Per-resource operations live in `blog`, `timeline`, `media` and `contact`.
pub mod blog;
pub mod contact;
pub mod functions;
pub mod health;
pub mod media;
pub mod server;
pub mod timeline;

use crate::config::ServeMode;
use crate::error::{AppError, Result};
use crate::metrics::{RECORDS_CREATED_TOTAL, VALIDATION_FAILURES_TOTAL};
use crate::models::{EntityKind, FieldViolation, InsertableRecord, ValidationError};
use crate::services::Storage;
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpResponse, HttpResponseBuilder, ResponseError};
use serde::Serialize;
use serde_json::Value;

/// One of the four entity collections exposed under `/api`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Blog,
    Timeline,
    Media,
    Contact,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Blog,
        Resource::Timeline,
        Resource::Media,
        Resource::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Resource::Blog => "/api/blog",
            Resource::Timeline => "/api/timeline",
            Resource::Media => "/api/media",
            Resource::Contact => "/api/contact",
        }
    }

    pub fn kind(self) -> EntityKind {
        match self {
            Resource::Blog => EntityKind::BlogPost,
            Resource::Timeline => EntityKind::TimelineMilestone,
            Resource::Media => EntityKind::MediaItem,
            Resource::Contact => EntityKind::ContactSubmission,
        }
    }
}

/// Route targeted by a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/api/{collection}`
    Collection(Resource),
    /// `/api/blog/{id}`
    BlogPost(String),
}

/// Transport-independent request
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    pub method: &'a Method,
    pub route: Route,
    pub body: &'a [u8],
}

impl<'a> ApiRequest<'a> {
    pub fn new(method: &'a Method, route: Route, body: &'a [u8]) -> Self {
        Self {
            method,
            route,
            body,
        }
    }
}

/// Transport-independent response: a status and an optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn ok<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self {
            status: StatusCode::OK,
            body: Some(serde_json::to_value(value)?),
        })
    }

    pub fn created<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self {
            status: StatusCode::CREATED,
            body: Some(serde_json::to_value(value)?),
        })
    }

    pub fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    /// Map a failed request to its client-facing response, logging internal
    /// causes.
    pub fn from_error(err: &AppError) -> Self {
        err.log();
        Self {
            status: err.status_code(),
            body: Some(err.body()),
        }
    }

    /// Finish `builder` with this response's body.
    pub fn render(self, mut builder: HttpResponseBuilder) -> HttpResponse {
        match self.body {
            Some(body) => builder.json(body),
            None => builder.finish(),
        }
    }

    pub fn into_http(self) -> HttpResponse {
        let builder = HttpResponse::build(self.status);
        self.render(builder)
    }
}

/// Collapse a handler result into the response sent to the client.
pub fn settle(result: Result<ApiResponse>) -> ApiResponse {
    result.unwrap_or_else(|err| ApiResponse::from_error(&err))
}

/// Route a request to its storage operation.
pub async fn dispatch(storage: &dyn Storage, request: ApiRequest<'_>) -> Result<ApiResponse> {
    match request.route {
        Route::Collection(resource) => match *request.method {
            Method::GET => list(storage, resource).await,
            Method::POST => create(storage, resource, request.body).await,
            _ => Err(AppError::MethodNotAllowed),
        },
        Route::BlogPost(id) => match *request.method {
            Method::GET => blog::get_post(storage, &id).await,
            _ => Err(AppError::MethodNotAllowed),
        },
    }
}

async fn list(storage: &dyn Storage, resource: Resource) -> Result<ApiResponse> {
    match resource {
        Resource::Blog => blog::list_posts(storage).await,
        Resource::Timeline => timeline::list_milestones(storage).await,
        Resource::Media => media::list_media_items(storage).await,
        Resource::Contact => contact::list_submissions(storage).await,
    }
}

async fn create(storage: &dyn Storage, resource: Resource, body: &[u8]) -> Result<ApiResponse> {
    let kind = resource.kind();
    let record = parse_payload(kind, body)
        .and_then(|payload| kind.validate(&payload))
        .map_err(|err| {
            VALIDATION_FAILURES_TOTAL
                .with_label_values(&[kind.collection()])
                .inc();
            tracing::debug!(
                collection = kind.collection(),
                violations = err.violations.len(),
                "payload rejected"
            );
            err
        })?;

    let response = match record {
        InsertableRecord::BlogPost(post) => blog::create_post(storage, post).await?,
        InsertableRecord::TimelineMilestone(milestone) => {
            timeline::create_milestone(storage, milestone).await?
        }
        InsertableRecord::MediaItem(item) => media::create_media_item(storage, item).await?,
        InsertableRecord::ContactSubmission(submission) => {
            contact::create_submission(storage, submission).await?
        }
    };

    RECORDS_CREATED_TOTAL
        .with_label_values(&[kind.collection()])
        .inc();
    Ok(response)
}

fn parse_payload(kind: EntityKind, body: &[u8]) -> std::result::Result<Value, ValidationError> {
    serde_json::from_slice(body).map_err(|err| {
        ValidationError::new(kind, vec![FieldViolation::invalid_json(err.to_string())])
    })
}

/// Register operational endpoints plus the API routes for `mode`.
pub fn configure(mode: ServeMode, cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_summary))
        .route("/health/live", web::get().to(health::liveness_check))
        .route("/metrics", web::get().to(crate::metrics::serve_metrics))
        .route(
            "/api/openapi.json",
            web::get().to(crate::openapi::openapi_json),
        );

    match mode {
        ServeMode::Server => server::configure(cfg),
        ServeMode::Functions => functions::configure(cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemStorage;
    use serde_json::json;

    async fn run(storage: &dyn Storage, method: Method, route: Route, body: &[u8]) -> ApiResponse {
        settle(dispatch(storage, ApiRequest::new(&method, route, body)).await)
    }

    #[tokio::test]
    async fn get_collection_lists_records() {
        let storage = MemStorage::default();
        let response = run(&storage, Method::GET, Route::Collection(Resource::Timeline), b"").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.unwrap().as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn invalid_post_does_not_touch_storage() {
        let storage = MemStorage::default();
        let response = run(
            &storage,
            Method::POST,
            Route::Collection(Resource::Media),
            br#"{"title": "No url", "type": "image"}"#,
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let body = response.body.unwrap();
        assert_eq!(body["error"], "Invalid media item data");
        assert_eq!(body["details"][0]["path"], json!(["url"]));
        assert_eq!(storage.counts().await.media_items, 2);
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_failure() {
        let storage = MemStorage::default();
        let response = run(
            &storage,
            Method::POST,
            Route::Collection(Resource::Contact),
            b"{\"name\": ",
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let body = response.body.unwrap();
        assert_eq!(body["error"], "Invalid contact submission data");
        assert_eq!(body["details"][0]["code"], "invalid_json");
    }

    #[tokio::test]
    async fn unsupported_verbs_are_rejected() {
        let storage = MemStorage::default();
        for (method, route) in [
            (Method::PATCH, Route::Collection(Resource::Media)),
            (Method::DELETE, Route::Collection(Resource::Blog)),
            (Method::PUT, Route::BlogPost("anything".into())),
        ] {
            let response = run(&storage, method, route, b"").await;
            assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(response.body, Some(json!({"error": "Method not allowed"})));
        }
    }
}
