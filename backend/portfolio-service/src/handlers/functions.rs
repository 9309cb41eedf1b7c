/// Per-route function shape
///
/// Each API route is mounted as its own stateless function. Functions share
/// the dispatcher with the server shape and differ only at the edge:
/// - every response carries permissive CORS headers;
/// - `OPTIONS` answers 200 with an empty body without touching storage.
use super::{dispatch, settle, ApiRequest, ApiResponse, Resource, Route};
use crate::services::Storage;
use actix_web::http::{header, Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/blog/{id}").route(web::route().to(blog_post_function)));
    for resource in Resource::ALL {
        cfg.service(
            web::resource(resource.path())
                .app_data(web::Data::new(resource))
                .route(web::route().to(collection_function)),
        );
    }
}

/// Run one function invocation.
pub async fn invoke(storage: &dyn Storage, request: ApiRequest<'_>) -> ApiResponse {
    if *request.method == Method::OPTIONS {
        return ApiResponse::empty(StatusCode::OK);
    }
    settle(dispatch(storage, request).await)
}

/// Render an invocation result with the function CORS headers.
pub fn into_function_response(response: ApiResponse) -> HttpResponse {
    let mut builder = HttpResponse::build(response.status);
    builder
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS));
    response.render(builder)
}

async fn collection_function(
    req: HttpRequest,
    resource: web::Data<Resource>,
    storage: web::Data<dyn Storage>,
    body: web::Bytes,
) -> HttpResponse {
    let request = ApiRequest::new(req.method(), Route::Collection(*resource.get_ref()), &body);
    into_function_response(invoke(storage.get_ref(), request).await)
}

async fn blog_post_function(
    req: HttpRequest,
    id: web::Path<String>,
    storage: web::Data<dyn Storage>,
    body: web::Bytes,
) -> HttpResponse {
    let request = ApiRequest::new(req.method(), Route::BlogPost(id.into_inner()), &body);
    into_function_response(invoke(storage.get_ref(), request).await)
}
