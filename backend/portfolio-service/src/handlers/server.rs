/// Long-running server shape
///
/// One actix resource per route; every verb is routed into the dispatcher so
/// unsupported methods get the JSON 405 body. CORS is handled by `actix-cors`
/// around the whole app (see [`cors`]).
use super::{dispatch, settle, ApiRequest, Resource, Route};
use crate::services::Storage;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/blog/{id}").route(web::route().to(blog_post_endpoint)));
    for resource in Resource::ALL {
        cfg.service(
            web::resource(resource.path())
                .app_data(web::Data::new(resource))
                .route(web::route().to(collection_endpoint)),
        );
    }
}

async fn collection_endpoint(
    req: HttpRequest,
    resource: web::Data<Resource>,
    storage: web::Data<dyn Storage>,
    body: web::Bytes,
) -> HttpResponse {
    let request = ApiRequest::new(req.method(), Route::Collection(*resource.get_ref()), &body);
    settle(dispatch(storage.get_ref(), request).await).into_http()
}

async fn blog_post_endpoint(
    req: HttpRequest,
    id: web::Path<String>,
    storage: web::Data<dyn Storage>,
    body: web::Bytes,
) -> HttpResponse {
    let request = ApiRequest::new(req.method(), Route::BlogPost(id.into_inner()), &body);
    settle(dispatch(storage.get_ref(), request).await).into_http()
}

/// CORS policy for the server shape, built from a comma-separated origin list.
pub fn cors(allowed_origins: &str) -> Cors {
    let mut cors = Cors::default();
    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if origin.is_empty() {
            continue;
        }
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
