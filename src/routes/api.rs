use actix_web::http::Method;
use actix_web::web;

use crate::handlers::dispatch::{dispatch_get, dispatch_post, method_not_allowed, preflight};
use crate::handlers::health::health_check;

pub fn configure_routes() -> actix_web::Scope {
    web::scope("")
        .route("/health", web::get().to(health_check))
        .route("/", web::get().to(dispatch_get))
        .route("/", web::post().to(dispatch_post))
        .route("/", web::method(Method::OPTIONS).to(preflight))
        .default_service(web::route().to(method_not_allowed))
}
