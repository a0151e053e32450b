use crate::handlers::{package_handler, referral_handler, wallet_handler};
use crate::types::wallet::{ActionQuery, WalletActionRequest};
use actix_web::{web, Error, HttpResponse, Result};
use serde_json::json;

/// GET requests select an action via the query string; a missing action
/// means a balance lookup.
pub async fn dispatch_get(query: web::Query<ActionQuery>) -> Result<HttpResponse, Error> {
    match query.action.as_deref().unwrap_or("balance") {
        "balance" => wallet_handler::get_balance(&query).await,
        "referral_stats" => referral_handler::get_referral_stats().await,
        other => Ok(unknown_action(other)),
    }
}

/// POST requests select an action via the body.
pub async fn dispatch_post(req: web::Json<WalletActionRequest>) -> Result<HttpResponse, Error> {
    match req.action.as_deref() {
        Some("withdraw") => wallet_handler::withdraw(&req).await,
        Some("deposit") => wallet_handler::deposit(&req).await,
        Some("buy_package") => package_handler::buy_package(&req).await,
        Some("get_payment_address") => package_handler::get_payment_address(&req).await,
        other => Ok(unknown_action(other.unwrap_or(""))),
    }
}

/// CORS preflight response.
pub async fn preflight() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type, X-User-Id"))
        .insert_header(("Access-Control-Max-Age", "86400"))
        .finish())
}

pub async fn method_not_allowed() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::MethodNotAllowed().json(json!({
        "error": "Method not allowed",
    })))
}

fn unknown_action(action: &str) -> HttpResponse {
    log::warn!("Unknown action requested: {:?}", action);
    HttpResponse::BadRequest().json(json!({
        "success": false,
        "error": format!("Unknown action: {}", action),
    }))
}
