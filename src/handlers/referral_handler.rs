use actix_web::{Error, HttpResponse, Result};
use serde_json::json;

/// Placeholder referral statistics. The referral program is simulated; no
/// per-user tracking exists behind these figures.
pub async fn get_referral_stats() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().json(json!({
        "total_earned": "0.046",
        "referrals_count": 3,
        "active_levels": 2,
        "commission_rate": "5%",
    })))
}
