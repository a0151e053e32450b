use crate::constants::currencies::payment_address;
use crate::types::wallet::WalletActionRequest;
use crate::utils::fees::round6;
use crate::utils::tx::placeholder_tx_hash;
use actix_web::{Error, HttpResponse, Result};
use serde_json::json;

/// Package purchase. There is no package catalog; the identifier is echoed
/// back as supplied, with the payment address resolved per currency.
pub async fn buy_package(req: &WalletActionRequest) -> Result<HttpResponse, Error> {
    let (crypto, address) = payment_address(req.crypto.as_deref());
    let amount = req.amount_value();
    let package_id = req.package_id_value();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "transaction_hash": placeholder_tx_hash('b'),
        "package_id": package_id,
        "amount": round6(amount),
        "crypto": crypto,
        "from": req.wallet.clone().unwrap_or_default(),
        "to": address,
        "payment_address": address,
        "referrer": req.referrer.clone().unwrap_or_default(),
        "message": format!(
            "Package #{} purchased for {} {}",
            package_label(&package_id),
            round6(amount),
            crypto
        ),
    })))
}

pub async fn get_payment_address(req: &WalletActionRequest) -> Result<HttpResponse, Error> {
    let (crypto, address) = payment_address(req.crypto.as_deref());

    Ok(HttpResponse::Ok().json(json!({
        "address": address,
        "crypto": crypto,
        "package_id": req.package_id_value(),
    })))
}

fn package_label(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
