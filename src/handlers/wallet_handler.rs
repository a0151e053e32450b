use crate::constants::currencies::{
    deposit_limits, payment_address, withdraw_limits, DEPOSIT_LIMITS, PLATFORM_WALLETS,
    WITHDRAW_LIMITS,
};
use crate::types::wallet::{ActionQuery, WalletActionRequest};
use crate::utils::fees::{round6, split_amount};
use crate::utils::tx::placeholder_tx_hash;
use actix_web::{Error, HttpResponse, Result};
use serde_json::json;
use std::collections::HashMap;

/// Balance lookup. Balances are simulated placeholders; the response also
/// carries the platform wallet addresses and both limits tables so clients
/// can render fees without a second round trip.
pub async fn get_balance(query: &ActionQuery) -> Result<HttpResponse, Error> {
    let balance: HashMap<&str, &str> = PLATFORM_WALLETS.keys().map(|c| (*c, "0.00")).collect();

    Ok(HttpResponse::Ok().json(json!({
        "balance": balance,
        "wallet": query.wallet.clone().unwrap_or_default(),
        "platform_wallets": &*PLATFORM_WALLETS,
        "deposit_limits": &*DEPOSIT_LIMITS,
        "withdraw_limits": &*WITHDRAW_LIMITS,
    })))
}

pub async fn withdraw(req: &WalletActionRequest) -> Result<HttpResponse, Error> {
    let amount = req.amount_value();
    let (crypto, limits) = withdraw_limits(req.crypto.as_deref());

    if amount < limits.min {
        log::warn!(
            "Withdrawal rejected: {} {} is below the {} minimum",
            amount,
            crypto,
            limits.min
        );
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": format!("Minimum withdrawal amount is {} {}", limits.min, crypto),
        })));
    }

    let split = split_amount(amount, limits.fee);
    let (_, platform) = payment_address(Some(crypto));
    let to_wallet = req
        .to_wallet
        .clone()
        .unwrap_or_else(|| platform.to_string());

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "transaction_hash": placeholder_tx_hash('a'),
        "amount": round6(amount),
        "crypto": crypto,
        "fee": round6(split.fee),
        "user_receives": round6(split.user_receives),
        "platform_earnings": round6(split.platform_earnings),
        "from": req.from_wallet.clone().unwrap_or_default(),
        "to": to_wallet,
        "message": format!(
            "Withdrawal of {} {}: you receive {} {}, fee {} {}",
            round6(amount),
            crypto,
            round6(split.user_receives),
            crypto,
            round6(split.fee),
            crypto
        ),
    })))
}

pub async fn deposit(req: &WalletActionRequest) -> Result<HttpResponse, Error> {
    let amount = req.amount_value();
    let (crypto, limits) = deposit_limits(req.crypto.as_deref());

    if amount < limits.min {
        log::warn!(
            "Deposit rejected: {} {} is below the {} minimum",
            amount,
            crypto,
            limits.min
        );
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": format!("Minimum deposit amount is {} {}", limits.min, crypto),
        })));
    }

    let split = split_amount(amount, limits.fee);
    let (_, platform) = payment_address(Some(crypto));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "transaction_hash": placeholder_tx_hash('c'),
        "amount": round6(amount),
        "crypto": crypto,
        "fee": round6(split.fee),
        "user_receives": round6(split.user_receives),
        "platform_earnings": round6(split.platform_earnings),
        "from": req.from_wallet.clone().unwrap_or_default(),
        "deposit_address": platform,
        "message": format!(
            "Deposit of {} {}: {} {} credited, fee {} {}",
            round6(amount),
            crypto,
            round6(split.user_receives),
            crypto,
            round6(split.fee),
            crypto
        ),
    })))
}
