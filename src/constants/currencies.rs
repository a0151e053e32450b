use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Single platform-owned address all user funds are routed to. Every
/// supported currency currently maps to this one address.
pub const PLATFORM_WALLET_ADDRESS: &str = "0x98b49bb2c613700D3c31266d245392bCE61bD991";

/// Currency applied when a request carries a missing or unknown code.
pub const FALLBACK_CURRENCY: &str = "BNB";

/// Minimum transferable amount and platform fee rate for one currency.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrencyLimits {
    pub min: f64,
    pub fee: f64,
}

lazy_static! {
    pub static ref PLATFORM_WALLETS: HashMap<&'static str, &'static str> = {
        let mut wallets = HashMap::new();
        wallets.insert("BNB", PLATFORM_WALLET_ADDRESS);
        wallets.insert("BTC", PLATFORM_WALLET_ADDRESS);
        wallets.insert("USDT", PLATFORM_WALLET_ADDRESS);
        wallets.insert("ETH", PLATFORM_WALLET_ADDRESS);
        wallets
    };
    pub static ref DEPOSIT_LIMITS: HashMap<&'static str, CurrencyLimits> = {
        let mut limits = HashMap::new();
        limits.insert("BNB", CurrencyLimits { min: 0.1, fee: 0.02 });
        limits.insert("BTC", CurrencyLimits { min: 0.0005, fee: 0.02 });
        limits
    };
    pub static ref WITHDRAW_LIMITS: HashMap<&'static str, CurrencyLimits> = {
        let mut limits = HashMap::new();
        limits.insert("BNB", CurrencyLimits { min: 1.0, fee: 0.05 });
        limits.insert("BTC", CurrencyLimits { min: 0.001, fee: 0.05 });
        limits
    };
}

/// Resolves a currency code against a lookup table. Unknown or missing
/// codes fall back to BNB, and the effective code is returned so responses
/// echo the currency that was actually applied.
pub fn resolve_currency<V>(code: Option<&str>, table: &HashMap<&'static str, V>) -> &'static str {
    code.and_then(|c| table.get_key_value(c).map(|(key, _)| *key))
        .unwrap_or(FALLBACK_CURRENCY)
}

/// Effective currency and platform address for a payment.
pub fn payment_address(code: Option<&str>) -> (&'static str, &'static str) {
    let crypto = resolve_currency(code, &PLATFORM_WALLETS);
    let address = PLATFORM_WALLETS
        .get(crypto)
        .copied()
        .unwrap_or(PLATFORM_WALLET_ADDRESS);
    (crypto, address)
}

/// Effective currency and deposit limits for a request.
pub fn deposit_limits(code: Option<&str>) -> (&'static str, CurrencyLimits) {
    let crypto = resolve_currency(code, &DEPOSIT_LIMITS);
    let limits = DEPOSIT_LIMITS
        .get(crypto)
        .copied()
        .unwrap_or(DEPOSIT_LIMITS[FALLBACK_CURRENCY]);
    (crypto, limits)
}

/// Effective currency and withdrawal limits for a request.
pub fn withdraw_limits(code: Option<&str>) -> (&'static str, CurrencyLimits) {
    let crypto = resolve_currency(code, &WITHDRAW_LIMITS);
    let limits = WITHDRAW_LIMITS
        .get(crypto)
        .copied()
        .unwrap_or(WITHDRAW_LIMITS[FALLBACK_CURRENCY]);
    (crypto, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currency_resolves_to_itself() {
        assert_eq!(resolve_currency(Some("BTC"), &WITHDRAW_LIMITS), "BTC");
        assert_eq!(resolve_currency(Some("ETH"), &PLATFORM_WALLETS), "ETH");
    }

    #[test]
    fn unknown_or_missing_currency_falls_back_to_bnb() {
        assert_eq!(resolve_currency(Some("DOGE"), &WITHDRAW_LIMITS), "BNB");
        assert_eq!(resolve_currency(None, &DEPOSIT_LIMITS), "BNB");
        // ETH has a payment address but no limits entry
        assert_eq!(resolve_currency(Some("ETH"), &WITHDRAW_LIMITS), "BNB");
    }

    #[test]
    fn all_currencies_share_the_platform_address() {
        for address in PLATFORM_WALLETS.values() {
            assert_eq!(*address, PLATFORM_WALLET_ADDRESS);
        }
    }

    #[test]
    fn limit_lookups_apply_the_fallback() {
        let (crypto, limits) = withdraw_limits(Some("SHIB"));
        assert_eq!(crypto, "BNB");
        assert_eq!(limits.min, 1.0);
        assert_eq!(limits.fee, 0.05);

        let (crypto, limits) = deposit_limits(Some("BTC"));
        assert_eq!(crypto, "BTC");
        assert_eq!(limits.min, 0.0005);
    }
}
