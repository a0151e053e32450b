use serde::Deserialize;

/// Query parameters for GET requests. A missing `action` defaults to a
/// balance lookup; `wallet` is echoed back unvalidated.
#[derive(Deserialize)]
pub struct ActionQuery {
    pub action: Option<String>,
    pub wallet: Option<String>,
}

/// Amounts arrive from clients either as a JSON number or a string.
/// Anything unparseable is treated as zero, which the limit checks then
/// reject for fee-bearing operations.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> f64 {
        match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

/// POST body shared by every wallet action. All fields other than `action`
/// are optional; each handler picks the ones it needs and echoes them back.
#[derive(Deserialize)]
pub struct WalletActionRequest {
    pub action: Option<String>,
    pub amount: Option<Amount>,
    pub crypto: Option<String>,
    pub from_wallet: Option<String>,
    pub to_wallet: Option<String>,
    pub wallet: Option<String>,
    pub referrer: Option<String>,
    pub package_id: Option<serde_json::Value>,
}

impl WalletActionRequest {
    pub fn amount_value(&self) -> f64 {
        self.amount.as_ref().map(Amount::value).unwrap_or(0.0)
    }

    pub fn package_id_value(&self) -> serde_json::Value {
        self.package_id.clone().unwrap_or(serde_json::Value::Null)
    }
}
