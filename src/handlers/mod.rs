pub mod dispatch;
pub mod health;
pub mod package_handler;
pub mod referral_handler;
pub mod wallet_handler;
