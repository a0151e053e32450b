pub mod response;
pub mod wallet;
