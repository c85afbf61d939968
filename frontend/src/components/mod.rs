pub mod checkout;
pub mod config_error;
