pub mod browser;
pub mod build_env;
pub mod logging;
pub mod upload;
