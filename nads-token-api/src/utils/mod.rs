pub mod app_config;
pub mod http_utils;
pub mod nft_utils;
