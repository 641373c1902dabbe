pub mod errors;
pub mod handlers;
pub mod managers;
pub mod models;
pub mod routes;
pub mod types;
pub mod utils;
