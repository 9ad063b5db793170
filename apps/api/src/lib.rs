//! Hello API: a health probe and a greeting endpoint whose payloads are
//! shaped by `APP_VERSION` and `ENVIRONMENT`, read at request time.

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
