pub mod health;
pub mod hello;

pub use health::HealthStatus;
pub use hello::HelloMessage;
