pub mod health_check;
pub mod offer;
pub mod order;
pub mod user;
