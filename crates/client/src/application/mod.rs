//! Application layer - dispatch primitive and typed operation services.

pub mod gateway;
pub mod services;
