//! External service integrations

pub mod netsuite;
