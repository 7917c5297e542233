//! HTTP transport

pub mod client;

pub use client::{to_reqwest_method, HttpClient, HttpClientBuilder};
