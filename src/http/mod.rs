//! HTTP client layer — `ArrayHttp`, the shared request path.

pub mod client;

pub use client::ArrayHttp;
