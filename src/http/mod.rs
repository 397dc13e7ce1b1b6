//! HTTP client layer — `CurveHttp`, one method per API endpoint.

pub mod client;

pub use client::CurveHttp;
