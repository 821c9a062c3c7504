//! # casa-client
//!
//! Resilient delivery of canonical property payloads to the CRM API.
//!
//! This crate provides functionality for:
//! - Creating properties through the CRM's customer-scoped endpoint
//! - Bounded exponential-backoff retry of transient failures
//! - A structured error taxonomy separating transient from permanent
//!   failures

mod client;
mod errors;
mod retry;
mod types;

pub use client::CrmClient;
pub use errors::ClientError;
pub use retry::{run_with_retry, RetryPolicy};
pub use types::CreatePropertyResponse;
