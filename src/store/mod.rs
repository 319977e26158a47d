//! REST client module for the remote datastore.
//!
//! This module provides the `StoreClient` for the hosted REST datastore
//! that backs the evaluation workflow: member registrations, ratings,
//! reviewer comments, and the staff credential table.
//!
//! Requests authenticate with the project API key. The engine assumes
//! every persistence call is awaited to completion before the next
//! logical step; retries beyond the built-in rate-limit backoff belong
//! to the transport, not here.

pub mod client;
pub mod error;

pub use client::StoreClient;
pub use error::StoreError;
