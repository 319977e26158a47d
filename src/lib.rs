//! Campboard - core library for an orientation-camp evaluation workflow.
//!
//! Corps members submit a three-step registration form, platoon and camp
//! instructors enter category ratings, and the commandant reviews the
//! aggregated scores. This crate holds the validation and scoring rules
//! plus the thin client for the remote datastore:
//!
//! - `form`: registration form state, per-section validation, finalization
//! - `rating`: category rating sheets, totals, composite score
//! - `roster`: role-scoped filtering and platoon statistics
//! - `auth`: explicit session object constructed after login
//! - `store`: REST client for the remote datastore
//!
//! Rendering, routing, and export formatting live in the consuming
//! application.

pub mod auth;
pub mod config;
pub mod form;
pub mod models;
pub mod rating;
pub mod roster;
pub mod store;
pub mod utils;
