//! Data models for camp evaluation entities.
//!
//! This module contains the data structures shared across the crate:
//!
//! - `CorpsMember`: the subject under evaluation, with its ratings
//! - `Role`: every login role, rater and reviewer alike
//! - `Platoon`: the 1-10 subdivision members and raters belong to
//! - `CampState`, `StateOfOrigin`, `Batch`: registration enumerations

pub mod member;
pub mod role;
pub mod states;

pub use member::{Comment, CorpsMember, Institution, MemberStatus, Platoon};
pub use role::Role;
pub use states::{Batch, CampState, StateOfOrigin};
