//! Category rating engine.
//!
//! Raters award marks per category on a fixed discrete scale; the sheet
//! tracks the running total and completion state, and `commit` produces
//! the record that overwrites the subject's stored rating for that role.
//! Two complete records from independent roles combine into a composite
//! score via [`combine`].
//!
//! The category set is configuration keyed by rater role, not duplicated
//! logic: see [`schema::categories`].

pub mod composite;
pub mod schema;
pub mod sheet;

pub use composite::combine;
pub use schema::{categories, max_total, Score};
pub use sheet::{RatingError, RatingRecord, RatingSheet};
