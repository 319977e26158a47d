//! Explicit session handling.
//!
//! Caller identity is never looked up ambiently: a `SessionData` is
//! constructed once after a successful credential check, passed to every
//! operation that needs the viewer's role or platoon binding, and
//! invalidated explicitly on logout. Sessions persist to disk so a page
//! reload does not force a fresh login, and expire after inactivity.

pub mod session;

pub use session::{Session, SessionData};
