//! `mailto:` link composition.
//!
//! Pure formatting functions that turn [`ContactFields`](crate::model::ContactFields)
//! into a subject, a body, and a percent-encoded `mailto:` URI. No I/O; the
//! [`opener`](crate::opener) module hands the result to the system.

/// Subject, body, and URI builders.
mod compose;

pub use compose::{compose_body, compose_mailto, compose_subject, encode_component};
