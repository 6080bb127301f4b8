#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Contact form that composes an enquiry as a `mailto:` link and hands it to
//! the visitor's email client.
//!
//! [`workflow::ContactForm`] is the UI-agnostic core; [`tui`] hosts it in a
//! terminal.

pub mod config;
pub mod logging;
pub mod mailto;
pub mod model;
pub mod opener;
pub mod tui;
pub mod workflow;
