//! Submission workflow: submit intent, external handler delegation, and the
//! timed settle/dismiss sequence.
//!
//! Success is optimistic. Nothing confirms that a mail client opened or that
//! a message was sent; the confirmation only acknowledges the hand-off.

mod contact_form;
mod timer;

pub use contact_form::ContactForm;
pub use timer::{Deadline, Scheduler, Timings, Transition};
