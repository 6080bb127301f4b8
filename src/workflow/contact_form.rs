use std::time::Instant;

use crate::mailto::compose_mailto;
use crate::model::{ContactFields, FieldError, FieldName, Phase, SubmissionStatus};
use crate::opener::ExternalOpener;

use super::timer::{Deadline, Scheduler, Timings, Transition};

/// A mounted contact form: field values, submission flags, and the
/// deadlines that move the flags along.
///
/// Time only advances through [`tick`](Self::tick). Hosts call it from their
/// event loop with the current instant; tests call it with fabricated ones.
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    recipient: String,
    timings: Timings,
    opener: Box<dyn ExternalOpener>,
    scheduler: Scheduler,
    mounted: bool,
}

impl ContactForm {
    /// Mounts a fresh form with empty fields and both flags cleared.
    pub fn new(
        recipient: impl Into<String>,
        timings: Timings,
        opener: Box<dyn ExternalOpener>,
    ) -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmissionStatus::default(),
            recipient: recipient.into(),
            timings,
            opener,
            scheduler: Scheduler::new(),
            mounted: true,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn phase(&self) -> Phase {
        self.status.phase()
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Updates the field named by `key`.
    ///
    /// Unknown keys are rejected and leave every field untouched.
    pub fn on_field_change(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        let field: FieldName = key.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Updates one field by its typed name.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        tracing::debug!(%field, "field changed");
        self.fields.set(field, value);
    }

    /// Starts a submission cycle.
    ///
    /// Marks the form as submitting, hands a `mailto:` link for the current
    /// fields to the opener, and schedules the settle deadline relative to
    /// `now`. There is no guard against a second intent while one is in
    /// flight; hosts disable their submit control instead.
    pub fn on_submit_intent(&mut self, now: Instant) {
        if !self.mounted {
            tracing::debug!("submit intent after teardown ignored");
            return;
        }

        self.status.is_submitting = true;
        self.status.is_submitted = false;

        let uri = compose_mailto(&self.recipient, &self.fields);
        tracing::info!(recipient = %self.recipient, "opening mail client");
        self.opener.open(&uri);

        self.scheduler
            .schedule(now + self.timings.settle_delay, Transition::Settle);
    }

    /// Fires every deadline due at or before `now`, in order.
    ///
    /// Follow-up deadlines are measured from the deadline that scheduled
    /// them, so a late tick still replays the exact sequence. Returns `true`
    /// if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }

        let mut changed = false;
        while let Some(deadline) = self.scheduler.pop_due(now) {
            self.apply(deadline);
            changed = true;
        }
        changed
    }

    /// The next instant at which [`tick`](Self::tick) would do something.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.mounted {
            self.scheduler.next_due()
        } else {
            None
        }
    }

    /// Unmounts the form. Pending deadlines go stale and will never fire.
    pub fn teardown(&mut self) {
        if self.mounted {
            let pending = self.scheduler.len();
            self.scheduler.cancel_all();
            self.mounted = false;
            tracing::debug!(pending, "contact form torn down");
        }
    }

    fn apply(&mut self, deadline: Deadline) {
        match deadline.transition {
            Transition::Settle => {
                self.status.is_submitting = false;
                self.status.is_submitted = true;
                tracing::info!("submission settled, showing confirmation");
                self.scheduler.schedule(
                    deadline.due + self.timings.success_window,
                    Transition::Dismiss,
                );
            }
            Transition::Dismiss => {
                self.status.is_submitted = false;
                self.fields.reset();
                tracing::info!("confirmation dismissed, form reset");
            }
        }
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("status", &self.status)
            .field("recipient", &self.recipient)
            .field("timings", &self.timings)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
