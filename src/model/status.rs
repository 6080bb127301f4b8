/// Where a form instance sits in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a submit intent.
    #[default]
    Idle,
    /// The mail client has been asked to open; waiting out the settle delay.
    Submitting,
    /// Success indicator is showing.
    Submitted,
}

/// The two submission flags observed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionStatus {
    pub is_submitting: bool,
    pub is_submitted: bool,
}

impl SubmissionStatus {
    /// Collapses the flags into a [`Phase`].
    ///
    /// `is_submitting` wins if both flags are set. [`ContactForm`] never
    /// produces that combination since a submit intent clears `is_submitted`.
    ///
    /// [`ContactForm`]: crate::workflow::ContactForm
    pub fn phase(self) -> Phase {
        if self.is_submitting {
            Phase::Submitting
        } else if self.is_submitted {
            Phase::Submitted
        } else {
            Phase::Idle
        }
    }
}
