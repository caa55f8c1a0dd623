/// Where the contact form is in its submit cycle. Drives which UI is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Transient; reverts to `Idle` after the success banner has been shown.
    Succeeded,
    Failed {
        reason: String,
    },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// A new submission may only start from `Idle` or `Failed`.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }

    /// User-facing error text, if any.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_idle_and_failed_accept_submit() {
        assert!(SubmissionStatus::Idle.accepts_submit());
        assert!(SubmissionStatus::Failed {
            reason: "nope".to_string()
        }
        .accepts_submit());
        assert!(!SubmissionStatus::Submitting.accepts_submit());
        assert!(!SubmissionStatus::Succeeded.accepts_submit());
    }

    #[test]
    fn test_failure_text() {
        let failed = SubmissionStatus::Failed {
            reason: "try again".to_string(),
        };
        assert_eq!(failed.failure(), Some("try again"));
        assert_eq!(SubmissionStatus::Idle.failure(), None);
    }
}
