use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::donation::DonationStatus;

/// How the donation store treats status changes that fall outside the
/// collection lifecycle.
///
/// `Permissive` accepts any status from any status; the lifecycle is then
/// only enforced by which console actions are offered. `Strict` rejects
/// every move that is not an edge of [`is_lifecycle_edge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Strict,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot move donation from {from} to {to}")]
    NotAllowed {
        from: DonationStatus,
        to: DonationStatus,
    },

    #[error("a rejection reason is required")]
    MissingReason,

    #[error("donation is {actual}, expected {expected}")]
    StatusMismatch {
        expected: DonationStatus,
        actual: DonationStatus,
    },
}

/// Edges of the collection lifecycle:
/// Pending Review -> Approved | Rejected, Approved -> Assigned,
/// Assigned -> In Transit, In Transit -> Completed.
pub fn is_lifecycle_edge(from: DonationStatus, to: DonationStatus) -> bool {
    use DonationStatus::*;

    matches!(
        (from, to),
        (PendingReview, Approved)
            | (PendingReview, Rejected)
            | (Approved, Assigned)
            | (Assigned, InTransit)
            | (InTransit, Completed)
    )
}

pub fn is_terminal(status: DonationStatus) -> bool {
    matches!(status, DonationStatus::Rejected | DonationStatus::Completed)
}

impl TransitionPolicy {
    pub fn check(
        self,
        from: DonationStatus,
        to: DonationStatus,
        reason: Option<&str>,
    ) -> Result<(), TransitionError> {
        if self == TransitionPolicy::Permissive {
            return Ok(());
        }

        if !is_lifecycle_edge(from, to) {
            return Err(TransitionError::NotAllowed { from, to });
        }

        let has_reason = reason.is_some_and(|r| !r.trim().is_empty());
        if to == DonationStatus::Rejected && !has_reason {
            return Err(TransitionError::MissingReason);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TransitionError, TransitionPolicy, is_lifecycle_edge, is_terminal};
    use crate::models::donation::DonationStatus;

    #[test]
    fn terminal_states_have_no_outgoing_edges() {
        for from in DonationStatus::ALL.into_iter().filter(|s| is_terminal(*s)) {
            for to in DonationStatus::ALL {
                assert!(!is_lifecycle_edge(from, to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn permissive_policy_accepts_anything() {
        for from in DonationStatus::ALL {
            for to in DonationStatus::ALL {
                assert!(TransitionPolicy::Permissive.check(from, to, None).is_ok());
            }
        }
    }

    #[test]
    fn strict_policy_follows_the_lifecycle() {
        let strict = TransitionPolicy::Strict;

        assert!(
            strict
                .check(DonationStatus::PendingReview, DonationStatus::Approved, None)
                .is_ok()
        );
        assert!(
            strict
                .check(DonationStatus::InTransit, DonationStatus::Completed, None)
                .is_ok()
        );
        assert_eq!(
            strict.check(DonationStatus::PendingReview, DonationStatus::Completed, None),
            Err(TransitionError::NotAllowed {
                from: DonationStatus::PendingReview,
                to: DonationStatus::Completed,
            })
        );
    }

    #[test]
    fn strict_rejection_needs_a_reason() {
        let strict = TransitionPolicy::Strict;

        assert_eq!(
            strict.check(DonationStatus::PendingReview, DonationStatus::Rejected, Some("  ")),
            Err(TransitionError::MissingReason)
        );
        assert!(
            strict
                .check(
                    DonationStatus::PendingReview,
                    DonationStatus::Rejected,
                    Some("spoiled")
                )
                .is_ok()
        );
    }
}
