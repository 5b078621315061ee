use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;

use super::{Slot, newest_first};
use crate::engine::lifecycle::{TransitionError, TransitionPolicy};
use crate::engine::urgency;
use crate::models::donation::{Donation, DonationStats, DonationStatus, NewDonation};

const FIRST_DONATION_NUMBER: u64 = 1001;

/// Authoritative donation collection.
///
/// Lookups by an unknown id are silent: mutations return `Ok(None)` and leave
/// the collection untouched. Under [`TransitionPolicy::Permissive`] no
/// mutation ever fails.
pub struct DonationStore {
    donations: DashMap<String, Slot<Donation>>,
    next_seq: AtomicU64,
    next_number: AtomicU64,
    policy: TransitionPolicy,
}

impl DonationStore {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self {
            donations: DashMap::new(),
            next_seq: AtomicU64::new(0),
            next_number: AtomicU64::new(FIRST_DONATION_NUMBER),
            policy,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Loads existing records as-is. The first record of `donations` ends up
    /// first in [`DonationStore::list`].
    pub fn seed(&self, donations: Vec<Donation>) {
        for donation in donations.into_iter().rev() {
            self.push(donation);
        }
    }

    pub fn add_donation(&self, fields: NewDonation) -> Donation {
        self.add_donation_at(fields, Utc::now())
    }

    pub fn add_donation_at(&self, fields: NewDonation, now: DateTime<Utc>) -> Donation {
        let donation = Donation {
            id: self.fresh_id(),
            donor: fields.donor,
            organization_type: fields.organization_type,
            food_type: fields.food_type,
            quantity: fields.quantity,
            location: fields.location,
            phone: fields.phone,
            urgency: urgency::classify(fields.expiry_time, now),
            status: DonationStatus::PendingReview,
            submitted_at: now,
            expiry_time: fields.expiry_time,
            special_instructions: fields.special_instructions,
            rejection_reason: None,
            assigned_volunteer: None,
        };

        self.push(donation.clone());

        info!(
            donation_id = %donation.id,
            urgency = donation.urgency.as_str(),
            "donation submitted"
        );

        donation
    }

    /// Replaces the status of a donation. A non-empty `reason` is stored as
    /// the rejection reason whatever the new status is.
    pub fn update_donation_status(
        &self,
        id: &str,
        status: DonationStatus,
        reason: Option<&str>,
    ) -> Result<Option<Donation>, TransitionError> {
        self.set_status(id, None, status, reason)
    }

    /// Like [`DonationStore::update_donation_status`], but only applies when
    /// the donation is currently `expected`. The check and the write happen
    /// under the same entry lock.
    pub fn transition_from(
        &self,
        id: &str,
        expected: DonationStatus,
        status: DonationStatus,
        reason: Option<&str>,
    ) -> Result<Option<Donation>, TransitionError> {
        self.set_status(id, Some(expected), status, reason)
    }

    /// Links a donation to a volunteer and forces it into `Assigned`,
    /// whatever its prior status was (unless the policy is strict).
    pub fn assign_volunteer(
        &self,
        id: &str,
        volunteer_id: &str,
    ) -> Result<Option<Donation>, TransitionError> {
        self.assign(id, None, volunteer_id)
    }

    /// Assigns only while the donation is still `expected`, so two racing
    /// assignments cannot both succeed.
    pub fn assign_from(
        &self,
        id: &str,
        expected: DonationStatus,
        volunteer_id: &str,
    ) -> Result<Option<Donation>, TransitionError> {
        self.assign(id, Some(expected), volunteer_id)
    }

    fn set_status(
        &self,
        id: &str,
        expected: Option<DonationStatus>,
        status: DonationStatus,
        reason: Option<&str>,
    ) -> Result<Option<Donation>, TransitionError> {
        let Some(mut slot) = self.donations.get_mut(id) else {
            return Ok(None);
        };
        let donation = &mut slot.record;

        require_status(donation.status, expected)?;
        self.policy.check(donation.status, status, reason)?;

        let previous = donation.status;
        donation.status = status;
        if let Some(reason) = reason.filter(|r| !r.is_empty()) {
            donation.rejection_reason = Some(reason.to_string());
        }

        info!(
            donation_id = %donation.id,
            from = previous.as_str(),
            to = status.as_str(),
            "donation status changed"
        );

        Ok(Some(donation.clone()))
    }

    fn assign(
        &self,
        id: &str,
        expected: Option<DonationStatus>,
        volunteer_id: &str,
    ) -> Result<Option<Donation>, TransitionError> {
        let Some(mut slot) = self.donations.get_mut(id) else {
            return Ok(None);
        };
        let donation = &mut slot.record;

        require_status(donation.status, expected)?;
        self.policy
            .check(donation.status, DonationStatus::Assigned, None)?;

        donation.assigned_volunteer = Some(volunteer_id.to_string());
        donation.status = DonationStatus::Assigned;

        info!(
            donation_id = %donation.id,
            volunteer_id,
            "volunteer assigned"
        );

        Ok(Some(donation.clone()))
    }

    pub fn get_donation_by_id(&self, id: &str) -> Option<Donation> {
        self.donations.get(id).map(|slot| slot.record.clone())
    }

    pub fn list(&self) -> Vec<Donation> {
        newest_first(&self.donations, |_| true)
    }

    pub fn list_where<F>(&self, keep: F) -> Vec<Donation>
    where
        F: FnMut(&Donation) -> bool,
    {
        newest_first(&self.donations, keep)
    }

    pub fn get_stats(&self) -> DonationStats {
        self.donations
            .iter()
            .fold(DonationStats::default(), |stats, slot| {
                stats.record(slot.record.status)
            })
    }

    pub fn len(&self) -> usize {
        self.donations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donations.is_empty()
    }

    fn push(&self, donation: Donation) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.donations.insert(
            donation.id.clone(),
            Slot {
                seq,
                record: donation,
            },
        );
    }

    fn fresh_id(&self) -> String {
        loop {
            let number = self.next_number.fetch_add(1, Ordering::Relaxed);
            let id = format!("FD{number}");
            if !self.donations.contains_key(&id) {
                return id;
            }
        }
    }
}

fn require_status(
    actual: DonationStatus,
    expected: Option<DonationStatus>,
) -> Result<(), TransitionError> {
    match expected {
        Some(expected) if expected != actual => {
            Err(TransitionError::StatusMismatch { expected, actual })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use super::DonationStore;
    use crate::engine::lifecycle::{TransitionError, TransitionPolicy};
    use crate::models::donation::{DonationStatus, NewDonation, OrganizationType, Urgency};

    fn intake(expiry_time: DateTime<Utc>) -> NewDonation {
        NewDonation {
            donor: "Corner Deli".to_string(),
            organization_type: OrganizationType::Restaurant,
            food_type: "Sandwiches".to_string(),
            quantity: "20 wraps".to_string(),
            location: "12 Elm St".to_string(),
            phone: "+1 (555) 222-3333".to_string(),
            expiry_time,
            special_instructions: None,
        }
    }

    #[test]
    fn new_donations_start_pending_and_go_first() {
        let store = DonationStore::new(TransitionPolicy::Permissive);
        let now = Utc::now();

        let first = store.add_donation_at(intake(now + Duration::hours(8)), now);
        let second = store.add_donation_at(intake(now + Duration::hours(3)), now);

        assert_eq!(first.status, DonationStatus::PendingReview);
        assert_eq!(first.urgency, Urgency::Low);
        assert_eq!(second.urgency, Urgency::Medium);
        assert_ne!(first.id, second.id);
        assert_eq!(second.submitted_at, now);

        let ids: Vec<String> = store.list().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn fresh_ids_skip_seeded_ones() {
        let store = DonationStore::new(TransitionPolicy::Permissive);
        let now = Utc::now();
        let mut seeded = store.add_donation_at(intake(now), now);
        seeded.id = "FD1002".to_string();
        store.seed(vec![seeded]);

        let next = store.add_donation_at(intake(now), now);
        assert_eq!(next.id, "FD1003");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let store = DonationStore::new(TransitionPolicy::Permissive);
        let now = Utc::now();
        store.add_donation_at(intake(now + Duration::hours(1)), now);
        let before = store.list();

        assert_eq!(
            store.update_donation_status("FD9999", DonationStatus::Completed, Some("x")),
            Ok(None)
        );
        assert_eq!(store.assign_volunteer("FD9999", "john.smith"), Ok(None));

        let after = store.list();
        assert_eq!(before.len(), after.len());
        assert_eq!(after[0].status, DonationStatus::PendingReview);
        assert!(after[0].rejection_reason.is_none());
    }

    #[test]
    fn permissive_store_sets_any_status() {
        let store = DonationStore::new(TransitionPolicy::Permissive);
        let now = Utc::now();
        let donation = store.add_donation_at(intake(now + Duration::hours(1)), now);

        let updated = store
            .update_donation_status(&donation.id, DonationStatus::Completed, None)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, DonationStatus::Completed);

        let reopened = store
            .update_donation_status(&donation.id, DonationStatus::InTransit, Some("re-opened"))
            .unwrap()
            .unwrap();
        assert_eq!(reopened.status, DonationStatus::InTransit);
        assert_eq!(reopened.rejection_reason.as_deref(), Some("re-opened"));
    }

    #[test]
    fn empty_reason_is_not_stored() {
        let store = DonationStore::new(TransitionPolicy::Permissive);
        let now = Utc::now();
        let donation = store.add_donation_at(intake(now), now);

        let rejected = store
            .update_donation_status(&donation.id, DonationStatus::Rejected, Some(""))
            .unwrap()
            .unwrap();
        assert!(rejected.rejection_reason.is_none());
    }

    #[test]
    fn assignment_forces_assigned_from_pending() {
        let store = DonationStore::new(TransitionPolicy::Permissive);
        let now = Utc::now();
        let donation = store.add_donation_at(intake(now + Duration::hours(4)), now);

        let assigned = store
            .assign_volunteer(&donation.id, "sarah.johnson")
            .unwrap()
            .unwrap();
        assert_eq!(assigned.status, DonationStatus::Assigned);
        assert_eq!(assigned.assigned_volunteer.as_deref(), Some("sarah.johnson"));
    }

    #[test]
    fn strict_store_refuses_shortcuts() {
        let store = DonationStore::new(TransitionPolicy::Strict);
        let now = Utc::now();
        let donation = store.add_donation_at(intake(now + Duration::hours(4)), now);

        assert_eq!(
            store.assign_volunteer(&donation.id, "sarah.johnson"),
            Err(TransitionError::NotAllowed {
                from: DonationStatus::PendingReview,
                to: DonationStatus::Assigned,
            })
        );
        assert_eq!(
            store.get_donation_by_id(&donation.id).unwrap().status,
            DonationStatus::PendingReview
        );

        store
            .update_donation_status(&donation.id, DonationStatus::Approved, None)
            .unwrap();
        let assigned = store
            .assign_volunteer(&donation.id, "sarah.johnson")
            .unwrap()
            .unwrap();
        assert_eq!(assigned.status, DonationStatus::Assigned);
    }

    #[test]
    fn full_lifecycle_moves_one_record_into_completed() {
        let store = DonationStore::new(TransitionPolicy::Permissive);
        let now = Utc::now();
        let donation = store.add_donation_at(intake(now + Duration::minutes(90)), now);
        assert_eq!(donation.urgency, Urgency::High);

        let before = store.get_stats();

        store
            .update_donation_status(&donation.id, DonationStatus::Approved, None)
            .unwrap();
        let assigned = store
            .assign_volunteer(&donation.id, "john.smith")
            .unwrap()
            .unwrap();
        assert_eq!(assigned.status, DonationStatus::Assigned);
        assert_eq!(assigned.assigned_volunteer.as_deref(), Some("john.smith"));

        store
            .update_donation_status(&donation.id, DonationStatus::InTransit, None)
            .unwrap();
        store
            .update_donation_status(&donation.id, DonationStatus::Completed, None)
            .unwrap();

        let after = store.get_stats();
        assert_eq!(after.completed, before.completed + 1);
        assert_eq!(after.total, before.total);
        assert_eq!(
            after.pending + after.approved + after.in_transit + after.completed + after.rejected,
            after.total
        );
    }

    #[test]
    fn guarded_transition_refuses_a_stale_source_status() {
        let store = DonationStore::new(TransitionPolicy::Permissive);
        let now = Utc::now();
        let donation = store.add_donation_at(intake(now + Duration::hours(4)), now);

        store
            .transition_from(
                &donation.id,
                DonationStatus::PendingReview,
                DonationStatus::Approved,
                None,
            )
            .unwrap();

        assert_eq!(
            store.transition_from(
                &donation.id,
                DonationStatus::PendingReview,
                DonationStatus::Rejected,
                Some("late"),
            ),
            Err(TransitionError::StatusMismatch {
                expected: DonationStatus::PendingReview,
                actual: DonationStatus::Approved,
            })
        );

        store
            .assign_from(&donation.id, DonationStatus::Approved, "john.smith")
            .unwrap();
        assert!(
            store
                .assign_from(&donation.id, DonationStatus::Approved, "mike.davis")
                .is_err()
        );

        let stored = store.get_donation_by_id(&donation.id).unwrap();
        assert_eq!(stored.status, DonationStatus::Assigned);
        assert_eq!(stored.assigned_volunteer.as_deref(), Some("john.smith"));
        assert!(stored.rejection_reason.is_none());
        assert_eq!(
            store.transition_from("FD9999", DonationStatus::Approved, DonationStatus::Completed, None),
            Ok(None)
        );
    }
}
