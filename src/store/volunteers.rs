use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;

use super::{Slot, newest_first};
use crate::models::volunteer::{
    NewVolunteer, Volunteer, VolunteerFilter, VolunteerStats, VolunteerStatus, VolunteerUpdate,
};

/// Volunteer directory. Removing a volunteer never touches donations that
/// still reference the id.
pub struct VolunteerStore {
    volunteers: DashMap<String, Slot<Volunteer>>,
    next_seq: AtomicU64,
}

impl Default for VolunteerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VolunteerStore {
    pub fn new() -> Self {
        Self {
            volunteers: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn seed(&self, volunteers: Vec<Volunteer>) {
        for volunteer in volunteers.into_iter().rev() {
            self.push(volunteer);
        }
    }

    pub fn add_volunteer(&self, fields: NewVolunteer) -> Volunteer {
        self.add_volunteer_at(fields, Utc::now())
    }

    pub fn add_volunteer_at(&self, fields: NewVolunteer, now: DateTime<Utc>) -> Volunteer {
        let volunteer = Volunteer {
            id: self.fresh_id(&fields.email, now),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            status: fields.status,
            join_date: now.date_naive(),
            completed_collections: 0,
            rating: 0.0,
            specializations: fields.specializations,
            availability: fields.availability,
            emergency_contact: fields.emergency_contact,
        };

        self.push(volunteer.clone());
        info!(volunteer_id = %volunteer.id, "volunteer registered");

        volunteer
    }

    pub fn update_volunteer(&self, id: &str, update: VolunteerUpdate) -> Option<Volunteer> {
        let mut slot = self.volunteers.get_mut(id)?;
        update.apply(&mut slot.record);

        info!(volunteer_id = %id, "volunteer updated");
        Some(slot.record.clone())
    }

    pub fn remove_volunteer(&self, id: &str) -> Option<Volunteer> {
        let (_, slot) = self.volunteers.remove(id)?;

        info!(volunteer_id = %id, "volunteer removed");
        Some(slot.record)
    }

    pub fn get_volunteer_by_id(&self, id: &str) -> Option<Volunteer> {
        self.volunteers.get(id).map(|slot| slot.record.clone())
    }

    pub fn get_active_volunteers(&self) -> Vec<Volunteer> {
        newest_first(&self.volunteers, |v| v.status == VolunteerStatus::Active)
    }

    pub fn get_volunteer_stats(&self) -> VolunteerStats {
        self.volunteers
            .iter()
            .fold(VolunteerStats::default(), |stats, slot| {
                stats.record(slot.record.status)
            })
    }

    pub fn list(&self) -> Vec<Volunteer> {
        newest_first(&self.volunteers, |_| true)
    }

    pub fn search(&self, filter: &VolunteerFilter) -> Vec<Volunteer> {
        newest_first(&self.volunteers, |v| filter.matches(v))
    }

    /// Finds the volunteer whose email equals `email`, ignoring case.
    pub fn find_by_email(&self, email: &str) -> Option<Volunteer> {
        self.volunteers
            .iter()
            .find(|slot| slot.record.email.eq_ignore_ascii_case(email))
            .map(|slot| slot.record.clone())
    }

    pub fn len(&self) -> usize {
        self.volunteers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volunteers.is_empty()
    }

    fn push(&self, volunteer: Volunteer) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.volunteers.insert(
            volunteer.id.clone(),
            Slot {
                seq,
                record: volunteer,
            },
        );
    }

    fn fresh_id(&self, email: &str, now: DateTime<Utc>) -> String {
        if let Some(local) = email_local_part(email) {
            if !self.volunteers.contains_key(&local) {
                return local;
            }
        }

        let mut millis = now.timestamp_millis();
        loop {
            let id = format!("vol_{millis}");
            if !self.volunteers.contains_key(&id) {
                return id;
            }
            millis += 1;
        }
    }
}

/// Lower-cased part of `email` before the `@`, or `None` when the address
/// has no `@` or nothing in front of it.
pub fn email_local_part(email: &str) -> Option<String> {
    let (local, _domain) = email.trim().split_once('@')?;
    let local = local.trim();
    if local.is_empty() {
        None
    } else {
        Some(local.to_lowercase())
    }
}
