use chrono::Utc;

use crate::auth::AdminCredentials;
use crate::config::Config;
use crate::engine::lifecycle::TransitionPolicy;
use crate::observability::metrics::Metrics;
use crate::store::donations::DonationStore;
use crate::store::seed;
use crate::store::volunteers::VolunteerStore;

/// Everything the handlers share. Built once at startup and handed around
/// behind an `Arc`.
pub struct AppState {
    pub donations: DonationStore,
    pub volunteers: VolunteerStore,
    pub admin: AdminCredentials,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(policy: TransitionPolicy, admin: AdminCredentials) -> Self {
        Self {
            donations: DonationStore::new(policy),
            volunteers: VolunteerStore::new(),
            admin,
            metrics: Metrics::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let state = Self::new(
            config.transition_policy(),
            AdminCredentials::new(&config.admin_username, &config.admin_password),
        );

        if config.seed_demo_data {
            state.seed_demo_data();
        }

        state
    }

    pub fn seed_demo_data(&self) {
        self.donations.seed(seed::demo_donations(Utc::now()));
        self.volunteers.seed(seed::demo_volunteers());
        self.metrics
            .volunteers_registered
            .set(self.volunteers.len() as i64);
    }
}
