//! Console sign-in. This only decides which dashboard to show; store
//! operations are never gated on it.

use serde::Serialize;

use crate::store::volunteers::VolunteerStore;

/// Badge numbers handed out to the founding volunteers, in directory order.
const BADGE_ALIASES: [(&str, &str); 5] = [
    ("1001", "john.smith"),
    ("1002", "sarah.johnson"),
    ("1003", "mike.davis"),
    ("1004", "emily.brown"),
    ("1005", "david.wilson"),
];

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username = username.trim();
        !username.is_empty()
            && !password.is_empty()
            && username == self.username
            && password == self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolunteerSession {
    pub volunteer_id: String,
    pub dashboard: String,
}

/// Resolves what a volunteer typed (id, email or badge number) to their
/// canonical id. Input is trimmed and lower-cased first.
pub fn resolve_volunteer(identifier: &str, volunteers: &VolunteerStore) -> Option<VolunteerSession> {
    let identifier = identifier.trim().to_lowercase();
    if identifier.is_empty() {
        return None;
    }

    let volunteer_id = if let Some(v) = volunteers.get_volunteer_by_id(&identifier) {
        v.id
    } else if let Some(v) = volunteers.find_by_email(&identifier) {
        v.id
    } else {
        let (_, id) = BADGE_ALIASES
            .iter()
            .find(|(badge, _)| *badge == identifier)?;
        volunteers.get_volunteer_by_id(id)?.id
    };

    Some(VolunteerSession {
        dashboard: format!("/volunteer/dashboard/{volunteer_id}"),
        volunteer_id,
    })
}
