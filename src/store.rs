//! Activity store - the shared in-memory catalog
//!
//! All mutation goes through a single write lock so the membership check and
//! the append/remove that follows it happen atomically.

use parking_lot::RwLock;

use crate::activity::{default_catalog, Activity, Catalog};
use crate::error::{SignupError, SignupResult};

/// Whether signup respects `max_participants`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Capacity is advertised but never checked
    #[default]
    Unchecked,
    /// Signups into a full activity are rejected
    Enforced,
}

pub struct ActivityStore {
    activities: RwLock<Catalog>,
    capacity: CapacityPolicy,
}

impl ActivityStore {
    pub fn new(catalog: Catalog, capacity: CapacityPolicy) -> Self {
        Self {
            activities: RwLock::new(catalog),
            capacity,
        }
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity
    }

    /// Snapshot of the whole catalog
    pub fn list(&self) -> Catalog {
        self.activities.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Add `email` to the participants of `name`, returning a confirmation message
    pub fn signup(&self, name: &str, email: &str) -> SignupResult<String> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.is_registered(email) {
            return Err(SignupError::AlreadySignedUp);
        }
        if self.capacity == CapacityPolicy::Enforced && activity.is_full() {
            return Err(SignupError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, name))
    }

    /// Remove `email` from the participants of `name`, returning a confirmation message
    pub fn unregister(&self, name: &str, email: &str) -> SignupResult<String> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(SignupError::NotSignedUp)?;

        activity.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, name))
    }
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::new(default_catalog(), CapacityPolicy::default())
    }
}
