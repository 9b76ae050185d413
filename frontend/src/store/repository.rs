use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;

use super::types::{Identity, LeaveApplication, PortalError};
use crate::utils::storage::{KeyValueStore, LocalStorage};

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const LEAVE_APPLICATIONS_KEY: &str = "leaveApplications";

/// Everything the portal keeps between page loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub current_user: Option<Identity>,
    pub applications: Vec<LeaveApplication>,
}

/// JSON snapshots of the session and the application list over a key/value store.
#[derive(Clone)]
pub struct LeaveRepository {
    store: Rc<dyn KeyValueStore>,
}

impl LeaveRepository {
    pub fn new() -> Self {
        Self::new_with_store(Rc::new(LocalStorage))
    }

    pub fn new_with_store(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PortalError> {
        let raw = self.store.get(key).map_err(PortalError::Storage)?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), PortalError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).map_err(PortalError::Storage)
    }

    pub fn load_user(&self) -> Result<Option<Identity>, PortalError> {
        self.read(CURRENT_USER_KEY)
    }

    pub fn save_user(&self, identity: &Identity) -> Result<(), PortalError> {
        self.write(CURRENT_USER_KEY, identity)
    }

    pub fn clear_user(&self) -> Result<(), PortalError> {
        self.store
            .remove(CURRENT_USER_KEY)
            .map_err(PortalError::Storage)
    }

    pub fn load_applications(&self) -> Result<Vec<LeaveApplication>, PortalError> {
        Ok(self.read(LEAVE_APPLICATIONS_KEY)?.unwrap_or_default())
    }

    pub fn save_applications(&self, applications: &[LeaveApplication]) -> Result<(), PortalError> {
        self.write(LEAVE_APPLICATIONS_KEY, applications)
    }

    pub fn clear_all(&self) -> Result<(), PortalError> {
        self.store.clear().map_err(PortalError::Storage)
    }

    /// Startup rehydration. Unreadable entries are logged and treated as absent
    /// so a corrupt blob never blocks the page from loading.
    pub fn restore(&self) -> Snapshot {
        let current_user = self.load_user().unwrap_or_else(|err| {
            log::warn!("Discarding stored session ({}): {}", err.code(), err);
            None
        });
        let applications = self.load_applications().unwrap_or_else(|err| {
            log::warn!("Discarding stored applications ({}): {}", err.code(), err);
            Vec::new()
        });
        log::debug!(
            "Restored session: signed_in={}, applications={}",
            current_user.is_some(),
            applications.len()
        );
        Snapshot {
            current_user,
            applications,
        }
    }
}

impl Default for LeaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::{application, identity};
    use crate::utils::storage::MemoryStorage;

    fn repo(store: &MemoryStorage) -> LeaveRepository {
        LeaveRepository::new_with_store(Rc::new(store.clone()))
    }

    #[test]
    fn empty_store_restores_empty_snapshot() {
        let store = MemoryStorage::new();
        assert_eq!(repo(&store).restore(), Snapshot::default());
    }

    #[test]
    fn applications_survive_a_reload_field_for_field() {
        let store = MemoryStorage::new();
        let mut approved = application(2, "a@b.com");
        approved.status = crate::store::LeaveStatus::Approved;
        approved.approved_at = Some(approved.submitted_at);
        let saved = vec![application(1, "a@b.com"), approved];

        repo(&store).save_applications(&saved).unwrap();
        repo(&store).save_user(&identity("a@b.com")).unwrap();

        let reloaded = repo(&store).restore();
        assert_eq!(reloaded.applications, saved);
        assert_eq!(reloaded.current_user, Some(identity("a@b.com")));
    }

    #[test]
    fn corrupt_blobs_fall_back_to_empty_state() {
        let store = MemoryStorage::new();
        store.set(LEAVE_APPLICATIONS_KEY, "[{not json").unwrap();
        store.set(CURRENT_USER_KEY, "42").unwrap();

        let repository = repo(&store);
        assert!(matches!(
            repository.load_applications(),
            Err(PortalError::Serialization(_))
        ));
        assert_eq!(repository.restore(), Snapshot::default());
    }

    #[test]
    fn clear_user_keeps_applications() {
        let store = MemoryStorage::new();
        let repository = repo(&store);
        repository.save_user(&identity("a@b.com")).unwrap();
        repository
            .save_applications(&[application(1, "a@b.com")])
            .unwrap();

        repository.clear_user().unwrap();
        let snapshot = repository.restore();
        assert!(snapshot.current_user.is_none());
        assert_eq!(snapshot.applications.len(), 1);

        repository.clear_all().unwrap();
        assert!(store.is_empty());
    }
}
