use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use numerica_core::{Campaign, ProgressStore, StoreError, UnlockedLevels};

/// Unlocked levels kept in the browser's local storage, one key per campaign.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct LocalProgressStore {
    key: &'static str,
}

impl LocalProgressStore {
    pub(crate) const fn for_campaign(campaign: Campaign) -> Self {
        Self {
            key: Self::key_for(campaign),
        }
    }

    const fn key_for(campaign: Campaign) -> &'static str {
        match campaign {
            Campaign::Standard => "numerica:unlocked-levels",
            Campaign::Legacy => "numerica:legacy:unlocked-levels",
        }
    }
}

impl ProgressStore for LocalProgressStore {
    fn load(&self) -> Result<Option<UnlockedLevels>, StoreError> {
        match LocalStorage::get::<UnlockedLevels>(self.key) {
            Ok(unlocked) => Ok(Some(unlocked)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(StoreError::new(err.to_string())),
        }
    }

    fn save(&mut self, unlocked: &UnlockedLevels) -> Result<(), StoreError> {
        log::trace!("{}: {:?}", self.key, unlocked.to_vec());
        LocalStorage::set(self.key, unlocked).map_err(|err| StoreError::new(err.to_string()))
    }
}
