use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{LevelId, StoreError};

/// Levels the player may select. Serialized as a sorted list without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LevelId>", into = "Vec<LevelId>")]
pub struct UnlockedLevels {
    levels: BTreeSet<LevelId>,
}

impl UnlockedLevels {
    pub fn with_first(first: LevelId) -> Self {
        Self {
            levels: BTreeSet::from([first]),
        }
    }

    /// Returns `true` if the level was newly unlocked.
    pub fn unlock(&mut self, level: LevelId) -> bool {
        self.levels.insert(level)
    }

    pub fn contains(&self, level: LevelId) -> bool {
        self.levels.contains(&level)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn highest(&self) -> Option<LevelId> {
        self.levels.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = LevelId> + '_ {
        self.levels.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<LevelId> {
        self.iter().collect()
    }
}

impl From<Vec<LevelId>> for UnlockedLevels {
    fn from(levels: Vec<LevelId>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }
}

impl From<UnlockedLevels> for Vec<LevelId> {
    fn from(unlocked: UnlockedLevels) -> Self {
        unlocked.levels.into_iter().collect()
    }
}

impl<const N: usize> From<[LevelId; N]> for UnlockedLevels {
    fn from(levels: [LevelId; N]) -> Self {
        Self {
            levels: BTreeSet::from(levels),
        }
    }
}

/// Durable home of the unlocked level list.
pub trait ProgressStore {
    /// `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<UnlockedLevels>, StoreError>;

    fn save(&mut self, unlocked: &UnlockedLevels) -> Result<(), StoreError>;
}

/// Keeps progress in memory only, for tests and headless sessions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    saved: Option<UnlockedLevels>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(unlocked: UnlockedLevels) -> Self {
        Self {
            saved: Some(unlocked),
            save_count: 0,
        }
    }

    pub fn saved(&self) -> Option<&UnlockedLevels> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<UnlockedLevels>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, unlocked: &UnlockedLevels) -> Result<(), StoreError> {
        self.saved = Some(unlocked.clone());
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_sorted_deduplicated_list() {
        let mut unlocked = UnlockedLevels::with_first(1);
        unlocked.unlock(103);
        unlocked.unlock(101);
        unlocked.unlock(101);

        let json = serde_json::to_string(&unlocked).unwrap();
        assert_eq!(json, "[1,101,103]");
    }

    #[test]
    fn deserializing_unsorted_list_normalizes_it() {
        let unlocked: UnlockedLevels = serde_json::from_str("[102,1,101,102]").unwrap();

        assert_eq!(unlocked.to_vec(), [1, 101, 102]);
        assert_eq!(unlocked.highest(), Some(102));
    }

    #[test]
    fn unlock_reports_only_new_levels() {
        let mut unlocked = UnlockedLevels::from([1]);

        assert!(unlocked.unlock(101));
        assert!(!unlocked.unlock(101));
        assert!(!unlocked.unlock(1));
        assert_eq!(unlocked.len(), 2);
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), Ok(None));

        let unlocked = UnlockedLevels::from([1, 101]);
        store.save(&unlocked).unwrap();

        assert_eq!(store.load(), Ok(Some(unlocked)));
        assert_eq!(store.save_count(), 1);
    }
}
