//! In-memory tutorial store.
//!
//! ## Design Decisions
//!
//! - **Sequential ids**: ids start at 1 and are never reused, even after
//!   `delete_all`, matching an auto-increment column.
//! - **Ordered listing**: tutorials live in a `BTreeMap` keyed by id, so
//!   every listing comes back in creation order.
//! - **Title search**: filtering is a case-insensitive substring match on
//!   the title. An empty needle matches everything.
//! - **Time source**: create/update take the current time from the caller
//!   so routes can hand in a mockable `TimeSource`.

use jiff::Timestamp;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use payloads::{
    Tutorial, TutorialId,
    requests::{self, validate_title},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Tutorial not found")]
    TutorialNotFound,
    #[error("{0}")]
    InvalidTitle(&'static str),
    #[error("Tutorial store is unavailable")]
    Poisoned,
}

#[derive(Default)]
struct Tutorials {
    last_id: i64,
    by_id: BTreeMap<TutorialId, Tutorial>,
}

#[derive(Default)]
pub struct TutorialStore {
    inner: Mutex<Tutorials>,
}

impl TutorialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tutorials>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn create(
        &self,
        details: &requests::CreateTutorial,
        now: Timestamp,
    ) -> Result<Tutorial, StoreError> {
        check_title(&details.title)?;
        let mut tutorials = self.lock()?;
        tutorials.last_id += 1;
        let tutorial = Tutorial {
            id: TutorialId(tutorials.last_id),
            title: details.title.clone(),
            description: details.description.clone(),
            published: details.published,
            created_at: Some(now),
            updated_at: Some(now),
        };
        tutorials.by_id.insert(tutorial.id, tutorial.clone());
        Ok(tutorial)
    }

    pub fn get(&self, tutorial_id: &TutorialId) -> Result<Tutorial, StoreError> {
        self.lock()?
            .by_id
            .get(tutorial_id)
            .cloned()
            .ok_or(StoreError::TutorialNotFound)
    }

    pub fn list(
        &self,
        filter: &requests::TutorialFilter,
    ) -> Result<Vec<Tutorial>, StoreError> {
        let needle = filter.title.as_deref().map(str::to_lowercase);
        Ok(self
            .lock()?
            .by_id
            .values()
            .filter(|tutorial| match &needle {
                Some(needle) => tutorial.title.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect())
    }

    pub fn list_published(&self) -> Result<Vec<Tutorial>, StoreError> {
        Ok(self
            .lock()?
            .by_id
            .values()
            .filter(|tutorial| tutorial.published)
            .cloned()
            .collect())
    }

    pub fn update(
        &self,
        tutorial_id: &TutorialId,
        details: &requests::UpdateTutorial,
        now: Timestamp,
    ) -> Result<Tutorial, StoreError> {
        if let Some(title) = &details.title {
            check_title(title)?;
        }
        let mut tutorials = self.lock()?;
        let tutorial = tutorials
            .by_id
            .get_mut(tutorial_id)
            .ok_or(StoreError::TutorialNotFound)?;
        if let Some(title) = &details.title {
            tutorial.title = title.clone();
        }
        if let Some(description) = &details.description {
            tutorial.description = description.clone();
        }
        if let Some(published) = details.published {
            tutorial.published = published;
        }
        tutorial.updated_at = Some(now);
        Ok(tutorial.clone())
    }

    pub fn delete(&self, tutorial_id: &TutorialId) -> Result<(), StoreError> {
        self.lock()?
            .by_id
            .remove(tutorial_id)
            .map(|_| ())
            .ok_or(StoreError::TutorialNotFound)
    }

    /// Remove every tutorial, returning how many were removed.
    pub fn delete_all(&self) -> Result<usize, StoreError> {
        let mut tutorials = self.lock()?;
        let count = tutorials.by_id.len();
        tutorials.by_id.clear();
        Ok(count)
    }
}

fn check_title(title: &str) -> Result<(), StoreError> {
    match validate_title(title).error_message() {
        Some(msg) => Err(StoreError::InvalidTitle(msg)),
        None => Ok(()),
    }
}
