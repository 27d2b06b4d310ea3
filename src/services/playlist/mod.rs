// Playlist submission service
// Save-time checks and payload assembly for the create/edit playlist screens

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::schedule::{Playlist, PlaylistPayload};
use crate::services::placement::PlacementStore;
use crate::services::projection::to_persisted;

/// Top-level playlist fields. The scheduler passes them through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistForm {
    pub title: String,
    pub is_active: bool,
}

impl Default for PlaylistForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            is_active: true,
        }
    }
}

impl From<&Playlist> for PlaylistForm {
    fn from(playlist: &Playlist) -> Self {
        Self {
            title: playlist.title.clone(),
            is_active: playlist.is_active,
        }
    }
}

pub struct PlaylistService<'a> {
    store: &'a PlacementStore,
}

impl<'a> PlaylistService<'a> {
    pub fn new(store: &'a PlacementStore) -> Self {
        Self { store }
    }

    /// Checks the playlist screens run before submitting.
    pub fn validate(&self, form: &PlaylistForm) -> Result<()> {
        if form.title.trim().is_empty() {
            return Err(SchedulerError::Validation(
                "playlist title is required".to_string(),
            ));
        }
        if self.store.scheduled_count() == 0 {
            return Err(SchedulerError::Validation(
                "at least one media item must be scheduled".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and assemble the body for the create/update call.
    pub fn build_payload(&self, form: &PlaylistForm) -> Result<PlaylistPayload> {
        self.validate(form)?;
        let schedules = to_persisted(self.store);
        log::info!(
            "Prepared playlist '{}' with {} schedules",
            form.title.trim(),
            schedules.len()
        );
        Ok(PlaylistPayload {
            title: form.title.clone(),
            is_active: form.is_active,
            schedules,
        })
    }

    /// Placed tasks without a primary-language title. Hosts may use this to
    /// block saving; the scheduler itself does not.
    pub fn missing_primary_titles(&self) -> Vec<String> {
        let primary = &self.store.content_settings().primary_language;
        self.store
            .placed()
            .into_iter()
            .filter(|task| task.title_in(primary).is_none())
            .map(|task| task.id.clone())
            .collect()
    }
}
