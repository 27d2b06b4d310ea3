//! Translation capture dialog state.
//!
//! Holds the draft title/description per language for the one task being
//! described. Nothing is written to the store until the session submits it.

use crate::error::{Result, SchedulerError};
use crate::models::task::TaskTranslation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDialog {
    task_id: String,
    current_language: String,
    translations: Vec<TaskTranslation>,
    fresh_placement: bool,
}

impl TranslationDialog {
    /// Open a dialog seeded with `seed`. Every configured language gets a
    /// tab; languages missing from the seed start blank. The active tab is
    /// the primary language.
    pub fn new(
        task_id: impl Into<String>,
        seed: &[TaskTranslation],
        languages: &[String],
        primary_language: &str,
    ) -> Self {
        let mut translations = seed.to_vec();
        for language in languages {
            if !translations.iter().any(|t| &t.language_code == language) {
                translations.push(TaskTranslation::empty(language.clone()));
            }
        }
        if translations.is_empty() {
            translations.push(TaskTranslation::empty(primary_language));
        }

        let current_language = if translations.iter().any(|t| t.language_code == primary_language) {
            primary_language.to_string()
        } else {
            translations
                .first()
                .map(|t| t.language_code.clone())
                .unwrap_or_else(|| primary_language.to_string())
        };

        Self {
            task_id: task_id.into(),
            current_language,
            translations,
            fresh_placement: false,
        }
    }

    /// Mark the dialog as opened by a drop from the pool
    pub fn for_new_placement(mut self) -> Self {
        self.fresh_placement = true;
        self
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn is_fresh_placement(&self) -> bool {
        self.fresh_placement
    }

    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    pub fn languages(&self) -> Vec<&str> {
        self.translations
            .iter()
            .map(|t| t.language_code.as_str())
            .collect()
    }

    pub fn select_language(&mut self, language: &str) -> Result<()> {
        if !self.translations.iter().any(|t| t.language_code == language) {
            return Err(SchedulerError::UnknownLanguage(language.to_string()));
        }
        self.current_language = language.to_string();
        Ok(())
    }

    /// Entry for the active tab
    pub fn current(&self) -> &TaskTranslation {
        self.translations
            .iter()
            .find(|t| t.language_code == self.current_language)
            .unwrap_or(&self.translations[0])
    }

    fn current_mut(&mut self) -> &mut TaskTranslation {
        let language = self.current_language.clone();
        let index = self
            .translations
            .iter()
            .position(|t| t.language_code == language)
            .unwrap_or(0);
        &mut self.translations[index]
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.current_mut().title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.current_mut().description = description.into();
    }

    pub fn translations(&self) -> &[TaskTranslation] {
        &self.translations
    }

    pub fn into_translations(self) -> Vec<TaskTranslation> {
        self.translations
    }
}
