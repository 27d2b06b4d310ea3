// Session scripts
// A JSON list of user gestures replayed against a SchedulerSession, plus
// the session file the binary reads them from.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::Result as SchedulerResult;
use crate::models::media::MediaItem;
use crate::models::schedule::ScheduleRecord;
use crate::services::playlist::PlaylistForm;

use super::resize::ResizeHandle;
use super::SchedulerSession;

/// One recorded gesture. `from`/`to` are droppable ids (`"task-list"` or
/// `"{day}-{HH:mm}"`); a missing `to` is a drop outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    Drag {
        task: String,
        from: String,
        #[serde(default)]
        to: Option<String>,
    },
    Resize {
        task: String,
        handle: ResizeHandle,
    },
    Unplace {
        task: String,
    },
    Discard {
        task: String,
    },
    Edit {
        task: String,
    },
    SelectLanguage {
        language: String,
    },
    SetTitle {
        #[serde(default)]
        language: Option<String>,
        title: String,
    },
    SetDescription {
        #[serde(default)]
        language: Option<String>,
        description: String,
    },
    Submit,
    Cancel,
}

impl ScriptOp {
    pub fn apply(&self, session: &mut SchedulerSession) -> SchedulerResult<()> {
        match self {
            ScriptOp::Drag { task, from, to } => {
                session.begin_drag(task, from)?;
                session.drop(to.as_deref())?;
            }
            ScriptOp::Resize { task, handle } => {
                session.resize(task, *handle)?;
            }
            ScriptOp::Unplace { task } => {
                session.unplace(task)?;
            }
            ScriptOp::Discard { task } => {
                session.discard(task)?;
            }
            ScriptOp::Edit { task } => {
                session.edit_translations(task)?;
            }
            ScriptOp::SelectLanguage { language } => {
                session.dialog_mut()?.select_language(language)?;
            }
            ScriptOp::SetTitle { language, title } => {
                let dialog = session.dialog_mut()?;
                if let Some(language) = language {
                    dialog.select_language(language)?;
                }
                dialog.set_title(title.as_str());
            }
            ScriptOp::SetDescription {
                language,
                description,
            } => {
                let dialog = session.dialog_mut()?;
                if let Some(language) = language {
                    dialog.select_language(language)?;
                }
                dialog.set_description(description.as_str());
            }
            ScriptOp::Submit => {
                session.submit_translations()?;
            }
            ScriptOp::Cancel => {
                session.cancel_translations()?;
            }
        }
        Ok(())
    }
}

/// Replay `ops` in order, stopping at the first failure.
pub fn run(session: &mut SchedulerSession, ops: &[ScriptOp]) -> Result<()> {
    for (index, op) in ops.iter().enumerate() {
        log::debug!("Script step {}: {:?}", index + 1, op);
        op.apply(session)
            .with_context(|| format!("script step {} ({:?}) failed", index + 1, op))?;
    }
    Ok(())
}

fn default_active() -> bool {
    true
}

/// Everything needed to replay one editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub schedules: Vec<ScheduleRecord>,
    #[serde(default)]
    pub script: Vec<ScriptOp>,
}

impl SessionFile {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read session from {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("failed to deserialize session from {}", path.display()))
    }

    pub fn form(&self) -> PlaylistForm {
        PlaylistForm {
            title: self.title.clone(),
            is_active: self.is_active,
        }
    }
}
