// Playlist Scheduler Library
// Weekly time grid, task placement and schedule projection for signage playlists

pub mod error;
pub mod models;
pub mod scheduler;
pub mod services;
pub mod utils;

pub use error::{Result, SchedulerError};
pub use scheduler::SchedulerSession;
