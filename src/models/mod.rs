// Module exports for models

pub mod grid;
pub mod media;
pub mod schedule;
pub mod settings;
pub mod task;
