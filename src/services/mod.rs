// Service module exports

pub mod placement;
pub mod playlist;
pub mod projection;
pub mod settings;
