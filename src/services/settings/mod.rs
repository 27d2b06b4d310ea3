mod service;

pub use service::{default_path, SettingsService};
