// Utility modules shared across the scheduler

pub mod time;
