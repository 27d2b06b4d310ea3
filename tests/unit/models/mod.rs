mod clock_time_tests;
mod media_duration_tests;
