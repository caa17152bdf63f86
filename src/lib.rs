//! Application layer for the `lattica` binary: configuration loading,
//! seeding, and the foreground consumer loop that polls the scheduler.

pub mod app;
