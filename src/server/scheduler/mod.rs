//! Cron jobs for time-based booking transitions.

pub mod booking_maintenance;
