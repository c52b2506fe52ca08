pub mod types;
pub mod client;

pub use types::{ScheduleQuery, BackendErrorBody};
pub use client::{BackendClient, COURSES_PATH, SCHEDULE_PATH};
