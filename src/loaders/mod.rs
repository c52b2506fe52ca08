mod courses;
mod schedule;

pub use courses::{CourseListLoader, CourseListPage};
pub use schedule::ScheduleLoader;
