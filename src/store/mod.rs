mod memory;

pub use memory::{MemoryCourseStore, MemoryUserStore};

use anyhow::Result;

use crate::types::course::Course;
use crate::types::user::User;

/// User registry. Implementations keep everything in process memory;
/// nothing survives exit.
pub trait UserStore {
    fn get_user(&self, name: &str) -> Result<Option<User>>;

    fn save_user(&self, user: User) -> Result<()>;

    /// All users, ordered by name.
    fn list_users(&self) -> Result<Vec<User>>;
}

/// Course catalog.
pub trait CourseStore {
    /// Lookup by code, case-insensitive.
    fn get_course(&self, code: &str) -> Result<Option<Course>>;

    /// Saves a course, assigning a sequential code when the course has
    /// none. Returns the code the course is stored under.
    fn save_course(&self, course: Course) -> Result<String>;

    /// All courses, ordered by code.
    fn list_courses(&self) -> Result<Vec<Course>>;
}
