use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use anyhow::Result;

use crate::types::course::Course;
use crate::types::user::User;

use super::{CourseStore, UserStore};

/// A memory-based user store backed by a simple map.
pub struct MemoryUserStore {
    users: RefCell<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RefCell::new(HashMap::new()),
        }
    }
}

impl UserStore for MemoryUserStore {
    fn get_user(&self, name: &str) -> Result<Option<User>> {
        Ok(self.users.borrow().get(name).cloned())
    }

    fn save_user(&self, user: User) -> Result<()> {
        self.users.borrow_mut().insert(user.name.clone(), user);
        Ok(())
    }

    fn list_users(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self.users.borrow().values().cloned().collect();
        users.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }
}

/// A memory-based course store. Codes are unique keys; saving a course
/// without a code assigns `COURSE-NNN` from a process-local counter.
pub struct MemoryCourseStore {
    courses: RefCell<HashMap<String, Course>>,
    next_id: Cell<u32>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self {
            courses: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        }
    }

    fn generate_code(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        format!("COURSE-{id:03}")
    }
}

impl CourseStore for MemoryCourseStore {
    fn get_course(&self, code: &str) -> Result<Option<Course>> {
        let courses = self.courses.borrow();
        Ok(courses
            .values()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned())
    }

    fn save_course(&self, mut course: Course) -> Result<String> {
        if course.code.is_empty() {
            course.code = self.generate_code();
        }
        let code = course.code.clone();
        self.courses.borrow_mut().insert(code.clone(), course);
        Ok(code)
    }

    fn list_courses(&self) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self.courses.borrow().values().cloned().collect();
        courses.sort_unstable_by(|a, b| a.code.cmp(&b.code));
        Ok(courses)
    }
}
