use anyhow::Result;
use serde::Serialize;

use crate::academy::Academy;
use crate::types::user::Role;

/// Point-in-time summary of everything the platform currently holds in
/// memory.
#[derive(Debug, Serialize)]
pub struct SystemReport {
    pub generated_at: u64,
    pub total_users: usize,
    pub administrators: usize,
    pub teachers: usize,
    pub students: usize,
    pub total_courses: usize,
    pub total_enrollments: usize,
    pub notifications: usize,
}

impl SystemReport {
    pub fn collect(academy: &Academy) -> Result<SystemReport> {
        let users = academy.list_users()?;
        let courses = academy.list_courses()?;

        let count_role =
            |role: Role| -> usize { users.iter().filter(|u| u.role == role).count() };

        Ok(SystemReport {
            generated_at: crate::time::now(),
            total_users: users.len(),
            administrators: count_role(Role::Administrator),
            teachers: count_role(Role::Teacher),
            students: count_role(Role::Student),
            total_courses: courses.len(),
            total_enrollments: courses.iter().map(|c| c.students.len()).sum(),
            notifications: academy.notifications().len(),
        })
    }

    /// Metric/value pairs, in presentation order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Users", self.total_users.to_string()),
            ("Administrators", self.administrators.to_string()),
            ("Teachers", self.teachers.to_string()),
            ("Students", self.students.to_string()),
            ("Courses", self.total_courses.to_string()),
            ("Enrollments", self.total_enrollments.to_string()),
            ("Notifications", self.notifications.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::types::course::Course;

    use super::*;

    #[test]
    fn test_collect() {
        let mut academy = Academy::new(&Config::default()).unwrap();
        academy.login("admin", "admin123").unwrap();
        academy
            .create_course(Course::builder("Algorithms", "teacher1").build())
            .unwrap();
        academy.enroll("student1", "COURSE-001").unwrap();

        let report = SystemReport::collect(&academy).unwrap();
        assert_eq!(report.total_users, 3);
        assert_eq!(report.administrators, 1);
        assert_eq!(report.teachers, 1);
        assert_eq!(report.students, 1);
        assert_eq!(report.total_courses, 1);
        assert_eq!(report.total_enrollments, 1);
        // login + course + enroll
        assert_eq!(report.notifications, 3);
    }
}
