use anyhow::{bail, Result};
use log::{info, warn};

use crate::access::session::{SessionContext, SessionState};
use crate::config::Config;
use crate::notify::{ConsoleSink, NotificationCenter};
use crate::store::{CourseStore, MemoryCourseStore, MemoryUserStore, UserStore};
use crate::types::course::Course;
use crate::types::notification::Notification;
use crate::types::user::{Role, User};

/// The application service: owns the stores, the notification center and
/// the session for the current caller. Built once in the entry point and
/// passed around explicitly; there are no global registries.
///
/// Everything lives in process memory and is gone at exit.
pub struct Academy {
    users: Box<dyn UserStore>,
    courses: Box<dyn CourseStore>,
    notifications: NotificationCenter,
    session: SessionContext,
    current_user: Option<User>,
}

impl Academy {
    pub fn new(cfg: &Config) -> Result<Self> {
        let mut notifications = NotificationCenter::new();
        notifications.register_sink(Box::new(ConsoleSink::new()));

        let academy = Self {
            users: Box::new(MemoryUserStore::new()),
            courses: Box::new(MemoryCourseStore::new()),
            notifications,
            session: SessionContext::new(),
            current_user: None,
        };

        if cfg.auth.seed_demo_users {
            academy.seed_demo_users(cfg)?;
        }

        Ok(academy)
    }

    fn seed_demo_users(&self, cfg: &Config) -> Result<()> {
        if cfg.auth.has_default_admin_password() {
            warn!("Using default admin password IS DANGEROUS, please change it in production");
        }

        self.users
            .save_user(User::new("admin", Role::Administrator, &cfg.auth.admin_password))?;
        self.users
            .save_user(User::new("teacher1", Role::Teacher, "prof123"))?;
        self.users
            .save_user(User::new("student1", Role::Student, "est123"))?;

        info!("Seeded demo users: admin, teacher1, student1");
        Ok(())
    }

    /// Verifies credentials and activates the session. Unknown users and
    /// wrong passwords are a denial (`Ok(None)`), not an error.
    pub fn login(&mut self, name: &str, password: &str) -> Result<Option<Role>> {
        let user = match self.users.get_user(name)? {
            Some(user) => user,
            None => {
                warn!("Login denied, user '{name}' not found");
                return Ok(None);
            }
        };

        if !user.verify_password(password) {
            warn!("Login denied, invalid password for user '{name}'");
            return Ok(None);
        }

        self.session.login();
        self.notifications
            .publish("login", format!("{} logged in as {}", user.name, user.role));
        info!("Login succeeded for '{}' ({})", user.name, user.role);
        self.current_user = Some(user.clone());

        Ok(Some(user.role))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            self.notifications
                .publish("logout", format!("{} logged out", user.name));
        }
        self.session.logout();
    }

    /// Records an explicit expiry event, as delivered by the host's
    /// scheduler. The current user stays set; re-login reactivates.
    pub fn expire_session(&mut self) {
        self.session.timeout();
    }

    pub fn register_user(&self, name: &str, role: Role, password: &str) -> Result<User> {
        if name.is_empty() {
            bail!("user name cannot be empty");
        }
        if password.is_empty() {
            bail!("password cannot be empty");
        }
        if self.users.get_user(name)?.is_some() {
            bail!("user '{name}' already exists");
        }

        let user = User::new(name, role, password);
        self.users.save_user(user.clone())?;
        self.notifications
            .publish("register", format!("{name} registered as {role}"));
        Ok(user)
    }

    /// Saves a course after checking the instructor. Returns the stored
    /// course, with its code assigned.
    pub fn create_course(&self, course: Course) -> Result<Course> {
        match self.users.get_user(&course.instructor)? {
            Some(user) if matches!(user.role, Role::Teacher | Role::Administrator) => {}
            Some(user) => bail!(
                "user '{}' has role {}, only teachers and administrators instruct courses",
                user.name,
                user.role
            ),
            None => bail!("instructor '{}' not found", course.instructor),
        }

        let name = course.name.clone();
        let code = self.courses.save_course(course)?;
        self.notifications
            .publish("course", format!("Course '{name}' created with code {code}"));

        match self.courses.get_course(&code)? {
            Some(course) => Ok(course),
            None => bail!("course '{code}' missing after save"),
        }
    }

    pub fn enroll(&self, student: &str, code: &str) -> Result<()> {
        match self.users.get_user(student)? {
            Some(user) if user.role == Role::Student => {}
            Some(user) => bail!("user '{}' has role {}, only students enroll", user.name, user.role),
            None => bail!("student '{student}' not found"),
        }

        let mut course = match self.courses.get_course(code)? {
            Some(course) => course,
            None => bail!("course '{code}' not found"),
        };
        if course.is_enrolled(student) {
            bail!("student '{student}' is already enrolled in '{}'", course.code);
        }

        course.students.push(student.to_string());
        let code = self.courses.save_course(course)?;
        self.notifications
            .publish("enroll", format!("{student} enrolled in {code}"));
        Ok(())
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        self.users.list_users()
    }

    pub fn list_courses(&self) -> Result<Vec<Course>> {
        self.courses.list_courses()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.history()
    }

    pub fn session_state(&self) -> SessionState {
        self.session.current_state()
    }

    pub fn session_mut(&mut self) -> &mut SessionContext {
        &mut self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_academy() -> Academy {
        Academy::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_login_denials() {
        let mut academy = demo_academy();

        assert_eq!(academy.login("nobody", "admin123").unwrap(), None);
        assert_eq!(academy.login("admin", "wrong").unwrap(), None);
        assert_eq!(academy.session_state(), SessionState::Idle);
        assert!(academy.current_user().is_none());
    }

    #[test]
    fn test_login_logout() {
        let mut academy = demo_academy();

        let role = academy.login("admin", "admin123").unwrap();
        assert_eq!(role, Some(Role::Administrator));
        assert_eq!(academy.session_state(), SessionState::Active);
        assert_eq!(academy.current_user().unwrap().name, "admin");

        academy.logout();
        assert_eq!(academy.session_state(), SessionState::Idle);
        assert!(academy.current_user().is_none());

        let topics: Vec<String> = academy
            .notifications()
            .into_iter()
            .map(|n| n.topic)
            .collect();
        assert_eq!(topics, vec!["login", "logout"]);
    }

    #[test]
    fn test_register_user() {
        let academy = demo_academy();

        academy.register_user("alice", Role::Teacher, "pw123").unwrap();
        assert!(academy.register_user("alice", Role::Student, "pw").is_err());
        assert!(academy.register_user("", Role::Student, "pw").is_err());
        assert!(academy.register_user("bob", Role::Student, "").is_err());

        assert_eq!(academy.list_users().unwrap().len(), 4);
    }

    #[test]
    fn test_course_flow() {
        let academy = demo_academy();

        let course = academy
            .create_course(Course::builder("Algorithms", "teacher1").credits(4).build())
            .unwrap();
        assert_eq!(course.code, "COURSE-001");

        // Students cannot instruct, unknown instructors are rejected.
        assert!(academy
            .create_course(Course::builder("X", "student1").build())
            .is_err());
        assert!(academy
            .create_course(Course::builder("X", "ghost").build())
            .is_err());

        academy.enroll("student1", "COURSE-001").unwrap();
        assert!(academy.enroll("student1", "COURSE-001").is_err(), "double enroll");
        assert!(academy.enroll("teacher1", "COURSE-001").is_err());
        assert!(academy.enroll("student1", "COURSE-999").is_err());

        let courses = academy.list_courses().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].students, vec!["student1"]);
    }
}
