use aula::academy::Academy;
use aula::access::factory::AccessFactory;
use aula::access::gate::{AccessGate, Operation, SecureVault, ACCESS_DENIED};
use aula::access::session::{SessionContext, SessionState};
use aula::config::Config;
use aula::types::course::Course;
use aula::types::user::Role;

#[test]
fn authorization_matrix() {
    let chain = AccessFactory::new().build_authorizer();

    // Administrators: everything.
    assert!(chain.authorize("Administrator", "Courses", "Read"));
    assert!(chain.authorize("Administrator", "Grades", "Delete"));
    assert!(chain.authorize("Administrator", "whatever", "whatever"));

    // Teachers: read and author, never delete.
    assert!(chain.authorize("Teacher", "X", "Read"));
    assert!(chain.authorize("Teacher", "X", "Create"));
    assert!(chain.authorize("Teacher", "X", "Update"));
    assert!(!chain.authorize("Teacher", "X", "Delete"));

    // Students: course catalog reads only.
    assert!(chain.authorize("Student", "Courses", "Read"));
    assert!(!chain.authorize("Student", "Grades", "Read"));
    assert!(!chain.authorize("Student", "Courses", "Update"));

    // Everyone else falls through to the terminal deny handler.
    assert!(!chain.authorize("Guest", "Courses", "Read"));
    assert!(!chain.authorize("visitor", "Courses", "Read"));
    assert!(!chain.authorize("", "", ""));
}

#[test]
fn gate_policy_matrix() {
    // Administrator: read and write both land on the resource.
    let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Administrator);
    assert_eq!(gate.read().unwrap(), "Confidential system information");
    gate.write("rewritten".to_string()).unwrap();
    assert_eq!(gate.read().unwrap(), "rewritten");

    // Teacher: read allowed, write silently dropped.
    let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Teacher);
    gate.write("rewritten".to_string()).unwrap();
    assert_eq!(gate.read().unwrap(), "Confidential system information");

    // Student and guest: denied either way, resource never opened.
    for role in [Role::Student, Role::Guest] {
        let mut gate: AccessGate<SecureVault> = AccessGate::new(role);
        assert_eq!(gate.read().unwrap(), ACCESS_DENIED);
        gate.write("rewritten".to_string()).unwrap();
        assert_eq!(gate.read().unwrap(), ACCESS_DENIED);
        assert!(!gate.initialized());
        assert_eq!(gate.access_log().len(), 3);
    }
}

#[test]
fn gate_log_order() {
    let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Administrator);
    gate.read().unwrap();
    gate.write("one".to_string()).unwrap();
    gate.write("two".to_string()).unwrap();
    gate.read().unwrap();

    let operations: Vec<Operation> = gate.access_log().iter().map(|e| e.operation).collect();
    assert_eq!(
        operations,
        vec![
            Operation::Read,
            Operation::Write,
            Operation::Write,
            Operation::Read
        ]
    );
}

#[test]
fn session_transitions() {
    let mut session = SessionContext::new();
    assert_eq!(session.current_state(), SessionState::Idle);

    session.login();
    assert_eq!(session.current_state(), SessionState::Active);
    session.login();
    assert_eq!(session.current_state(), SessionState::Active);

    session.timeout();
    assert_eq!(session.current_state(), SessionState::Expired);

    session.login();
    assert_eq!(session.current_state(), SessionState::Active);

    session.timeout();
    session.logout();
    assert_eq!(session.current_state(), SessionState::Idle);

    session.activity();
    session.timeout();
    assert_eq!(
        session.current_state(),
        SessionState::Idle,
        "activity and timeout are no-ops from Idle"
    );
}

#[test]
fn full_academic_flow() {
    let cfg = Config::default();
    let mut academy = Academy::new(&cfg).unwrap();

    // Seeded demo users are present.
    let names: Vec<String> = academy
        .list_users()
        .unwrap()
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["admin", "student1", "teacher1"]);

    // Failed then successful login.
    assert_eq!(academy.login("admin", "nope").unwrap(), None);
    assert_eq!(academy.session_state(), SessionState::Idle);
    assert_eq!(
        academy.login("admin", "admin123").unwrap(),
        Some(Role::Administrator)
    );
    assert_eq!(academy.session_state(), SessionState::Active);

    // Course creation and enrollment.
    let course = academy
        .create_course(Course::builder("Operating Systems", "teacher1").build())
        .unwrap();
    academy.enroll("student1", &course.code).unwrap();

    let courses = academy.list_courses().unwrap();
    assert_eq!(courses.len(), 1);
    assert!(courses[0].is_enrolled("student1"));

    // Session expiry and logout.
    academy.expire_session();
    assert_eq!(academy.session_state(), SessionState::Expired);
    academy.logout();
    assert_eq!(academy.session_state(), SessionState::Idle);

    // Notifications were fanned out along the way, in order.
    let topics: Vec<String> = academy
        .notifications()
        .into_iter()
        .map(|n| n.topic)
        .collect();
    assert_eq!(topics, vec!["login", "course", "enroll", "logout"]);
}
