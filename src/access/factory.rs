use super::admin::AdminAuthorizer;
use super::chain::ChainAuthorizer;
use super::deny::DenyAllAuthorizer;
use super::student::StudentAuthorizer;
use super::teacher::TeacherAuthorizer;
use super::union::UnionAuthorizer;

/// Assembles the authorization chain. The order is fixed: admin first,
/// then teacher, then student, with the deny-all handler closing the
/// chain so every request terminates with a decision.
pub struct AccessFactory;

impl AccessFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn build_authorizer(&self) -> ChainAuthorizer {
        let mut authorizers = vec![];

        let admin_authz = AdminAuthorizer::new();
        authorizers.push(UnionAuthorizer::Admin(admin_authz));

        let teacher_authz = TeacherAuthorizer::new();
        authorizers.push(UnionAuthorizer::Teacher(teacher_authz));

        let student_authz = StudentAuthorizer::new();
        authorizers.push(UnionAuthorizer::Student(student_authz));

        let deny_authz = DenyAllAuthorizer::new();
        authorizers.push(UnionAuthorizer::DenyAll(deny_authz));

        ChainAuthorizer::new(authorizers)
    }
}
