use super::admin::AdminAuthorizer;
use super::deny::DenyAllAuthorizer;
use super::student::StudentAuthorizer;
use super::teacher::TeacherAuthorizer;
use super::{AccessRequest, AccessResponse, Authorizer};

pub enum UnionAuthorizer {
    Admin(AdminAuthorizer),
    Teacher(TeacherAuthorizer),
    Student(StudentAuthorizer),
    DenyAll(DenyAllAuthorizer),
}

impl Authorizer for UnionAuthorizer {
    fn authorize_request(&self, req: &AccessRequest) -> AccessResponse {
        match self {
            UnionAuthorizer::Admin(a) => a.authorize_request(req),
            UnionAuthorizer::Teacher(t) => t.authorize_request(req),
            UnionAuthorizer::Student(s) => s.authorize_request(req),
            UnionAuthorizer::DenyAll(d) => d.authorize_request(req),
        }
    }
}
