use crate::types::user::Role;

use super::{AccessRequest, AccessResponse, Authorizer};

/// Teachers can read and author content, but never delete.
pub struct TeacherAuthorizer;

/// Actions a teacher may perform on any resource.
const TEACHER_ACTIONS: [&str; 3] = ["Read", "Create", "Update"];

impl TeacherAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for TeacherAuthorizer {
    fn authorize_request(&self, req: &AccessRequest) -> AccessResponse {
        if req.role == Some(Role::Teacher) && TEACHER_ACTIONS.contains(&req.action.as_str()) {
            return AccessResponse::Ok;
        }

        AccessResponse::Continue
    }
}
