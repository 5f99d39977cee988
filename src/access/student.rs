use crate::types::user::Role;

use super::{AccessRequest, AccessResponse, Authorizer};

/// Students may only browse the course catalog.
pub struct StudentAuthorizer;

impl StudentAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for StudentAuthorizer {
    fn authorize_request(&self, req: &AccessRequest) -> AccessResponse {
        if req.role == Some(Role::Student) && req.action == "Read" && req.resource == "Courses" {
            return AccessResponse::Ok;
        }

        AccessResponse::Continue
    }
}
