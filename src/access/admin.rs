use crate::types::user::Role;

use super::{AccessRequest, AccessResponse, Authorizer};

/// Grants administrators everything, unconditionally.
pub struct AdminAuthorizer;

impl AdminAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for AdminAuthorizer {
    fn authorize_request(&self, req: &AccessRequest) -> AccessResponse {
        if req.role == Some(Role::Administrator) {
            return AccessResponse::Ok;
        }

        AccessResponse::Continue
    }
}
