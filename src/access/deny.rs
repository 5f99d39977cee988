use super::{AccessRequest, AccessResponse, Authorizer};

/// Terminal handler; denies whatever reached it. Placed last so every
/// request gets exactly one decision.
pub struct DenyAllAuthorizer;

impl DenyAllAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for DenyAllAuthorizer {
    fn authorize_request(&self, _req: &AccessRequest) -> AccessResponse {
        AccessResponse::Unauthorized
    }
}
