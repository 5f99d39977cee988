use log::debug;

use crate::types::user::Role;

use super::union::UnionAuthorizer;
use super::{AccessRequest, AccessResponse, Authorizer};

/// Walks an ordered list of authorizers; the first one that answers with
/// something other than `Continue` decides, and nothing after it runs.
pub struct ChainAuthorizer {
    authorizers: Vec<UnionAuthorizer>,
}

impl ChainAuthorizer {
    pub fn new(authorizers: Vec<UnionAuthorizer>) -> Self {
        Self { authorizers }
    }

    /// Runs one (role, resource, action) check through the chain and maps
    /// the response to a plain decision. Denial is an ordinary outcome,
    /// not an error.
    pub fn authorize(&self, role: &str, resource: &str, action: &str) -> bool {
        let req = AccessRequest {
            role: Role::parse(role),
            resource: resource.to_string(),
            action: action.to_string(),
        };

        let allow = matches!(self.authorize_request(&req), AccessResponse::Ok);
        debug!("Authorize {role} -> {action} on {resource}: allow={allow}");
        allow
    }
}

impl Authorizer for ChainAuthorizer {
    fn authorize_request(&self, req: &AccessRequest) -> AccessResponse {
        for authorizer in self.authorizers.iter() {
            match authorizer.authorize_request(req) {
                AccessResponse::Ok => return AccessResponse::Ok,
                AccessResponse::Continue => continue,
                AccessResponse::Unauthorized => return AccessResponse::Unauthorized,
            }
        }

        AccessResponse::Continue
    }
}
