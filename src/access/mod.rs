mod admin;
mod deny;
mod student;
mod teacher;
mod union;

pub mod chain;
pub mod factory;
pub mod gate;
pub mod session;

use crate::types::user::Role;

pub trait Authorizer {
    fn authorize_request(&self, req: &AccessRequest) -> AccessResponse;
}

/// One authorization check. Built per call and discarded after the chain
/// has run. An unknown role name parses to `None` and matches no handler.
#[derive(Debug, Clone)]
pub struct AccessRequest {
    pub role: Option<Role>,
    pub resource: String,
    pub action: String,
}

/// Possible responses from an authorization check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessResponse {
    /// Access is granted
    Ok,
    /// Defers decision to next authorizer in chain
    Continue,
    /// Access is denied
    Unauthorized,
}
