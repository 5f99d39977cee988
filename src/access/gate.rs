use std::collections::HashMap;

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::display::TerminalDisplay;
use crate::time::format_timestamp;
use crate::types::user::Role;

/// Sentinel returned by [`AccessGate::read`] when the caller's role does
/// not permit reading. Denial is a value, never an error.
pub const ACCESS_DENIED: &str = "ACCESS_DENIED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    Read,
    Write,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "Read",
            Operation::Write => "Write",
        }
    }
}

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("resource unavailable: {0}")]
    Unavailable(String),
}

/// The sensitive data guarded by a gate. Opening may fail; that failure
/// is fatal for the operation that triggered it and is never retried by
/// the gate itself.
pub trait ProtectedResource: Sized {
    fn open() -> Result<Self, ResourceError>;

    fn data(&self) -> String;

    fn set_data(&mut self, data: String);
}

/// Default protected resource: the platform's confidential record store.
pub struct SecureVault {
    data: String,
}

impl ProtectedResource for SecureVault {
    fn open() -> Result<Self, ResourceError> {
        debug!("Opening secure vault");
        Ok(Self {
            data: String::from("Confidential system information"),
        })
    }

    fn data(&self) -> String {
        self.data.clone()
    }

    fn set_data(&mut self, data: String) {
        self.data = data;
    }
}

/// One attempted operation, recorded whether or not it was allowed.
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogEntry {
    pub timestamp: u64,
    pub role: Role,
    pub operation: Operation,
}

/// Gates every read and write of a protected resource behind a static
/// role policy, logs each attempt, and defers opening the resource until
/// the first permitted use.
///
/// A gate belongs to one caller; the role is fixed at construction.
pub struct AccessGate<R: ProtectedResource> {
    role: Role,
    resource: Option<R>,
    log: Vec<AccessLogEntry>,
}

impl<R: ProtectedResource> AccessGate<R> {
    pub fn new(role: Role) -> Self {
        debug!("Access gate created for role {role}");
        Self {
            role,
            resource: None,
            log: Vec::new(),
        }
    }

    /// Reads the guarded data. Denied reads return [`ACCESS_DENIED`] and
    /// are still logged. The only error is a failed resource open.
    pub fn read(&mut self) -> Result<String> {
        self.log_access(Operation::Read);

        if !self.permits(Operation::Read) {
            debug!("Read denied for role {}", self.role);
            return Ok(ACCESS_DENIED.to_string());
        }

        let resource = self.ensure_resource()?;
        Ok(resource.data())
    }

    /// Writes the guarded data. A denied write is a silent no-op (logged,
    /// nothing mutated).
    pub fn write(&mut self, data: String) -> Result<()> {
        self.log_access(Operation::Write);

        if !self.permits(Operation::Write) {
            debug!("Write denied for role {}", self.role);
            return Ok(());
        }

        let resource = self.ensure_resource()?;
        resource.set_data(data);
        Ok(())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Ordered record of every attempt, allowed or not.
    pub fn access_log(&self) -> &[AccessLogEntry] {
        &self.log
    }

    /// Whether the underlying resource has been opened yet.
    pub fn initialized(&self) -> bool {
        self.resource.is_some()
    }

    fn permits(&self, operation: Operation) -> bool {
        match (self.role, operation) {
            (Role::Administrator, _) => true,
            (Role::Teacher, Operation::Read) => true,
            _ => false,
        }
    }

    fn ensure_resource(&mut self) -> Result<&mut R> {
        let resource = match self.resource.take() {
            Some(resource) => resource,
            None => R::open().context("open protected resource")?,
        };
        Ok(self.resource.insert(resource))
    }

    fn log_access(&mut self, operation: Operation) {
        self.log.push(AccessLogEntry {
            timestamp: crate::time::now(),
            role: self.role,
            operation,
        });
    }
}

impl TerminalDisplay for AccessLogEntry {
    fn table_titles() -> Vec<&'static str> {
        vec!["Time", "Role", "Operation"]
    }

    fn table_row(self) -> Vec<String> {
        vec![
            format_timestamp(self.timestamp),
            self.role.to_string(),
            self.operation.as_str().to_string(),
        ]
    }

    fn csv_titles() -> Vec<&'static str> {
        vec!["timestamp", "role", "operation"]
    }

    fn csv_row(self) -> HashMap<&'static str, String> {
        vec![
            ("timestamp", self.timestamp.to_string()),
            ("role", self.role.to_string()),
            ("operation", self.operation.as_str().to_string()),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenResource;

    impl ProtectedResource for BrokenResource {
        fn open() -> Result<Self, ResourceError> {
            Err(ResourceError::Unavailable("backing store offline".to_string()))
        }

        fn data(&self) -> String {
            unreachable!()
        }

        fn set_data(&mut self, _data: String) {
            unreachable!()
        }
    }

    #[test]
    fn test_admin_full_access() {
        let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Administrator);

        let data = gate.read().unwrap();
        assert_eq!(data, "Confidential system information");

        gate.write("updated".to_string()).unwrap();
        assert_eq!(gate.read().unwrap(), "updated");
    }

    #[test]
    fn test_teacher_read_only() {
        let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Teacher);

        assert_eq!(gate.read().unwrap(), "Confidential system information");

        // Denied write: silent, logged, nothing mutated.
        gate.write("tampered".to_string()).unwrap();
        assert_eq!(gate.read().unwrap(), "Confidential system information");
    }

    #[test]
    fn test_student_denied() {
        let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Student);

        assert_eq!(gate.read().unwrap(), ACCESS_DENIED);
        gate.write("tampered".to_string()).unwrap();
        assert_eq!(gate.read().unwrap(), ACCESS_DENIED);
    }

    #[test]
    fn test_lazy_initialization() {
        let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Student);
        assert!(!gate.initialized());

        // A denied-only sequence never opens the resource.
        gate.read().unwrap();
        gate.write("x".to_string()).unwrap();
        assert!(!gate.initialized());

        let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Teacher);
        assert!(!gate.initialized());
        gate.read().unwrap();
        assert!(gate.initialized());
    }

    #[test]
    fn test_log_records_every_attempt() {
        let mut gate: AccessGate<SecureVault> = AccessGate::new(Role::Teacher);

        gate.read().unwrap();
        gate.write("denied".to_string()).unwrap();
        gate.read().unwrap();

        let log = gate.access_log();
        assert_eq!(log.len(), 3, "denied attempts are logged too");
        assert_eq!(log[0].operation, Operation::Read);
        assert_eq!(log[1].operation, Operation::Write);
        assert_eq!(log[2].operation, Operation::Read);
        assert!(log.iter().all(|entry| entry.role == Role::Teacher));
    }

    #[test]
    fn test_failed_open_is_fatal() {
        let mut gate: AccessGate<BrokenResource> = AccessGate::new(Role::Administrator);

        assert!(gate.read().is_err());
        // The attempt is still logged, and the gate stays uninitialized.
        assert_eq!(gate.access_log().len(), 1);
        assert!(!gate.initialized());

        // Denied callers never touch the broken resource.
        let mut gate: AccessGate<BrokenResource> = AccessGate::new(Role::Guest);
        assert_eq!(gate.read().unwrap(), ACCESS_DENIED);
    }
}
