use std::collections::HashMap;
use std::fmt;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::display::TerminalDisplay;
use crate::time::format_since;

/// The closed set of roles known to the platform. Permissions derive from
/// the role alone; there is no per-user rule storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Role {
    Administrator,
    Teacher,
    Student,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Guest => "Guest",
        }
    }

    /// Parses a role name, case-insensitive. Unknown names yield `None`;
    /// downstream checks treat them as deny-by-default.
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "administrator" | "admin" => Some(Role::Administrator),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,

    pub role: Role,

    #[serde(default)]
    pub create_time: u64,

    #[serde(skip_serializing)]
    #[serde(default)]
    pub password_hash: String,

    #[serde(skip_serializing)]
    #[serde(default)]
    pub password_salt: String,
}

impl User {
    const SALT_LENGTH: usize = 30;

    /// Creates a user with a freshly salted password hash. The hash is a
    /// placeholder to keep demo credentials out of plain sight, not a
    /// security measure.
    pub fn new(name: impl ToString, role: Role, password: &str) -> Self {
        let salt = Self::generate_salt(Self::SALT_LENGTH);
        let hash = Self::get_password_hash(password, &salt);
        Self {
            name: name.to_string(),
            role,
            create_time: crate::time::now(),
            password_hash: hash,
            password_salt: salt,
        }
    }

    pub fn verify_password(&self, password: &str) -> bool {
        Self::get_password_hash(password, &self.password_salt) == self.password_hash
    }

    pub fn get_password_hash(password: &str, salt: &str) -> String {
        let combined = format!("{password}{salt}");
        let hash = Sha256::digest(combined.as_bytes());
        format!("{:x}", hash)
    }

    fn generate_salt(length: usize) -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
        let mut rng = rand::thread_rng();

        (0..length)
            .map(|_| {
                let idx = rng.gen_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

impl TerminalDisplay for User {
    fn table_titles() -> Vec<&'static str> {
        vec!["Name", "Role", "Create"]
    }

    fn table_row(self) -> Vec<String> {
        vec![
            self.name,
            self.role.to_string(),
            format_since(self.create_time),
        ]
    }

    fn csv_titles() -> Vec<&'static str> {
        vec!["name", "role", "create_time"]
    }

    fn csv_row(self) -> HashMap<&'static str, String> {
        vec![
            ("name", self.name),
            ("role", self.role.to_string()),
            ("create_time", self.create_time.to_string()),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("Administrator"), Some(Role::Administrator));
        assert_eq!(Role::parse("admin"), Some(Role::Administrator));
        assert_eq!(Role::parse("TEACHER"), Some(Role::Teacher));
        assert_eq!(Role::parse("student"), Some(Role::Student));
        assert_eq!(Role::parse("guest"), Some(Role::Guest));
        assert_eq!(Role::parse("janitor"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_password_verify() {
        let user = User::new("alice", Role::Teacher, "secret123");
        assert!(user.verify_password("secret123"));
        assert!(!user.verify_password("secret124"));
        assert!(!user.verify_password(""));

        // Same password, different user: salts must differ.
        let other = User::new("bob", Role::Teacher, "secret123");
        assert_ne!(user.password_salt, other.password_salt);
        assert_ne!(user.password_hash, other.password_hash);
    }
}
