use anyhow::Result;
use clap::Args;

use crate::academy::Academy;
use crate::config::Config;

/// Log a user in, report the session state, then log out again. State is
/// process-local; the session ends with this invocation.
#[derive(Args)]
pub struct LoginArgs {
    /// User name.
    pub name: String,

    /// Password for the user.
    #[arg(short, long)]
    pub password: String,
}

impl LoginArgs {
    pub fn run(&self, cfg: &Config) -> Result<()> {
        let mut academy = Academy::new(cfg)?;

        match academy.login(&self.name, &self.password)? {
            Some(role) => {
                println!("Logged in '{}' as {role}", self.name);
                println!("Session: {}", academy.session_state());

                academy.logout();
                println!("Session: {}", academy.session_state());
            }
            None => println!("Login denied"),
        }

        Ok(())
    }
}
