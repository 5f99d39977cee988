use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::access::session::SessionContext;
use crate::config::Config;

/// Drive a session through a sequence of lifecycle events.
#[derive(Args)]
pub struct SessionArgs {
    /// Events to deliver, in order.
    #[arg(value_enum, required = true)]
    pub events: Vec<SessionEvent>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SessionEvent {
    Login,
    Activity,
    Timeout,
    Logout,
}

impl SessionEvent {
    fn as_str(&self) -> &'static str {
        match self {
            SessionEvent::Login => "login",
            SessionEvent::Activity => "activity",
            SessionEvent::Timeout => "timeout",
            SessionEvent::Logout => "logout",
        }
    }
}

impl SessionArgs {
    pub fn run(&self, _cfg: &Config) -> Result<()> {
        let mut session = SessionContext::new();
        println!("initial: {}", session.current_state());

        for event in self.events.iter() {
            match event {
                SessionEvent::Login => session.login(),
                SessionEvent::Activity => session.activity(),
                SessionEvent::Timeout => session.timeout(),
                SessionEvent::Logout => session.logout(),
            }
            println!("{}: {}", event.as_str(), session.current_state());
        }

        Ok(())
    }
}
