use anyhow::Result;
use clap::{Args, Subcommand};

use crate::academy::Academy;
use crate::config::Config;
use crate::display::{self, DisplayStyle};
use crate::types::user::Role;

/// Manage the in-memory user registry.
#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    List(ListUsersArgs),
    Add(AddUserArgs),
}

/// List registered users.
#[derive(Args)]
pub struct ListUsersArgs {
    /// Output style.
    #[arg(short, long, value_enum, default_value = "table")]
    pub style: DisplayStyle,
}

/// Register a new user.
#[derive(Args)]
pub struct AddUserArgs {
    /// User name, unique in the registry.
    pub name: String,

    /// Role assigned to the user.
    #[arg(value_enum)]
    pub role: Role,

    /// Password for the user.
    #[arg(short, long)]
    pub password: String,
}

impl UsersArgs {
    pub fn run(&self, cfg: &Config) -> Result<()> {
        let academy = Academy::new(cfg)?;

        match &self.command {
            UsersCommand::List(args) => {
                display::display_list(academy.list_users()?, args.style)?;
            }
            UsersCommand::Add(args) => {
                let user = academy.register_user(&args.name, args.role, &args.password)?;
                println!("User '{}' registered as {}", user.name, user.role);
            }
        }

        Ok(())
    }
}
