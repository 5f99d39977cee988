use anyhow::Result;
use clap::{Parser, Subcommand};

mod cani;
mod courses;
mod demo;
mod gate;
mod login;
mod report;
mod session;
mod users;

use crate::config::Config;

/// In-memory academic platform: role-based authorization, guarded
/// resources and session lifecycle. All data lives in process memory and
/// is discarded at exit.
#[derive(Parser)]
#[command(author, version, about)]
pub struct App {
    /// Config file path. Defaults to ~/.config/aula.toml; missing files
    /// fall back to built-in defaults.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub commands: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Cani(cani::CaniArgs),
    Gate(gate::GateArgs),
    Session(session::SessionArgs),
    Login(login::LoginArgs),
    Users(users::UsersArgs),
    Courses(courses::CoursesArgs),
    Report(report::ReportArgs),
    Demo(demo::DemoArgs),
}

impl App {
    pub fn run(&self) -> Result<()> {
        let cfg = Config::load(self.config.as_deref())?;
        crate::logs::init(&cfg.log_level)?;

        match &self.commands {
            Commands::Cani(args) => args.run(&cfg),
            Commands::Gate(args) => args.run(&cfg),
            Commands::Session(args) => args.run(&cfg),
            Commands::Login(args) => args.run(&cfg),
            Commands::Users(args) => args.run(&cfg),
            Commands::Courses(args) => args.run(&cfg),
            Commands::Report(args) => args.run(&cfg),
            Commands::Demo(args) => args.run(&cfg),
        }
    }
}
