use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use aula::cmd::App;

fn run() -> Result<()> {
    let app = App::parse();
    app.run()
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            _ = writeln!(io::stderr(), "Fatal: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
