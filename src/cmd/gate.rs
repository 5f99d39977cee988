use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::access::gate::{AccessGate, SecureVault};
use crate::config::Config;
use crate::display::{self, DisplayStyle};
use crate::types::user::Role;

/// Drive an access gate through a sequence of operations and show the
/// resulting access log.
#[derive(Args)]
pub struct GateArgs {
    /// Role the gate is created for.
    #[arg(value_enum)]
    pub role: Role,

    /// Operations to attempt, in order.
    #[arg(value_enum, required = true)]
    pub ops: Vec<GateOp>,

    /// Value stored by write operations.
    #[arg(short, long, default_value = "Updated through the gate")]
    pub value: String,

    /// Output style for the access log.
    #[arg(short, long, value_enum, default_value = "table")]
    pub style: DisplayStyle,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GateOp {
    Read,
    Write,
}

impl GateArgs {
    pub fn run(&self, _cfg: &Config) -> Result<()> {
        let mut gate: AccessGate<SecureVault> = AccessGate::new(self.role);

        for op in self.ops.iter() {
            match op {
                GateOp::Read => {
                    let data = gate.read()?;
                    println!("read: {data}");
                }
                GateOp::Write => {
                    // Denied writes are silent; the log below tells the
                    // full story either way.
                    gate.write(self.value.clone())?;
                    println!("write: done");
                }
            }
        }

        println!();
        display::display_list(gate.access_log().to_vec(), self.style)?;
        Ok(())
    }
}
