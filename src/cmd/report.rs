use anyhow::Result;
use clap::Args;

use crate::academy::Academy;
use crate::config::Config;
use crate::display::{self, DisplayStyle};
use crate::report::SystemReport;
use crate::table::Table;

/// Print a summary of the platform's current in-memory state.
#[derive(Args)]
pub struct ReportArgs {
    /// Output style.
    #[arg(short, long, value_enum, default_value = "table")]
    pub style: DisplayStyle,
}

impl ReportArgs {
    pub fn run(&self, cfg: &Config) -> Result<()> {
        let academy = Academy::new(cfg)?;
        let report = SystemReport::collect(&academy)?;

        match self.style {
            DisplayStyle::Table => {
                let mut table = Table::new(vec!["Metric", "Value"]);
                for (metric, value) in report.rows() {
                    table.add(vec![metric.to_string(), value]);
                }
                table.show();
            }
            DisplayStyle::Json => display::pretty_json(&report)?,
            DisplayStyle::Csv => {
                for (metric, value) in report.rows() {
                    println!("{metric},{value}");
                }
            }
        }

        Ok(())
    }
}
