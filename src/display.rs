use std::collections::HashMap;

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::table::Table;

/// Display style options for output formatting
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DisplayStyle {
    /// Display data in a formatted table
    Table,
    /// Display data in JSON format
    Json,
    /// Display data in CSV format
    Csv,
}

/// Trait for types that can be displayed in terminal with different formats
pub trait TerminalDisplay {
    /// Returns the column titles for table display
    fn table_titles() -> Vec<&'static str>;
    /// Converts the instance into a row of strings for table display
    fn table_row(self) -> Vec<String>;

    /// Returns the column titles for CSV display
    fn csv_titles() -> Vec<&'static str>;
    /// Converts the instance into a map of field name to value for CSV display
    fn csv_row(self) -> HashMap<&'static str, String>;
}

pub fn pretty_json<T: Serialize>(o: T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&o)?);
    Ok(())
}

pub fn display_list<T>(items: Vec<T>, style: DisplayStyle) -> Result<()>
where
    T: Serialize + TerminalDisplay,
{
    match style {
        DisplayStyle::Table => {
            if items.is_empty() {
                println!("<empty list>");
                return Ok(());
            }
            let mut table = Table::new(T::table_titles());
            for item in items {
                table.add(item.table_row());
            }
            table.show();
        }
        DisplayStyle::Csv => {
            let titles = T::csv_titles();
            println!("{}", titles.join(","));
            for item in items {
                let mut row = item.csv_row();
                let mut values = Vec::with_capacity(titles.len());
                for title in titles.iter() {
                    match row.remove(*title) {
                        Some(value) => values.push(value),
                        None => bail!("missing csv column '{title}'"),
                    }
                }
                println!("{}", values.join(","));
            }
        }
        DisplayStyle::Json => pretty_json(items)?,
    }
    Ok(())
}
