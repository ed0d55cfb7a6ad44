//! List command implementation.
//!
//! This module implements the `list` command, which displays the catalog
//! entries of one or all systems in various formats (table, JSON, CSV).

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_system, select_systems, shorten_path, GlobalOptions};
use clap::{Args, ValueEnum};
use gamelist::{EntryKind, KindFilter, System};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 4] = ["system", "kind", "path", "name"];

/// List catalog entries.
#[derive(Args)]
pub struct ListCommand {
    /// Only list this system
    #[arg(long, value_name = "NAME")]
    pub system: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "GAMELIST_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only list games
    #[arg(long)]
    pub games_only: bool,

    /// Show full paths instead of shortened forms
    #[arg(long)]
    pub show_full_paths: bool,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// One listed entry.
#[derive(Serialize)]
struct Row {
    system: String,
    kind: EntryKind,
    path: PathBuf,
    name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;
        let settings = config.gamelist_settings();

        // 2. Scan and load the selected systems
        let filter = if self.games_only {
            KindFilter::Games
        } else {
            KindFilter::All
        };
        let mut rows = Vec::new();
        for mut system in select_systems(global, &config, self.system.as_deref())? {
            prepare_system(&mut system, &settings)?;
            rows.extend(collect_rows(&system, filter));
        }

        // 3. Format and output to stdout
        match self.format {
            OutputFormat::Table => format_as_table(&rows, self.show_full_paths)?,
            OutputFormat::Json => format_as_json(&rows)?,
            OutputFormat::Csv => format_as_csv(&rows)?,
        }

        Ok(())
    }
}

fn collect_rows(system: &System, filter: KindFilter) -> Vec<Row> {
    let catalog = system.catalog();
    catalog
        .descendants(catalog.root(), filter)
        .into_iter()
        .map(|id| {
            let entry = catalog.get(id);
            let metadata = entry
                .metadata()
                .iter()
                .filter(|(key, _)| *key != "name" && !entry.metadata().is_default(key))
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
            Row {
                system: system.name().to_string(),
                kind: entry.kind(),
                path: entry.path().to_path_buf(),
                name: entry.metadata().name().to_string(),
                metadata,
            }
        })
        .collect()
}

/// Format entries as a human-readable table.
fn format_as_table(rows: &[Row], show_full: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        let path_str = if show_full {
            row.path.display().to_string()
        } else {
            shorten_path(&row.path)
        };
        let name = if row.name.is_empty() { "-" } else { row.name.as_str() };

        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            row.system, row.kind, path_str, name
        )?;
    }

    Ok(())
}

/// Format entries as JSON.
fn format_as_json(rows: &[Row]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, rows)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Format entries as CSV.
fn format_as_csv(rows: &[Row]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new().from_writer(handle);

    writer
        .write_record(COLUMN_HEADERS)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    for row in rows {
        let path = row.path.display().to_string();
        writer
            .write_record([
                row.system.as_str(),
                row.kind.tag(),
                path.as_str(),
                row.name.as_str(),
            ])
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    }

    writer.flush()?;
    Ok(())
}
