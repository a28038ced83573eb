//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export, ExportFormat};
use crate::ledger::Ledger;

/// Arguments for `export`
#[derive(Args)]
pub struct ExportArgs {
    /// Output format: csv, json or yaml
    #[arg(short, long, default_value = "csv")]
    pub format: String,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(ledger: &Ledger, args: ExportArgs) -> LedgerResult<()> {
    let format: ExportFormat = args.format.parse()?;

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export(ledger.store(), format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
            println!(
                "Exported {} expenses to {} ({})",
                ledger.store().len(),
                path.display(),
                format
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export(ledger.store(), format, &mut handle)?;
        }
    }

    Ok(())
}
