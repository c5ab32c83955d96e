//! Export CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{PocketbookError, PocketbookResult};
use crate::export::export_entries_csv;
use crate::storage::Store;

use super::FilterArgs;

/// Handle `pocketbook export`, writing the (filtered) entries as CSV
pub fn handle_export_command(
    store: &Store,
    output: &Path,
    filters: &FilterArgs,
) -> PocketbookResult<()> {
    let filter = filters.to_filter()?;
    let entries = filter.apply(store.entries());

    let file = File::create(output).map_err(|e| {
        PocketbookError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let rows = export_entries_csv(entries, BufWriter::new(file))?;

    log::info!("Exported {} entries to {}", rows, output.display());
    println!("Exported {} entries to {}", rows, output.display());
    Ok(())
}
