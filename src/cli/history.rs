//! Audit history CLI command

use crate::audit::AuditLogger;
use crate::error::PocketbookResult;

/// Handle `pocketbook history`, newest changes last
pub fn handle_history_command(audit: &AuditLogger, limit: usize) -> PocketbookResult<()> {
    let records = audit.read_recent(limit)?;
    if records.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for record in &records {
        println!("{}", record);
    }
    Ok(())
}
