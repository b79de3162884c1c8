//! Activity history command

use crate::config::Settings;
use crate::error::EduEasyResult;
use crate::storage::Storage;

pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    limit: usize,
) -> EduEasyResult<()> {
    let entries = storage.audit().recent(limit)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.render(settings.currency));
    }
    Ok(())
}
