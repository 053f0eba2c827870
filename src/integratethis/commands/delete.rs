//! Remove a previously created integration.
//!
//! Deletion is idempotent: a missing artifact is a warning, never an error,
//! and the operation always reports success.

use std::fs;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{IntegrateError, Result};
use crate::model::IntegrationPlan;

pub fn run(plan: &IntegrationPlan) -> Result<CmdResult> {
    let shortcut_path = plan
        .shortcut_path
        .as_ref()
        .ok_or_else(|| IntegrateError::NoTarget(plan.command_name.clone()))?;

    let mut result = CmdResult::default();

    // symlink_metadata so a dangling symlink still counts as present
    if shortcut_path.symlink_metadata().is_ok() {
        fs::remove_file(shortcut_path)?;
        result.add_message(CmdMessage::info(format!(
            "The file \"{}\" has been removed.",
            shortcut_path.display()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "The file \"{}\" could not be found to be removed.",
            shortcut_path.display()
        )));
    }

    match &plan.wrapper_script_path {
        Some(script_path) if script_path.is_file() => {
            fs::remove_file(script_path)?;
            result.add_message(CmdMessage::info(format!(
                "The file \"{}\" has been removed.",
                script_path.display()
            )));
        }
        Some(script_path) => {
            result.add_message(CmdMessage::warning(format!(
                "The file \"{}\" was not there; nothing needed removal.",
                script_path.display()
            )));
        }
        None => {
            result.add_message(CmdMessage::debug(format!(
                "No wrapper script belongs to \"{}\".",
                plan.command_name
            )));
        }
    }

    Ok(result)
}
