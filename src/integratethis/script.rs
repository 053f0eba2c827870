//! Wrapper script rendering.
//!
//! The wrapper is what the shortcut actually invokes when the plan carries
//! parameters. The Windows batch variant first changes to the drive and
//! directory of the first selected file, so relative output of the wrapped
//! command lands next to the files. The Unix variant has no such line; the
//! file manager already spawns custom actions in the right directory.

use std::path::Path;

use crate::model::Target;

/// Render the wrapper script contents. The result is written as UTF-8 so
/// non-ASCII display names and paths survive.
pub fn render(target: Target, command_path: &Path, parameters: &str, confirm: bool) -> String {
    match target {
        Target::WindowsExplorer => render_batch(command_path, parameters, confirm),
        Target::Thunar => render_sh(command_path, parameters, confirm),
    }
}

fn render_batch(command_path: &Path, parameters: &str, confirm: bool) -> String {
    let mut script = String::from(
        "@ECHO OFF\n\
         REM change drive, e.g., D:\n\
         %~d1\n\
         REM change directory, e.g., D:\\data processing\\subdir\\\n\
         cd %~dp1\n\n\n",
    );
    script.push_str(&format!("{} {}\n\n", command_path.display(), parameters));
    if confirm {
        script.push_str("set /p DUMMY=Hit ENTER to continue...\n\n");
    } else {
        script.push_str("REM set /p DUMMY=Hit ENTER to continue...\n\n");
    }
    script
}

fn render_sh(command_path: &Path, parameters: &str, confirm: bool) -> String {
    let mut script = String::from("#!/bin/sh\n");
    script.push_str(&format!("{} {}\n", command_path.display(), parameters));
    if confirm {
        script.push_str("printf 'Hit ENTER to continue...'\nread DUMMY\n");
    }
    script
}
