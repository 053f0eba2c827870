//! Create the wrapper script and shortcut for a plan.
//!
//! All existence preconditions are checked before either artifact is
//! written, so a conflict on the shortcut cannot leave a freshly written
//! wrapper script behind.

use std::fs;
use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{IntegrateError, Result};
use crate::model::{IntegrationPlan, Target};
use crate::script;
use crate::shortcut::ShortcutWriter;

pub fn run<W: ShortcutWriter>(
    writer: &W,
    plan: &IntegrationPlan,
    overwrite: bool,
    confirm: bool,
) -> Result<CmdResult> {
    let target = plan
        .target
        .ok_or_else(|| IntegrateError::NoTarget(plan.command_name.clone()))?;
    let shortcut_path = plan
        .shortcut_path
        .as_ref()
        .ok_or_else(|| IntegrateError::NoTarget(plan.command_name.clone()))?;

    if !plan.resolved_path.is_file() {
        return Err(IntegrateError::CommandNotFound(plan.command_name.clone()));
    }

    let mut result = CmdResult::default();

    let mut stale = Vec::new();
    for path in plan.wrapper_script_path.iter().chain(Some(shortcut_path)) {
        if path.symlink_metadata().is_ok() {
            if !overwrite {
                return Err(IntegrateError::ArtifactConflict(path.clone()));
            }
            stale.push(path.clone());
        }
    }
    for path in stale {
        result.add_message(CmdMessage::warning(format!(
            "Deleting \"{}\" before it gets re-generated.",
            path.display()
        )));
        fs::remove_file(&path)?;
    }

    if let Some(script_path) = &plan.wrapper_script_path {
        let parameters = plan.parameters.as_deref().unwrap_or_default();
        let content = script::render(target, &plan.resolved_path, parameters, confirm);
        if let Some(parent) = script_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(script_path, content)?;
        make_executable(script_path, target)?;
        result.add_message(CmdMessage::debug(format!(
            "Wrote wrapper script \"{}\".",
            script_path.display()
        )));
    }

    if let Some(parent) = shortcut_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let source = plan
        .wrapper_script_path
        .as_deref()
        .unwrap_or(&plan.resolved_path);
    writer.create(source, shortcut_path)?;
    result.add_message(CmdMessage::debug(format!(
        "Created shortcut \"{}\".",
        shortcut_path.display()
    )));

    let parameter_info = plan
        .parameters
        .as_ref()
        .map(|p| format!(" with parameters \"{p}\""))
        .unwrap_or_default();
    let displayname_info = plan
        .display_name
        .as_ref()
        .map(|d| format!(" as \"{d}\""))
        .unwrap_or_default();
    result.add_message(CmdMessage::success(format!(
        "Everything went fine, you can now use {}{}{} within {}.",
        plan.resolved_path.display(),
        parameter_info,
        displayname_info,
        target
    )));

    Ok(result)
}

// The shortcut invokes the script directly, so the Unix variant has to carry
// the execute bit. Batch files need no mode change.
#[cfg(unix)]
fn make_executable(path: &Path, target: Target) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if target == Target::Thunar {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path, _target: Target) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Overrides;
    use crate::paths::ArtifactDirs;
    use crate::plan;
    use crate::presets::{self, Preset};
    use crate::shortcut::RecordingWriter;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        dirs: ArtifactDirs,
        resolved: PathBuf,
    }

    fn fixture() -> Fixture {
        let temp = TempDir::new().unwrap();
        let resolved = temp.path().join("filetags.exe");
        fs::write(&resolved, "").unwrap();
        let dirs = ArtifactDirs {
            script_dir: temp.path().join("scripts"),
            shortcut_dir: temp.path().join("sendto"),
        };
        Fixture {
            _temp: temp,
            dirs,
            resolved,
        }
    }

    fn filetags_plan(fx: &Fixture) -> IntegrationPlan {
        let preset = presets::lookup("filetags", crate::model::Platform::Windows);
        plan::build(
            "filetags",
            fx.resolved.clone(),
            &preset,
            &Overrides::default(),
            &fx.dirs,
        )
    }

    #[test]
    fn creates_wrapper_and_shortcut_pointing_at_it() {
        let fx = fixture();
        let plan = filetags_plan(&fx);
        let writer = RecordingWriter::default();

        run(&writer, &plan, false, false).unwrap();

        let script_path = fx.dirs.script_dir.join("filetags.bat");
        let content = fs::read_to_string(&script_path).unwrap();
        assert!(content.contains(&format!("{} --interactive %*", fx.resolved.display())));

        let created = writer.created.borrow();
        assert_eq!(
            created[0],
            (script_path, fx.dirs.shortcut_dir.join("filetags.lnk"))
        );
    }

    #[test]
    fn without_parameters_shortcut_targets_the_executable() {
        let fx = fixture();
        let preset = Preset::default();
        let overrides = Overrides {
            target: Some(Target::WindowsExplorer),
            ..Overrides::default()
        };
        let plan = plan::build("sometool", fx.resolved.clone(), &preset, &overrides, &fx.dirs);
        let writer = RecordingWriter::default();

        run(&writer, &plan, false, false).unwrap();

        assert!(!fx.dirs.script_dir.join("sometool.bat").exists());
        let created = writer.created.borrow();
        assert_eq!(
            created[0],
            (fx.resolved.clone(), fx.dirs.shortcut_dir.join("sometool.lnk"))
        );
    }

    #[test]
    fn second_run_without_overwrite_conflicts() {
        let fx = fixture();
        let plan = filetags_plan(&fx);
        let writer = RecordingWriter::default();

        run(&writer, &plan, false, false).unwrap();
        let err = run(&writer, &plan, false, false).unwrap_err();

        assert!(matches!(err, IntegrateError::ArtifactConflict(_)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn overwrite_replaces_and_leaves_identical_content() {
        let fx = fixture();
        let plan = filetags_plan(&fx);
        let writer = RecordingWriter::default();
        let script_path = fx.dirs.script_dir.join("filetags.bat");

        run(&writer, &plan, false, false).unwrap();
        let first = fs::read_to_string(&script_path).unwrap();

        let result = run(&writer, &plan, true, false).unwrap();
        let second = fs::read_to_string(&script_path).unwrap();

        assert_eq!(first, second);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn conflict_on_shortcut_leaves_no_wrapper_behind() {
        let fx = fixture();
        let plan = filetags_plan(&fx);
        let writer = RecordingWriter::default();

        let shortcut_path = fx.dirs.shortcut_dir.join("filetags.lnk");
        fs::create_dir_all(&fx.dirs.shortcut_dir).unwrap();
        fs::write(&shortcut_path, "").unwrap();

        let err = run(&writer, &plan, false, false).unwrap_err();
        assert!(matches!(err, IntegrateError::ArtifactConflict(_)));
        assert!(!fx.dirs.script_dir.join("filetags.bat").exists());
    }

    #[test]
    fn missing_target_fails_before_touching_anything() {
        let fx = fixture();
        let preset = presets::lookup("unknownTool", crate::model::Platform::Windows);
        let plan = plan::build(
            "unknownTool",
            fx.resolved.clone(),
            &preset,
            &Overrides::default(),
            &fx.dirs,
        );
        let writer = RecordingWriter::default();

        let err = run(&writer, &plan, false, false).unwrap_err();
        assert!(matches!(err, IntegrateError::NoTarget(_)));
        assert_eq!(err.exit_code(), 998);
        assert!(err.to_string().contains("\"unknownTool\""));
        assert!(writer.created.borrow().is_empty());
    }

    #[test]
    fn missing_executable_is_command_not_found() {
        let fx = fixture();
        let mut plan = filetags_plan(&fx);
        plan.resolved_path = fx.dirs.script_dir.join("gone.exe");
        let writer = RecordingWriter::default();

        let err = run(&writer, &plan, false, false).unwrap_err();
        assert!(matches!(err, IntegrateError::CommandNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn unix_wrapper_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let fx = fixture();
        let preset = presets::lookup("filetags", crate::model::Platform::Unix);
        let plan = plan::build(
            "filetags",
            fx.resolved.clone(),
            &preset,
            &Overrides::default(),
            &fx.dirs,
        );
        let writer = RecordingWriter::default();

        run(&writer, &plan, false, false).unwrap();

        let script_path = fx.dirs.script_dir.join("filetags.sh");
        let mode = fs::metadata(&script_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
