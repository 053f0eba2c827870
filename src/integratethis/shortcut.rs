//! Shortcut creation, the one seam all platform-specific shell calls go
//! through.
//!
//! Selected once at startup: symbolic links for Unix-like shells, `.lnk`
//! shortcut objects for Windows Explorer. Symlinks on Windows require the
//! SeCreateSymbolicLinkPrivilege, so Explorer integration goes through real
//! shortcut files instead. Tests use [`RecordingWriter`], which records the
//! calls instead of touching the shell.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{IntegrateError, Result};

pub trait ShortcutWriter {
    /// Verify the OS capability backing this writer is present. Checked once
    /// at startup; absence is a `MissingDependency` error.
    fn available(&self) -> Result<()>;

    /// Create the shortcut at `shortcut` pointing at the existing `source`.
    fn create(&self, source: &Path, shortcut: &Path) -> Result<()>;
}

impl ShortcutWriter for Box<dyn ShortcutWriter> {
    fn available(&self) -> Result<()> {
        (**self).available()
    }

    fn create(&self, source: &Path, shortcut: &Path) -> Result<()> {
        (**self).create(source, shortcut)
    }
}

/// Symbolic links, as picked up by Thunar from `~/bin`.
pub struct SymlinkWriter;

impl ShortcutWriter for SymlinkWriter {
    fn available(&self) -> Result<()> {
        Ok(())
    }

    #[cfg(unix)]
    fn create(&self, source: &Path, shortcut: &Path) -> Result<()> {
        std::os::unix::fs::symlink(source, shortcut)?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn create(&self, _source: &Path, _shortcut: &Path) -> Result<()> {
        Err(IntegrateError::UnsupportedPlatform(
            "symbolic links require a Unix-like system".to_string(),
        ))
    }
}

/// Windows `.lnk` files, written through the WScript.Shell object with the
/// shortcut's working directory set to its own folder.
pub struct ExplorerShortcutWriter;

impl ShortcutWriter for ExplorerShortcutWriter {
    fn available(&self) -> Result<()> {
        which::which("powershell").map(|_| ()).map_err(|_| {
            IntegrateError::MissingDependency(
                "powershell is needed to create .lnk shortcut files".to_string(),
            )
        })
    }

    fn create(&self, source: &Path, shortcut: &Path) -> Result<()> {
        let shortcut = ensure_lnk_extension(shortcut);
        let workdir = shortcut.parent().map(Path::to_path_buf).unwrap_or_default();
        let program = format!(
            "$sh = New-Object -ComObject WScript.Shell; \
             $lnk = $sh.CreateShortcut('{}'); \
             $lnk.TargetPath = '{}'; \
             $lnk.WorkingDirectory = '{}'; \
             $lnk.Save()",
            ps_quote(&shortcut),
            ps_quote(source),
            ps_quote(&workdir),
        );
        let status = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command", &program])
            .status()?;
        if !status.success() {
            return Err(IntegrateError::Io(std::io::Error::other(format!(
                "WScript.Shell failed to create \"{}\"",
                shortcut.display()
            ))));
        }
        Ok(())
    }
}

fn ensure_lnk_extension(shortcut: &Path) -> PathBuf {
    match shortcut.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("lnk") => shortcut.to_path_buf(),
        _ => {
            let mut name = shortcut.as_os_str().to_os_string();
            name.push(".lnk");
            PathBuf::from(name)
        }
    }
}

// Single-quoted PowerShell strings only need embedded quotes doubled.
fn ps_quote(path: &Path) -> String {
    path.display().to_string().replace('\'', "''")
}

/// Records create calls and drops an empty marker file at the shortcut path
/// instead of touching the real shell.
#[derive(Default)]
pub struct RecordingWriter {
    pub created: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl ShortcutWriter for RecordingWriter {
    fn available(&self) -> Result<()> {
        Ok(())
    }

    fn create(&self, source: &Path, shortcut: &Path) -> Result<()> {
        std::fs::write(shortcut, b"")?;
        self.created
            .borrow_mut()
            .push((source.to_path_buf(), shortcut.to_path_buf()));
        Ok(())
    }
}
