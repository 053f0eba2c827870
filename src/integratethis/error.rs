use std::path::PathBuf;
use thiserror::Error;

/// All fatal conditions the tool can hit.
///
/// Every variant maps to a stable process exit code via [`IntegrateError::exit_code`]:
///
/// | code | condition                                        |
/// |------|--------------------------------------------------|
/// | 1    | IO error                                         |
/// | 2    | required OS-integration capability is missing    |
/// | 4    | artifact already exists and `--overwrite` not set|
/// | 5    | command not found in PATH                        |
/// | 998  | integration target unknown or not determinable   |
/// | 999  | platform not supported                           |
#[derive(Error, Debug)]
pub enum IntegrateError {
    #[error("required capability is not available: {0}")]
    MissingDependency(String),

    #[error("this system is not supported: {0}")]
    UnsupportedPlatform(String),

    #[error("could not find any command \"{0}\" in the path of the current environment")]
    CommandNotFound(String),

    #[error("the file \"{}\" already exists (from a prior run?); remove it manually and re-run, or pass --overwrite", .0.display())]
    ArtifactConflict(PathBuf),

    #[error("integration into \"{0}\" is not supported on this system")]
    UnsupportedTarget(String),

    #[error("no integration target is known for \"{0}\"; pass --into to pick one")]
    NoTarget(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntegrateError {
    pub fn exit_code(&self) -> i32 {
        match self {
            IntegrateError::Io(_) => 1,
            IntegrateError::MissingDependency(_) => 2,
            IntegrateError::ArtifactConflict(_) => 4,
            IntegrateError::CommandNotFound(_) => 5,
            IntegrateError::UnsupportedTarget(_) | IntegrateError::NoTarget(_) => 998,
            IntegrateError::UnsupportedPlatform(_) => 999,
        }
    }
}

pub type Result<T> = std::result::Result<T, IntegrateError>;
