//! Error types for barmenu.
//!
//! Every fallible operation returns its own `Result`; there is no shared
//! error state. Callers that want the old "accumulate, then print" workflow
//! can collect failures into an [`ErrorReport`].

use std::fmt::Write as _;
use std::io;

use thiserror::Error;

use crate::tree::{MAX_OPTIONS, MAX_SUBS};

/// Top-level error of the `barmenu` binary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Building or driving the menu failed.
    #[error("MenuError: {0}")]
    Menu(#[from] MenuError),
    /// Reading or writing the menu file failed.
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
}

/// Failures raised while building, showing or driving a menu.
#[derive(Error, Debug)]
pub enum MenuError {
    /// The bar or panel region does not fit the surface.
    #[error("Could not allocate {surface} surface")]
    AllocationFailed { surface: &'static str },
    /// More than [`MAX_OPTIONS`] options.
    #[error("Too many options. Maximum is {max}")]
    TooManyOptions { max: usize },
    /// More than [`MAX_SUBS`] sub-options under one option.
    #[error("Too many sub menus under option {option}. Maximum is {max}")]
    TooManySubOptions { option: usize, max: usize },
    /// The laid-out bar is wider than the space right of the origin.
    #[error("Menu width {required} greater than available width {available}")]
    MenuTooWide { required: usize, available: usize },
    /// The initial draw failed.
    #[error("Could not display menu: {0}")]
    ShowFailed(#[source] Box<MenuError>),
    /// Raw input mode could not be entered.
    #[error("Could not change terminal input mode: {0}")]
    InputModeChangeFailed(#[source] io::Error),
    /// The menu has no options to navigate.
    #[error("Menu has no options to navigate")]
    EmptyMenu,
    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl MenuError {
    /// Payload-free classification, for [`ErrorReport`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            MenuError::AllocationFailed { .. } => ErrorKind::AllocationFailed,
            MenuError::TooManyOptions { .. } => ErrorKind::TooManyOptions,
            MenuError::TooManySubOptions { .. } => ErrorKind::TooManySubOptions,
            MenuError::MenuTooWide { .. } => ErrorKind::MenuTooWide,
            MenuError::ShowFailed(_) => ErrorKind::ShowFailed,
            MenuError::InputModeChangeFailed(_) => ErrorKind::InputModeChangeFailed,
            MenuError::EmptyMenu => ErrorKind::EmptyMenu,
            MenuError::Terminal(_) => ErrorKind::Terminal,
        }
    }
}

/// Menu file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading, writing or creating a directory failed.
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    /// The file is not a valid menu description.
    #[error("Menu file parse error: {message}")]
    Parse { message: String },
    /// No home directory to resolve the default path.
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

/// Payload-free classification of a [`MenuError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    MenuTooWide,
    AllocationFailed,
    TooManyOptions,
    TooManySubOptions,
    ShowFailed,
    InputModeChangeFailed,
    EmptyMenu,
    Terminal,
}

impl ErrorKind {
    /// One-line human description used by [`ErrorReport::report`].
    pub fn describe(self) -> String {
        match self {
            ErrorKind::MenuTooWide => "Menu width greater than screen width".to_string(),
            ErrorKind::AllocationFailed => "Could not allocate menu surface".to_string(),
            ErrorKind::TooManyOptions => format!("Too many options. Maximum is {}", MAX_OPTIONS),
            ErrorKind::TooManySubOptions => {
                format!("Too many sub menus. Maximum is {}", MAX_SUBS)
            }
            ErrorKind::ShowFailed => "Could not display menu".to_string(),
            ErrorKind::InputModeChangeFailed => {
                "Problem changing terminal input mode".to_string()
            }
            ErrorKind::EmptyMenu => "Menu has no options".to_string(),
            ErrorKind::Terminal => "Terminal I/O failed".to_string(),
        }
    }
}

/// Caller-owned collection of error kinds seen during a session.
///
/// Each kind is kept once, in a stable order, mirroring a flag word.
#[derive(Debug, Default, Clone)]
pub struct ErrorReport {
    kinds: Vec<ErrorKind>,
}

impl ErrorReport {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the kind of `err`. Recording the same kind twice is a no-op.
    pub fn record(&mut self, err: &MenuError) {
        let kind = err.kind();
        if let Err(pos) = self.kinds.binary_search(&kind) {
            self.kinds.insert(pos, kind);
        }
        // A failed show also reports what made it fail.
        if let MenuError::ShowFailed(inner) = err {
            self.record(inner);
        }
    }

    /// Recorded kinds in [`ErrorKind`] order.
    pub fn kinds(&self) -> &[ErrorKind] {
        &self.kinds
    }

    /// Whether nothing has been recorded since the last clear.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Whether `kind` has been recorded.
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.kinds.binary_search(&kind).is_ok()
    }

    /// Format every recorded kind under `prefix`, one per line, and clear
    /// the report. Returns `None` when nothing was recorded.
    pub fn report(&mut self, prefix: &str) -> Option<String> {
        if self.kinds.is_empty() {
            return None;
        }

        let mut out = format!("{}: ", prefix);
        for kind in &self.kinds {
            let _ = writeln!(out, "{}", kind.describe());
        }
        self.clear();
        Some(out)
    }

    /// Forget every recorded kind.
    pub fn clear(&mut self) {
        self.kinds.clear();
    }
}
