//! # barmenu-core
//!
//! Terminal-independent core of a text-mode menu bar.
//!
//! This crate holds everything about a menu that can be computed without a
//! terminal: the option tree, column layout, shortcut bookkeeping, the
//! navigation state machine and the scroll policy of the sub-option panel.
//! `barmenu-tui` draws it with ratatui and drives it from the keyboard.
//!
//! ## Quick Start
//!
//! ```rust
//! use barmenu_core::prelude::*;
//!
//! let spec = MenuSpec::new()
//!     .option("File", ["Open", "Save", "Exit"])
//!     .option("Edit", Vec::<String>::new());
//! let mut menu = Menu::new(&spec, MenuStyle::default(), Origin::default(), SurfaceSize::new(80, 24))?;
//! assert_eq!(menu.assign_shortcut(0, None, 'F'), Some('F'));
//!
//! let mut state = NavigationState::new(&menu)?;
//! state.apply(Key::Right, &menu);
//! assert_eq!(
//!     state.apply(Key::Enter, &menu),
//!     Step::Finished(Outcome::Committed(Selection { top: 1, sub: None }))
//! );
//! # Ok::<(), barmenu_core::MenuError>(())
//! ```
//!
//! ## Data flow
//!
//! ```text
//! MenuSpec ──► OptionTree ──► Layout ──► Menu ──► renderer (every frame)
//!                                          ▲
//!                         NavigationState ─┘ (every key)
//! ```

pub use error::{AppError, ConfigError, ErrorKind, ErrorReport, MenuError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::{ErrorReport, MenuError};
    pub use crate::layout::{MenuStyle, Origin, Spacing, SurfaceSize};
    pub use crate::menu::Menu;
    pub use crate::navigation::{Key, NavigationState, Outcome, Selection, Step};
    pub use crate::storage::config::MenuFile;
    pub use crate::tree::MenuSpec;
}

/// Error types and the caller-owned [`ErrorReport`].
pub mod error;

/// Column geometry and style configuration.
pub mod layout;

/// The [`menu::Menu`] handle.
pub mod menu;

/// Key-driven cursor over options and sub-options.
pub mod navigation;

/// Scroll window of the sub-option panel.
pub mod scroll;

/// Shortcut assignment on [`menu::Menu`].
pub mod shortcut;

/// Menu files on disk.
pub mod storage;

/// Option tree and the declarative [`tree::MenuSpec`].
pub mod tree;

/// Text measuring helpers.
pub mod utils;

/// Convenient Result type alias using [`MenuError`].
pub type Result<T> = std::result::Result<T, MenuError>;
