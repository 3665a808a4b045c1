//! Menu file management
//!
//! A menu can be described in a TOML file instead of code.
//! Priority: explicit path > ~/.config/barmenu/menu.toml

use super::Result;
use crate::error::{ConfigError, MenuError};
use crate::layout::{MenuStyle, Origin, SurfaceSize};
use crate::menu::Menu;
use crate::tree::MenuSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Contents of a menu file.
///
/// ```toml
/// [style]
/// spacing = "narrow"
/// separators = true
///
/// [origin]
/// row = 1
///
/// [[option]]
/// label = "File"
/// shortcut = "F"
/// subs = ["Open", { label = "Save", shortcut = "S" }]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MenuFile {
    pub style: MenuStyle,
    pub origin: Origin,
    #[serde(rename = "option")]
    pub options: Vec<OptionEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OptionEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<char>,
    #[serde(default)]
    pub subs: Vec<SubEntry>,
}

/// A sub-option, written either as a bare label or as a table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SubEntry {
    Label(String),
    Detailed {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shortcut: Option<char>,
    },
}

impl SubEntry {
    pub fn label(&self) -> &str {
        match self {
            SubEntry::Label(label) => label,
            SubEntry::Detailed { label, .. } => label,
        }
    }

    pub fn shortcut(&self) -> Option<char> {
        match self {
            SubEntry::Label(_) => None,
            SubEntry::Detailed { shortcut, .. } => *shortcut,
        }
    }
}

impl MenuFile {
    /// Load a menu file. A missing file yields an empty `MenuFile`.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let menu_path = match path {
            Some(p) => p,
            None => Self::menu_file_path()?,
        };

        if !menu_path.exists() {
            log::debug!("no menu file at {}", menu_path.display());
            return Ok(MenuFile::default());
        }

        let content = fs::read_to_string(&menu_path).map_err(|source| ConfigError::FileIo {
            path: menu_path.to_string_lossy().to_string(),
            source,
        })?;

        let file: MenuFile = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            message: format!("Failed to parse menu file: {}", e),
        })?;

        log::info!(
            "loaded {} options from {}",
            file.options.len(),
            menu_path.display()
        );
        Ok(file)
    }

    /// Save the menu file, creating parent directories as needed.
    /// Returns the path written.
    pub fn save(&self, path: Option<PathBuf>) -> Result<PathBuf> {
        let menu_path = match path {
            Some(p) => p,
            None => Self::menu_file_path()?,
        };

        if let Some(parent) = menu_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| ConfigError::Parse {
            message: format!("Failed to serialize menu file: {}", e),
        })?;

        fs::write(&menu_path, toml_content).map_err(|source| ConfigError::FileIo {
            path: menu_path.to_string_lossy().to_string(),
            source,
        })?;

        log::info!("saved menu file to {}", menu_path.display());
        Ok(menu_path)
    }

    pub fn menu_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        Ok(home_dir.join(".config").join("barmenu").join("menu.toml"))
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn to_spec(&self) -> MenuSpec {
        self.options.iter().fold(MenuSpec::new(), |spec, entry| {
            spec.option(entry.label.clone(), entry.subs.iter().map(SubEntry::label))
        })
    }

    /// Construct the described menu on a surface of size `surface` and
    /// assign its shortcuts. Rejected shortcuts are skipped with a warning.
    pub fn build(&self, surface: SurfaceSize) -> std::result::Result<Menu, MenuError> {
        let mut menu = Menu::new(&self.to_spec(), self.style, self.origin, surface)?;

        for (i, entry) in self.options.iter().enumerate() {
            if let Some(ch) = entry.shortcut {
                if menu.assign_shortcut(i, None, ch).is_none() {
                    log::warn!("shortcut {:?} for {:?} rejected", ch, entry.label);
                }
            }
            for (j, sub) in entry.subs.iter().enumerate() {
                let Some(ch) = sub.shortcut() else { continue };
                if menu.assign_shortcut(i, Some(j), ch).is_none() {
                    log::warn!(
                        "shortcut {:?} for {:?} > {:?} rejected",
                        ch,
                        entry.label,
                        sub.label()
                    );
                }
            }
        }

        Ok(menu)
    }
}
