use std::path::PathBuf;

use barmenu_core::layout::{MenuStyle, Origin, Spacing};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "barmenu")]
#[command(about = "Pick an entry from a keyboard-driven menu bar")]
#[command(version)]
#[command(after_help = "Examples:
  barmenu                               # Menu from ~/.config/barmenu/menu.toml
  barmenu --menu ./menu.toml            # Menu from a custom file
  barmenu --spacing wide --separators   # Wide gaps with '|' between options
  barmenu --row 2 --col 4 --extend      # Bar at row 2, column 4, to the right edge
  barmenu --write-menu --separators     # Save the demo menu as a starting point

Keys:
  Left/Right  move between options (wraps)
  Down/Up     open and move through sub-options
  Enter       choose, Esc cancels")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Menu file path (default: ~/.config/barmenu/menu.toml)
    #[arg(short, long, env = "BARMENU_MENU")]
    pub menu: Option<PathBuf>,

    /// Screen row of the bar
    #[arg(long)]
    pub row: Option<u16>,

    /// Screen column of the bar
    #[arg(long)]
    pub col: Option<u16>,

    /// Gap between options
    #[arg(long, value_enum)]
    pub spacing: Option<SpacingArg>,

    /// Draw '|' between options
    #[arg(long)]
    pub separators: bool,

    /// Extend the bar to the right edge of the screen
    #[arg(long)]
    pub extend: bool,

    /// Sub-options visible before the panel scrolls
    #[arg(long)]
    pub visible_rows: Option<usize>,

    /// Write the effective menu (file or demo, with flag overrides) to the
    /// menu file path and exit
    #[arg(long)]
    pub write_menu: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SpacingArg {
    Narrow,
    Default,
    Wide,
}

impl From<SpacingArg> for Spacing {
    fn from(arg: SpacingArg) -> Self {
        match arg {
            SpacingArg::Narrow => Spacing::Narrow,
            SpacingArg::Default => Spacing::Default,
            SpacingArg::Wide => Spacing::Wide,
        }
    }
}

impl Cli {
    /// Layer the command-line flags over the file's style.
    pub fn style(&self, base: MenuStyle) -> MenuStyle {
        let mut style = base;
        if let Some(spacing) = self.spacing {
            style = style.with_spacing(spacing.into());
        }
        if self.separators {
            style = style.with_separators(true);
        }
        if self.extend {
            style = style.with_extend_to_edge(true);
        }
        if let Some(rows) = self.visible_rows {
            style = style.with_visible_rows(rows);
        }
        style
    }

    pub fn origin(&self, base: Origin) -> Origin {
        Origin::new(self.row.unwrap_or(base.row), self.col.unwrap_or(base.col))
    }
}
