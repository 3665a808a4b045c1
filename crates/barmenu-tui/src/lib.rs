//! # barmenu-tui
//!
//! Draws a [`barmenu_core::menu::Menu`] with ratatui and drives it from the
//! keyboard through crossterm.
//!
//! ```no_run
//! use barmenu_core::prelude::*;
//! use barmenu_tui::event::CrosstermInput;
//! use ratatui::{Terminal, backend::CrosstermBackend};
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
//! let size = terminal.size()?;
//! let spec = MenuSpec::new().option("File", ["Open", "Save"]).option("Quit", Vec::<String>::new());
//! let menu = Menu::new(&spec, MenuStyle::default(), Origin::default(), SurfaceSize::new(size.width, size.height))?;
//!
//! let outcome = barmenu_tui::run(&mut terminal, &menu, &mut CrosstermInput::new())?;
//! barmenu_tui::end(&mut terminal, menu)?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod event;
pub mod render;
pub mod styles;

pub use controller::{end, run, run_with_backdrop, show};
pub use event::{CrosstermInput, InputDevice};
