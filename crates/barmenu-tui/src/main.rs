//! barmenu - pick an entry from a keyboard-driven menu bar.
//!
//! Prints the chosen path (`File > Open`) or `cancelled` on stdout.

use std::io::{self, Stdout, stdout};
use std::process::ExitCode;

use barmenu_core::layout::SurfaceSize;
use barmenu_core::menu::Menu;
use barmenu_core::navigation::{Outcome, Selection};
use barmenu_core::storage::config::{MenuFile, OptionEntry, SubEntry};
use barmenu_core::{AppError, ConfigError, ErrorReport, MenuError};
use barmenu_tui::CrosstermInput;
use clap::Parser;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    match run_app(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(AppError::Menu(err)) => {
            let mut report = ErrorReport::new();
            report.record(&err);
            if let Some(text) = report.report("barmenu") {
                eprint!("{}", text);
            }
            log::debug!("menu error: {:?}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_app(cli: &Cli) -> Result<String, AppError> {
    let file = effective_menu(cli)?;
    if cli.write_menu {
        let path = file.save(cli.menu.clone())?;
        return Ok(format!("wrote {}", path.display()));
    }

    let mut terminal = setup_terminal()?;

    // Set panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = select(&mut terminal, &file);
    restore_terminal().map_err(MenuError::from)?;
    Ok(result?)
}

/// Menu file from disk (or the demo menu when it has no options) with the
/// command-line overrides applied.
fn effective_menu(cli: &Cli) -> Result<MenuFile, ConfigError> {
    let mut file = MenuFile::load(cli.menu.clone())?;
    if file.is_empty() {
        log::info!("menu file has no options, using the demo menu");
        file.options = demo_options();
    }
    file.style = cli.style(file.style);
    file.origin = cli.origin(file.origin);
    Ok(file)
}

fn select(terminal: &mut Terminal<CrosstermBackend<Stdout>>, file: &MenuFile) -> Result<String, MenuError> {
    let size = terminal.size()?;
    let menu = file.build(SurfaceSize::new(size.width, size.height))?;

    let outcome = barmenu_tui::run(terminal, &menu, &mut CrosstermInput::new())?;
    let line = describe(&menu, outcome);
    barmenu_tui::end(terminal, menu)?;
    Ok(line)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, MenuError> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore terminal to normal state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// Human-readable path of the chosen entry.
fn describe(menu: &Menu, outcome: Outcome) -> String {
    let Some(Selection { top, sub }) = outcome.selection() else {
        return "cancelled".to_string();
    };
    menu.options()
        .get(top)
        .map(|option| match sub.and_then(|i| option.subs().get(i)) {
            Some(entry) => format!("{} > {}", option.label(), entry.label()),
            None => option.label().to_string(),
        })
        .unwrap_or_else(|| "cancelled".to_string())
}

fn demo_options() -> Vec<OptionEntry> {
    let entry = |label: &str, shortcut: char, subs: &[(&str, Option<char>)]| OptionEntry {
        label: label.to_string(),
        shortcut: Some(shortcut),
        subs: subs
            .iter()
            .map(|(label, shortcut)| SubEntry::Detailed {
                label: label.to_string(),
                shortcut: *shortcut,
            })
            .collect(),
    };

    vec![
        entry(
            "File",
            'F',
            &[
                ("Open", Some('O')),
                ("Save", Some('S')),
                ("Save As", Some('A')),
                ("Close", Some('C')),
                ("Exit", Some('x')),
            ],
        ),
        entry(
            "Edit",
            'E',
            &[("Undo", Some('U')), ("Redo", Some('R')), ("Cut", Some('t')), ("Copy", Some('C')), ("Paste", Some('P'))],
        ),
        entry(
            "View",
            'V',
            &[
                ("Zoom 25%", None),
                ("Zoom 50%", None),
                ("Zoom 75%", None),
                ("Zoom 100%", None),
                ("Zoom 125%", None),
                ("Zoom 150%", None),
                ("Zoom 200%", None),
                ("Zoom 300%", None),
                ("Zoom 400%", None),
                ("Fit Width", Some('W')),
                ("Fit Page", Some('P')),
                ("Full Screen", Some('F')),
            ],
        ),
        entry("Quit", 'Q', &[]),
    ]
}
