//! Keyboard navigation loop.
//!
//! The loop is single-threaded and blocking: read one key, apply it to the
//! [`NavigationState`], redraw if the cursor moved, repeat until the user
//! commits or cancels. Raw input mode is held by a [`RawModeGuard`] for the
//! whole loop and given back on every way out.

use barmenu_core::MenuError;
use barmenu_core::menu::Menu;
use barmenu_core::navigation::{NavigationState, Outcome, Step};
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect, widgets::Clear};

use crate::event::{InputDevice, RawModeGuard};
use crate::render::{draw, frame_layout};

/// Draw the menu in its initial state: first option highlighted, no panel.
pub fn show<B: Backend>(terminal: &mut Terminal<B>, menu: &Menu) -> Result<(), MenuError> {
    let state = NavigationState::new(menu).map_err(show_failed)?;
    draw_frame(terminal, menu, &state, &mut |_: &mut Frame| {}).map_err(show_failed)
}

/// Let the user pick an option with the keyboard.
pub fn run<B, D>(terminal: &mut Terminal<B>, menu: &Menu, input: &mut D) -> Result<Outcome, MenuError>
where
    B: Backend,
    D: InputDevice,
{
    run_with_backdrop(terminal, menu, input, |_: &mut Frame| {})
}

/// Like [`run`], repainting `backdrop` underneath the menu on every frame.
///
/// Closing the panel or moving off an option uncovers whatever was drawn
/// beneath it, so callers with screen content of their own pass it here.
pub fn run_with_backdrop<B, D, F>(
    terminal: &mut Terminal<B>,
    menu: &Menu,
    input: &mut D,
    mut backdrop: F,
) -> Result<Outcome, MenuError>
where
    B: Backend,
    D: InputDevice,
    F: FnMut(&mut Frame),
{
    let mut state = NavigationState::new(menu)?;
    let mut guard = RawModeGuard::acquire(input)?;

    draw_frame(terminal, menu, &state, &mut backdrop).map_err(show_failed)?;

    loop {
        let key = guard.read_key()?;
        match state.apply(key, menu) {
            Step::Moved => draw_frame(terminal, menu, &state, &mut backdrop)?,
            Step::Unchanged | Step::Ignored => {}
            Step::Finished(outcome) => {
                // Leave the bar on screen with the panel closed.
                if let Err(e) = draw_frame(terminal, menu, &state.without_panel(), &mut backdrop) {
                    log::warn!("failed to repaint menu bar: {}", e);
                }
                log::info!("menu finished: {:?}", outcome);
                return Ok(outcome);
            }
        }
    }
}

/// Clear the bar from the screen and release the menu.
pub fn end<B: Backend>(terminal: &mut Terminal<B>, menu: Menu) -> Result<(), MenuError> {
    let region = menu.bar();
    let area = screen(terminal)?;
    let bar = Rect::new(region.col, region.row, region.width, 1).intersection(area);
    terminal.draw(|frame| frame.render_widget(Clear, bar))?;
    log::debug!("menu bar cleared");
    Ok(())
}

fn draw_frame<B: Backend>(
    terminal: &mut Terminal<B>,
    menu: &Menu,
    state: &NavigationState,
    backdrop: &mut dyn FnMut(&mut Frame),
) -> Result<(), MenuError> {
    let layout = frame_layout(menu, state, screen(terminal)?)?;
    terminal.draw(|frame| {
        backdrop(frame);
        draw(frame, menu, state, &layout);
    })?;
    Ok(())
}

fn screen<B: Backend>(terminal: &Terminal<B>) -> Result<Rect, MenuError> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

fn show_failed(err: MenuError) -> MenuError {
    MenuError::ShowFailed(Box::new(err))
}
