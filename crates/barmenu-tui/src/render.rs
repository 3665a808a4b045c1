//! Menu rendering.
//!
//! The bar is painted on every frame. When a sub-option is highlighted a
//! bordered panel opens under the highlighted option and shows a window of
//! its sub-options, scrolled according to the navigation state.
//!
//! Geometry is resolved by [`frame_layout`] before anything is drawn, so a
//! menu or panel that does not fit the frame fails without leaving half a
//! frame behind.

use barmenu_core::MenuError;
use barmenu_core::layout::Layout;
use barmenu_core::menu::Menu;
use barmenu_core::navigation::NavigationState;
use barmenu_core::tree::MAX_LABEL_LEN;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::styles::{SEPARATOR, label_style};

/// Interior width of the sub-option panel.
pub const PANEL_WIDTH: u16 = MAX_LABEL_LEN as u16 + 1;

/// Resolved screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub bar: Rect,
    /// Screen column where the highlighted option starts.
    pub anchor: u16,
    /// Panel including its border, when a sub-level is active.
    pub panel: Option<Rect>,
}

/// Work out where the bar and panel go inside `area`.
pub fn frame_layout(
    menu: &Menu,
    state: &NavigationState,
    area: Rect,
) -> Result<FrameLayout, MenuError> {
    let region = menu.bar();
    let bar = Rect::new(region.col, region.row, region.width, 1);
    if !fits(bar, area) {
        return Err(MenuError::AllocationFailed {
            surface: "menu bar",
        });
    }

    let top = state.top_index();
    let anchor = menu
        .option_column(top)
        .ok_or(MenuError::AllocationFailed {
            surface: "menu bar",
        })?;

    let panel = match state.sub_index() {
        Some(_) if menu.tree().sub_count(top) > 0 => {
            let rows = u16::try_from(state.viewport().height()).unwrap_or(u16::MAX);
            let rect = Rect::new(
                anchor,
                region.row.saturating_add(1),
                PANEL_WIDTH + 2,
                rows.saturating_add(2),
            );
            if !fits(rect, area) {
                return Err(MenuError::AllocationFailed {
                    surface: "submenu panel",
                });
            }
            Some(rect)
        }
        _ => None,
    };

    Ok(FrameLayout { bar, anchor, panel })
}

/// Render the menu for `state` and return the highlighted option's column.
pub fn render(frame: &mut Frame, menu: &Menu, state: &NavigationState) -> Result<u16, MenuError> {
    let layout = frame_layout(menu, state, frame.area())?;
    draw(frame, menu, state, &layout);
    Ok(layout.anchor)
}

/// Draw an already validated frame layout.
pub fn draw(frame: &mut Frame, menu: &Menu, state: &NavigationState, layout: &FrameLayout) {
    frame.render_widget(Clear, layout.bar);
    frame.render_widget(Paragraph::new(bar_line(menu, state.top_index())), layout.bar);

    if let Some(panel) = layout.panel {
        draw_panel(frame, menu, state, panel);
    }
}

/// The bar as a single line of spans.
pub fn bar_line(menu: &Menu, highlighted: usize) -> Line<'_> {
    let gap = gap_text(menu.layout());
    let last = menu.len().saturating_sub(1);

    let mut spans = Vec::with_capacity(menu.len() * 4);
    for (i, option) in menu.options().iter().enumerate() {
        spans.extend(label_spans(option.label(), option.shortcut(), i == highlighted));
        if i < last {
            spans.push(Span::raw(gap.clone()));
        }
    }
    Line::from(spans)
}

fn draw_panel(frame: &mut Frame, menu: &Menu, state: &NavigationState, panel: Rect) {
    let Some(option) = menu.options().get(state.top_index()) else {
        return;
    };

    // Only the window of the full sub-option list is turned into lines.
    let window = state.viewport().visible_range();
    let lines: Vec<Line> = option
        .subs()
        .iter()
        .enumerate()
        .take(window.end)
        .skip(window.start)
        .map(|(i, sub)| Line::from(label_spans(sub.label(), sub.shortcut(), state.sub_index() == Some(i))))
        .collect();

    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        panel,
    );
}

/// Spans for one label: every occurrence of the shortcut letter
/// emphasised, the whole label reversed when highlighted.
fn label_spans(label: &str, shortcut: Option<char>, highlighted: bool) -> Vec<Span<'_>> {
    let Some(ch) = shortcut else {
        return vec![Span::styled(label, label_style(highlighted, false))];
    };

    // Split into runs of equal emphasis.
    let mut spans = Vec::new();
    let mut run_start = 0;
    let mut run_emphasised = false;
    for (i, c) in label.char_indices() {
        let emphasised = c == ch;
        if emphasised != run_emphasised && i > run_start {
            spans.push(Span::styled(&label[run_start..i], label_style(highlighted, run_emphasised)));
            run_start = i;
        }
        run_emphasised = emphasised;
    }
    if run_start < label.len() {
        spans.push(Span::styled(&label[run_start..], label_style(highlighted, run_emphasised)));
    }
    spans
}

/// Blank cells between two labels, with the separator centred in them.
fn gap_text(layout: &Layout) -> String {
    let gap = layout.gap_width();
    if layout.separators() {
        let left = (gap - 1) / 2;
        let right = gap - 1 - left;
        format!("{}{}{}", " ".repeat(left), SEPARATOR, " ".repeat(right))
    } else {
        " ".repeat(gap)
    }
}

fn fits(rect: Rect, area: Rect) -> bool {
    rect.x >= area.x
        && rect.y >= area.y
        && rect.right() <= area.right()
        && rect.bottom() <= area.bottom()
}
