//! Shared style definitions for the menu bar and sub-panel.

use ratatui::style::{Modifier, Style};

/// Glyph drawn between options when separators are enabled.
pub const SEPARATOR: &str = "|";

/// Plain label text.
pub const TEXT: Style = Style::new();

/// Highlighted (standout) label or sub-option row.
pub fn highlight_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Shortcut character inside a label.
pub fn shortcut_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Style of a label, combining highlight and shortcut emphasis.
#[inline]
pub fn label_style(highlighted: bool, shortcut: bool) -> Style {
    let base = if highlighted { highlight_style() } else { TEXT };
    if shortcut {
        base.patch(shortcut_style())
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_style_plain() {
        let style = label_style(false, false);
        assert!(style.add_modifier.is_empty());
    }

    #[test]
    fn test_label_style_highlighted_shortcut() {
        let style = label_style(true, true);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_shortcut_style_not_reversed() {
        let style = label_style(false, true);
        assert!(!style.add_modifier.contains(Modifier::REVERSED));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
