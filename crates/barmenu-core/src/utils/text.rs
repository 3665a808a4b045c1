use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal cells.
///
/// # Examples
/// ```
/// use barmenu_core::utils::text::display_width;
/// assert_eq!(display_width("File"), 4);
/// ```
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Cut `text` so it occupies at most `max_width` cells.
///
/// Unlike an ellipsis truncation nothing is appended: labels are stored
/// clipped, the way a fixed-size field would hold them.
///
/// # Examples
/// ```
/// use barmenu_core::utils::text::clip_to_width;
/// assert_eq!(clip_to_width("Preferences", 4), "Pref");
/// ```
pub fn clip_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > max_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result
}
