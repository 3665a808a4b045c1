//! Layout engine.
//!
//! Pure geometry: given an [`OptionTree`] and a [`MenuStyle`], compute where
//! every option starts on the bar and how wide the bar is, and check that it
//! fits the surface. Nothing here touches the terminal.

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::tree::OptionTree;

/// Gap for [`Spacing::Narrow`].
pub const NARROW_SPACES: usize = 2;

/// Gap for [`Spacing::Default`].
pub const DEFAULT_SPACES: usize = 1;

/// Gap for [`Spacing::Wide`].
pub const WIDE_SPACES: usize = 15;

/// Extra cells a separator bar adds to every gap.
pub const SEPARATOR_EXTRA: usize = 3;

/// Sub-panel rows shown at once unless the style says otherwise.
pub const MAX_VISIBLE_SUBS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Narrow,
    #[default]
    Default,
    Wide,
}

impl Spacing {
    /// Blank cells between two options.
    pub fn cells(self) -> usize {
        match self {
            Spacing::Narrow => NARROW_SPACES,
            Spacing::Default => DEFAULT_SPACES,
            Spacing::Wide => WIDE_SPACES,
        }
    }
}

/// Visual configuration of a menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyle {
    pub spacing: Spacing,
    /// Draw a `|` between adjacent options.
    pub separators: bool,
    /// Stretch the bar to the right edge of the surface.
    pub extend_to_edge: bool,
    /// Height of the sub-option viewport.
    pub visible_rows: usize,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            spacing: Spacing::Default,
            separators: false,
            extend_to_edge: false,
            visible_rows: MAX_VISIBLE_SUBS,
        }
    }
}

impl MenuStyle {
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_separators(mut self, separators: bool) -> Self {
        self.separators = separators;
        self
    }

    pub fn with_extend_to_edge(mut self, extend: bool) -> Self {
        self.extend_to_edge = extend;
        self
    }

    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows;
        self
    }

    /// Viewport height, never below one row.
    pub fn viewport_rows(&self) -> usize {
        self.visible_rows.max(1)
    }
}

/// Screen position of the first cell of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    pub row: u16,
    pub col: u16,
}

impl Origin {
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Size of the surface a menu is laid out against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u16,
    pub height: u16,
}

impl SurfaceSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Resolved column geometry of a menu bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    spacing: usize,
    separators: bool,
    column_widths: Vec<usize>,
    offsets: Vec<usize>,
    label_widths: Vec<usize>,
    content_width: usize,
    total_width: usize,
}

impl Layout {
    /// Compute the layout and check it against the surface width.
    pub fn compute(
        tree: &OptionTree,
        style: &MenuStyle,
        origin: Origin,
        surface: SurfaceSize,
    ) -> Result<Self, MenuError> {
        let spacing = style.spacing.cells();
        let count = tree.len();

        let mut column_widths = Vec::with_capacity(count);
        let mut offsets = Vec::with_capacity(count);
        let mut label_widths = Vec::with_capacity(count);
        let mut content_width = 0;

        for (i, option) in tree.options().iter().enumerate() {
            let is_last = i + 1 == count;
            let label_width = option.width();
            let column = if style.separators && !is_last {
                label_width + SEPARATOR_EXTRA
            } else {
                label_width
            };

            if i > 0 {
                content_width += spacing;
            }
            offsets.push(content_width);
            content_width += column;
            column_widths.push(column);
            label_widths.push(label_width);
        }

        let available = usize::from(surface.width).saturating_sub(usize::from(origin.col));
        let total_width = if style.extend_to_edge {
            available
        } else {
            if content_width + usize::from(origin.col) > usize::from(surface.width) {
                return Err(MenuError::MenuTooWide {
                    required: content_width,
                    available,
                });
            }
            content_width
        };

        log::debug!(
            "layout: {} options, spacing {}, content width {}, total width {}",
            count,
            spacing,
            content_width,
            total_width
        );

        Ok(Self {
            spacing,
            separators: style.separators,
            column_widths,
            offsets,
            label_widths,
            content_width,
            total_width,
        })
    }

    /// Blank cells between options, before separator padding.
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Whether a `|` is drawn between options.
    pub fn separators(&self) -> bool {
        self.separators
    }

    /// Width of each option's column, separator padding included.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Start column of each option, relative to the bar.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Start column of option `index`, relative to the bar.
    pub fn offset(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    /// Width the options themselves need.
    pub fn content_width(&self) -> usize {
        self.content_width
    }

    /// Width of the bar surface, which differs from the content width only
    /// when extending to the edge.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Cells between the end of one label and the start of the next.
    pub fn gap_width(&self) -> usize {
        if self.separators {
            self.spacing + SEPARATOR_EXTRA
        } else {
            self.spacing
        }
    }

    /// Column of the separator glyph following option `index`, relative to
    /// the bar. `None` for the last option or when separators are off.
    pub fn separator_column(&self, index: usize) -> Option<usize> {
        if !self.separators || index + 1 >= self.offsets.len() {
            return None;
        }
        let label_end = self.offsets[index] + self.label_widths[index];
        Some(label_end + (self.gap_width() - 1) / 2)
    }
}
