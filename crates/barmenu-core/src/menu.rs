//! The menu handle: option tree, resolved layout and bar region.

use crate::error::MenuError;
use crate::layout::{Layout, MenuStyle, Origin, SurfaceSize};
use crate::tree::{MenuOption, MenuSpec, OptionTree};

/// One-row region of the surface reserved for the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRegion {
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

/// A constructed menu.
///
/// Construction either yields a fully usable menu or an error; there is no
/// partially built state to clean up.
#[derive(Debug, Clone)]
pub struct Menu {
    pub(crate) tree: OptionTree,
    style: MenuStyle,
    origin: Origin,
    layout: Layout,
    bar: BarRegion,
}

impl Menu {
    /// Build a menu from `spec` laid out at `origin` on a surface of size
    /// `surface`.
    pub fn new(
        spec: &MenuSpec,
        style: MenuStyle,
        origin: Origin,
        surface: SurfaceSize,
    ) -> Result<Self, MenuError> {
        let tree = OptionTree::from_spec(spec)?;
        let layout = Layout::compute(&tree, &style, origin, surface)?;
        let bar = allocate_bar(&tree, &layout, origin, surface)?;

        log::info!(
            "menu created: {} options at ({}, {}), width {}",
            tree.len(),
            origin.row,
            origin.col,
            bar.width
        );

        Ok(Self {
            tree,
            style,
            origin,
            layout,
            bar,
        })
    }

    /// Re-lay the menu out with a different style. On error the menu keeps
    /// its current style and layout.
    pub fn restyle(&mut self, style: MenuStyle, surface: SurfaceSize) -> Result<(), MenuError> {
        let layout = Layout::compute(&self.tree, &style, self.origin, surface)?;
        let bar = allocate_bar(&self.tree, &layout, self.origin, surface)?;
        self.style = style;
        self.layout = layout;
        self.bar = bar;
        Ok(())
    }

    /// Options with their shortcuts.
    pub fn tree(&self) -> &OptionTree {
        &self.tree
    }

    /// Options in bar order.
    pub fn options(&self) -> &[MenuOption] {
        self.tree.options()
    }

    /// Style the current layout was computed with.
    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    /// Screen position of the bar's first cell.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Resolved column layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Region reserved for the bar.
    pub fn bar(&self) -> BarRegion {
        self.bar
    }

    /// Number of top-level options.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the menu has no options.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Absolute screen column where option `index` starts.
    pub fn option_column(&self, index: usize) -> Option<u16> {
        let offset = self.layout.offset(index)?;
        u16::try_from(usize::from(self.origin.col) + offset).ok()
    }
}

fn allocate_bar(
    tree: &OptionTree,
    layout: &Layout,
    origin: Origin,
    surface: SurfaceSize,
) -> Result<BarRegion, MenuError> {
    const SURFACE: &str = "menu bar";

    if origin.row >= surface.height {
        return Err(MenuError::AllocationFailed { surface: SURFACE });
    }
    let width =
        u16::try_from(layout.total_width()).map_err(|_| MenuError::AllocationFailed { surface: SURFACE })?;
    if width == 0 && !tree.is_empty() {
        return Err(MenuError::AllocationFailed { surface: SURFACE });
    }

    Ok(BarRegion {
        row: origin.row,
        col: origin.col,
        width,
    })
}
