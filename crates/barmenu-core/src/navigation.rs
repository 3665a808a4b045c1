//! Navigation state machine.
//!
//! Maps key presses to a two-dimensional cursor: the highlighted top-level
//! option and, when a sub-panel is open, the highlighted sub-option.
//! Horizontal movement wraps around; vertical movement clamps.

use crate::error::MenuError;
use crate::menu::Menu;
use crate::scroll::Viewport;

/// Input understood by the navigation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Char(char),
    Other,
}

/// A committed choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub top: usize,
    /// `None` when the top-level option was chosen without drilling down.
    pub sub: Option<usize>,
}

/// How the navigation loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed(Selection),
    Cancelled,
}

impl Outcome {
    /// Whether the user chose an entry.
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed(_))
    }

    /// The chosen entry, `None` when cancelled.
    pub fn selection(&self) -> Option<Selection> {
        match self {
            Outcome::Committed(selection) => Some(*selection),
            Outcome::Cancelled => None,
        }
    }

    /// `(committed, top, sub)`; both indices are `None` when cancelled.
    pub fn into_parts(self) -> (bool, Option<usize>, Option<usize>) {
        match self {
            Outcome::Committed(Selection { top, sub }) => (true, Some(top), sub),
            Outcome::Cancelled => (false, None, None),
        }
    }
}

/// Result of feeding one key to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved; the menu must be redrawn.
    Moved,
    /// A navigation key that had no effect at the current position.
    Unchanged,
    /// A key the menu does not react to.
    Ignored,
    Finished(Outcome),
}

/// Cursor of the navigation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    top: usize,
    sub: Option<usize>,
    scroll: Viewport,
}

impl NavigationState {
    /// Fresh cursor on the first option with no sub-panel open.
    pub fn new(menu: &Menu) -> Result<Self, MenuError> {
        if menu.is_empty() {
            return Err(MenuError::EmptyMenu);
        }
        Ok(Self {
            top: 0,
            sub: None,
            scroll: Viewport::default(),
        })
    }

    /// Highlighted top-level option.
    pub fn top_index(&self) -> usize {
        self.top
    }

    /// Highlighted sub-option, `None` while the panel is closed.
    pub fn sub_index(&self) -> Option<usize> {
        self.sub
    }

    /// First sub-option row shown in the panel.
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }

    /// Scroll window of the open panel.
    pub fn viewport(&self) -> &Viewport {
        &self.scroll
    }

    /// Copy of this state with the sub-panel closed, used to repaint the
    /// bar alone once the loop has finished.
    pub fn without_panel(&self) -> Self {
        Self {
            top: self.top,
            sub: None,
            scroll: Viewport::default(),
        }
    }

    /// Apply `key` and report what happened.
    pub fn apply(&mut self, key: Key, menu: &Menu) -> Step {
        let before = (self.top, self.sub);
        let last = menu.len().saturating_sub(1);

        match key {
            Key::Left => {
                self.top = if self.top == 0 { last } else { self.top - 1 };
                self.close_panel();
            }
            Key::Right => {
                self.top = if self.top >= last { 0 } else { self.top + 1 };
                self.close_panel();
            }
            Key::Up => {
                if let Some(sub) = self.sub {
                    self.sub = Some(sub.saturating_sub(1));
                }
            }
            Key::Down => {
                let count = menu.tree().sub_count(self.top);
                match self.sub {
                    None if count > 0 => {
                        self.scroll = Viewport::new(count, menu.style().viewport_rows());
                        self.sub = Some(0);
                    }
                    None => {}
                    Some(sub) => self.sub = Some((sub + 1).min(count - 1)),
                }
            }
            Key::Escape => return Step::Finished(Outcome::Cancelled),
            Key::Enter => {
                return Step::Finished(Outcome::Committed(Selection {
                    top: self.top,
                    sub: self.sub,
                }));
            }
            Key::Char(_) | Key::Other => return Step::Ignored,
        }

        if let Some(sub) = self.sub {
            self.scroll.follow(sub);
        }

        if (self.top, self.sub) == before {
            Step::Unchanged
        } else {
            log::debug!("cursor moved to {}/{:?}", self.top, self.sub);
            Step::Moved
        }
    }

    fn close_panel(&mut self) {
        self.sub = None;
        self.scroll = Viewport::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{MenuStyle, Origin, SurfaceSize};
    use crate::tree::MenuSpec;

    fn file_edit() -> Menu {
        let spec = MenuSpec::new()
            .option("File", ["Open", "Save", "Exit"])
            .option("Edit", Vec::<String>::new());
        Menu::new(
            &spec,
            MenuStyle::default(),
            Origin::default(),
            SurfaceSize::new(80, 24),
        )
        .expect("menu")
    }

    fn long_menu() -> Menu {
        let subs: Vec<String> = (0..12).map(|i| format!("Item {}", i)).collect();
        let spec = MenuSpec::new()
            .option("Long", subs)
            .option("Short", ["One", "Two"])
            .option("None", Vec::<String>::new());
        Menu::new(
            &spec,
            MenuStyle::default(),
            Origin::default(),
            SurfaceSize::new(80, 24),
        )
        .expect("menu")
    }

    fn press(state: &mut NavigationState, menu: &Menu, keys: &[Key]) -> Step {
        let mut step = Step::Ignored;
        for key in keys {
            step = state.apply(*key, menu);
        }
        step
    }

    #[test]
    fn test_right_then_enter_commits_second_option() {
        let menu = file_edit();
        let mut state = NavigationState::new(&menu).expect("state");
        let step = press(&mut state, &menu, &[Key::Right, Key::Enter]);
        assert_eq!(
            step,
            Step::Finished(Outcome::Committed(Selection { top: 1, sub: None }))
        );
    }

    #[test]
    fn test_down_clamps_at_last_sub() {
        let menu = file_edit();
        let mut state = NavigationState::new(&menu).expect("state");
        assert_eq!(state.apply(Key::Down, &menu), Step::Moved);
        assert_eq!(state.sub_index(), Some(0));
        press(&mut state, &menu, &[Key::Down, Key::Down]);
        assert_eq!(state.sub_index(), Some(2));
        assert_eq!(state.apply(Key::Down, &menu), Step::Unchanged);
        assert_eq!(state.sub_index(), Some(2));
    }

    #[test]
    fn test_up_clamps_at_first_sub_and_ignores_closed_panel() {
        let menu = file_edit();
        let mut state = NavigationState::new(&menu).expect("state");
        assert_eq!(state.apply(Key::Up, &menu), Step::Unchanged);
        assert_eq!(state.sub_index(), None);

        state.apply(Key::Down, &menu);
        assert_eq!(state.apply(Key::Up, &menu), Step::Unchanged);
        assert_eq!(state.sub_index(), Some(0));
    }

    #[test]
    fn test_down_on_option_without_subs_is_noop() {
        let menu = file_edit();
        let mut state = NavigationState::new(&menu).expect("state");
        state.apply(Key::Right, &menu);
        assert_eq!(state.apply(Key::Down, &menu), Step::Unchanged);
        assert_eq!(state.sub_index(), None);
    }

    #[test]
    fn test_horizontal_wraps() {
        let menu = long_menu();
        let mut state = NavigationState::new(&menu).expect("state");
        state.apply(Key::Left, &menu);
        assert_eq!(state.top_index(), 2);
        state.apply(Key::Right, &menu);
        assert_eq!(state.top_index(), 0);
    }

    #[test]
    fn test_horizontal_move_resets_sub_and_scroll() {
        let menu = long_menu();
        let mut state = NavigationState::new(&menu).expect("state");
        press(&mut state, &menu, &[Key::Down; 11]);
        assert_eq!(state.sub_index(), Some(10));
        assert_eq!(state.scroll_offset(), 3);

        state.apply(Key::Right, &menu);
        assert_eq!(state.sub_index(), None);
        assert_eq!(state.scroll_offset(), 0);

        // Coming back always starts at the first sub-option.
        press(&mut state, &menu, &[Key::Left, Key::Down]);
        assert_eq!(state.top_index(), 0);
        assert_eq!(state.sub_index(), Some(0));
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_left_move_resets_sub_and_scroll() {
        let menu = long_menu();
        let mut state = NavigationState::new(&menu).expect("state");
        press(&mut state, &menu, &[Key::Down; 11]);
        assert_eq!(state.scroll_offset(), 3);

        assert_eq!(state.apply(Key::Left, &menu), Step::Moved);
        assert_eq!(state.top_index(), 2);
        assert_eq!(state.sub_index(), None);
        assert_eq!(state.scroll_offset(), 0);

        press(&mut state, &menu, &[Key::Left, Key::Down, Key::Down]);
        assert_eq!(state.sub_index(), Some(1));
        state.apply(Key::Left, &menu);
        assert_eq!(state.top_index(), 0);
        assert_eq!(state.sub_index(), None);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_single_option_wraps_onto_itself_but_closes_panel() {
        let spec = MenuSpec::new().option("Only", ["A"]);
        let menu = Menu::new(&spec, MenuStyle::default(), Origin::default(), SurfaceSize::new(80, 24))
            .expect("menu");
        let mut state = NavigationState::new(&menu).expect("state");
        state.apply(Key::Down, &menu);
        assert_eq!(state.apply(Key::Right, &menu), Step::Moved);
        assert_eq!(state.top_index(), 0);
        assert_eq!(state.sub_index(), None);
    }

    #[test]
    fn test_scroll_invariant_during_walk() {
        let menu = long_menu();
        let mut state = NavigationState::new(&menu).expect("state");
        let keys = [
            Key::Down, Key::Down, Key::Down, Key::Down, Key::Down, Key::Down, Key::Down,
            Key::Down, Key::Down, Key::Down, Key::Down, Key::Down, Key::Up, Key::Up, Key::Up,
            Key::Up, Key::Up, Key::Up, Key::Up, Key::Up, Key::Up, Key::Up, Key::Up, Key::Down,
        ];
        for key in keys {
            state.apply(key, &menu);
            let sub = state.sub_index().expect("panel open");
            let offset = state.scroll_offset();
            assert!(offset <= sub && sub < offset + 8);
            if sub == 0 {
                assert_eq!(offset, 0);
            }
        }
    }

    #[test]
    fn test_escape_cancels_and_letters_are_ignored() {
        let menu = file_edit();
        let mut state = NavigationState::new(&menu).expect("state");
        assert_eq!(state.apply(Key::Char('f'), &menu), Step::Ignored);
        assert_eq!(state.apply(Key::Other, &menu), Step::Ignored);
        assert_eq!(
            state.apply(Key::Escape, &menu),
            Step::Finished(Outcome::Cancelled)
        );
    }

    #[test]
    fn test_commit_with_sub() {
        let menu = file_edit();
        let mut state = NavigationState::new(&menu).expect("state");
        let step = press(&mut state, &menu, &[Key::Down, Key::Down, Key::Enter]);
        let Step::Finished(outcome) = step else {
            panic!("expected finished step");
        };
        assert_eq!(outcome.into_parts(), (true, Some(0), Some(1)));
        assert_eq!(Outcome::Cancelled.into_parts(), (false, None, None));
    }

    #[test]
    fn test_empty_menu_cannot_navigate() {
        let menu = Menu::new(
            &MenuSpec::new(),
            MenuStyle::default(),
            Origin::default(),
            SurfaceSize::new(80, 24),
        )
        .expect("menu");
        assert!(matches!(
            NavigationState::new(&menu),
            Err(MenuError::EmptyMenu)
        ));
    }
}
