//! Shortcut registry.
//!
//! Shortcuts are single ASCII letters. Top-level options share one scope;
//! the sub-options of each option form their own scope, so the same letter
//! may be used under two different parents.

use crate::menu::Menu;

impl Menu {
    /// Assign `ch` as the shortcut of option `option`, or of its
    /// sub-option `sub` when given.
    ///
    /// Returns the accepted character, or `None` when the address does not
    /// exist, `ch` is not a letter, or `ch` is already taken in its scope.
    /// A rejected call leaves the menu unchanged. Assigning the letter a
    /// slot already holds is accepted again.
    pub fn assign_shortcut(&mut self, option: usize, sub: Option<usize>, ch: char) -> Option<char> {
        if !self.address_exists(option, sub) {
            log::debug!("shortcut {:?} rejected: no option at {}/{:?}", ch, option, sub);
            return None;
        }
        if !ch.is_ascii_alphabetic() {
            log::debug!("shortcut {:?} rejected: not a letter", ch);
            return None;
        }
        if self.is_taken(option, sub, ch) {
            log::debug!("shortcut {:?} rejected: already used in scope", ch);
            return None;
        }

        let target = &mut self.tree.options[option];
        match sub {
            None => target.shortcut = Some(ch),
            Some(sub) => target.subs[sub].shortcut = Some(ch),
        }
        Some(ch)
    }

    /// Shortcut currently assigned to the addressed slot.
    pub fn shortcut(&self, option: usize, sub: Option<usize>) -> Option<char> {
        let target = self.tree.get(option)?;
        match sub {
            None => target.shortcut(),
            Some(sub) => target.subs().get(sub)?.shortcut(),
        }
    }

    fn address_exists(&self, option: usize, sub: Option<usize>) -> bool {
        match (self.tree.get(option), sub) {
            (Some(_), None) => true,
            (Some(target), Some(sub)) => sub < target.subs().len(),
            (None, _) => false,
        }
    }

    /// Whether `ch` is held by a slot in the scope of `(option, sub)` other
    /// than that slot itself.
    fn is_taken(&self, option: usize, sub: Option<usize>, ch: char) -> bool {
        match sub {
            None => self
                .tree
                .options()
                .iter()
                .enumerate()
                .any(|(i, o)| i != option && o.shortcut() == Some(ch)),
            Some(sub) => self.tree.options()[option]
                .subs()
                .iter()
                .enumerate()
                .any(|(i, s)| i != sub && s.shortcut() == Some(ch)),
        }
    }
}
