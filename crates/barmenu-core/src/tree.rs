//! Option tree: the top-level options of a menu and their sub-options.
//!
//! A tree is built once from a [`MenuSpec`] and only changes afterwards
//! through shortcut assignment.

use crate::error::MenuError;
use crate::utils::text::{clip_to_width, display_width};

/// Maximum number of top-level options.
pub const MAX_OPTIONS: usize = 8;

/// Maximum number of sub-options under one option.
pub const MAX_SUBS: usize = 12;

/// Maximum label width in cells. Longer labels are clipped.
pub const MAX_LABEL_LEN: usize = 24;

/// One group of the declarative menu description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub label: String,
    pub subs: Vec<String>,
}

/// Ordered, possibly nested description of a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSpec {
    groups: Vec<OptionSpec>,
}

impl MenuSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option group with its sub-option labels.
    pub fn option<I, S>(mut self, label: impl Into<String>, subs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(OptionSpec {
            label: label.into(),
            subs: subs.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Parse a flat token stream.
    ///
    /// The first token of a group is the option label, the following ones
    /// are its sub-options, and `None` closes the group. Two consecutive
    /// `None`s (or the end of the slice) end the menu.
    ///
    /// ```
    /// use barmenu_core::tree::MenuSpec;
    /// let spec = MenuSpec::from_tokens(&[
    ///     Some("File"), Some("Open"), Some("Save"), None,
    ///     Some("Edit"), None,
    ///     None,
    /// ]);
    /// assert_eq!(spec.groups().len(), 2);
    /// assert_eq!(spec.groups()[0].subs, vec!["Open", "Save"]);
    /// ```
    pub fn from_tokens(tokens: &[Option<&str>]) -> Self {
        let mut groups: Vec<OptionSpec> = Vec::new();
        let mut current: Option<OptionSpec> = None;

        for token in tokens {
            match token {
                Some(text) => match current.as_mut() {
                    Some(group) => group.subs.push((*text).to_string()),
                    None => {
                        current = Some(OptionSpec {
                            label: (*text).to_string(),
                            subs: Vec::new(),
                        });
                    }
                },
                None => match current.take() {
                    Some(group) => groups.push(group),
                    // Terminator right after a closed group: whole menu ended.
                    None => break,
                },
            }
        }

        if let Some(group) = current {
            groups.push(group);
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[OptionSpec] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// An entry of an option's drop-down panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubOption {
    label: String,
    pub(crate) shortcut: Option<char>,
}

impl SubOption {
    fn new(label: &str) -> Self {
        Self {
            label: clip_to_width(label, MAX_LABEL_LEN),
            shortcut: None,
        }
    }

    /// Label, already clipped to [`MAX_LABEL_LEN`] cells.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Assigned shortcut letter, if any.
    pub fn shortcut(&self) -> Option<char> {
        self.shortcut
    }
}

/// A top-level entry of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    label: String,
    pub(crate) shortcut: Option<char>,
    pub(crate) subs: Vec<SubOption>,
}

impl MenuOption {
    /// Label, already clipped to [`MAX_LABEL_LEN`] cells.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rendered width of the label in cells.
    pub fn width(&self) -> usize {
        display_width(&self.label)
    }

    /// Assigned shortcut letter, if any.
    pub fn shortcut(&self) -> Option<char> {
        self.shortcut
    }

    /// Sub-options in display order.
    pub fn subs(&self) -> &[SubOption] {
        &self.subs
    }

    /// Whether pressing Down opens a panel.
    pub fn has_subs(&self) -> bool {
        !self.subs.is_empty()
    }
}

/// Validated options of a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionTree {
    pub(crate) options: Vec<MenuOption>,
}

impl OptionTree {
    /// Build a tree, enforcing [`MAX_OPTIONS`] and [`MAX_SUBS`] in the
    /// order the groups appear.
    pub fn from_spec(spec: &MenuSpec) -> Result<Self, MenuError> {
        let mut options = Vec::with_capacity(spec.groups.len().min(MAX_OPTIONS));

        for (index, group) in spec.groups.iter().enumerate() {
            if index == MAX_OPTIONS {
                return Err(MenuError::TooManyOptions { max: MAX_OPTIONS });
            }
            if group.subs.len() > MAX_SUBS {
                return Err(MenuError::TooManySubOptions {
                    option: index,
                    max: MAX_SUBS,
                });
            }

            options.push(MenuOption {
                label: clip_to_width(&group.label, MAX_LABEL_LEN),
                shortcut: None,
                subs: group.subs.iter().map(|s| SubOption::new(s)).collect(),
            });
        }

        Ok(Self { options })
    }

    /// Options in bar order.
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Option at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&MenuOption> {
        self.options.get(index)
    }

    /// Number of top-level options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the tree has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Number of sub-options under `index`, zero for unknown indices.
    pub fn sub_count(&self, index: usize) -> usize {
        self.options.get(index).map_or(0, |o| o.subs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens_stops_at_double_terminator() {
        let spec = MenuSpec::from_tokens(&[
            Some("File"),
            Some("Open"),
            None,
            None,
            Some("Ignored"),
        ]);
        assert_eq!(spec.groups().len(), 1);
        assert_eq!(spec.groups()[0].label, "File");
    }

    #[test]
    fn test_from_tokens_empty() {
        assert!(MenuSpec::from_tokens(&[None]).is_empty());
        assert!(MenuSpec::from_tokens(&[]).is_empty());
    }

    #[test]
    fn test_from_tokens_unterminated_tail() {
        let spec = MenuSpec::from_tokens(&[Some("File"), None, Some("Edit"), Some("Undo")]);
        assert_eq!(
            spec,
            MenuSpec::new()
                .option("File", Vec::<String>::new())
                .option("Edit", ["Undo"])
        );
    }

    #[test]
    fn test_labels_are_clipped() {
        let long = "a".repeat(40);
        let spec = MenuSpec::new().option(long.clone(), [long.as_str()]);
        let tree = OptionTree::from_spec(&spec).expect("tree");
        assert_eq!(tree.options()[0].label().len(), MAX_LABEL_LEN);
        assert_eq!(tree.options()[0].subs()[0].label().len(), MAX_LABEL_LEN);
    }

    #[test]
    fn test_too_many_subs_reports_option() {
        let subs: Vec<String> = (0..=MAX_SUBS).map(|i| format!("Item {}", i)).collect();
        let spec = MenuSpec::new()
            .option("File", ["Open"])
            .option("Big", subs);
        let err = OptionTree::from_spec(&spec).unwrap_err();
        assert!(matches!(
            err,
            MenuError::TooManySubOptions { option: 1, max: MAX_SUBS }
        ));
    }

    #[test]
    fn test_max_subs_accepted() {
        let subs: Vec<String> = (0..MAX_SUBS).map(|i| format!("Item {}", i)).collect();
        let tree = OptionTree::from_spec(&MenuSpec::new().option("Big", subs)).expect("tree");
        assert_eq!(tree.sub_count(0), MAX_SUBS);
        assert_eq!(tree.sub_count(5), 0);
    }

    #[test]
    fn test_too_many_options() {
        let mut spec = MenuSpec::new();
        for i in 0..=MAX_OPTIONS {
            spec = spec.option(format!("O{}", i), Vec::<String>::new());
        }
        let err = OptionTree::from_spec(&spec).unwrap_err();
        assert!(matches!(err, MenuError::TooManyOptions { max: MAX_OPTIONS }));
    }
}
