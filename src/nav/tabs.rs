use tracing::debug;

use super::error::NavError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: String,
    pub selected: bool,
}

/// Ordered tabs with a single active selection.
///
/// A user press ([`TabStrip::press`]) yields a selection event for the shared
/// listener. [`TabStrip::select_by_index`] only updates what is displayed and
/// never yields one.
#[derive(Debug, Default)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    selected: Option<usize>,
    display_updates: usize,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tab and returns its position, which is the key the shared
    /// selection listener is bound to.
    pub fn add_tab(&mut self, label: impl Into<String>) -> usize {
        self.tabs.push(Tab {
            label: label.into(),
            selected: false,
        });
        self.tabs.len() - 1
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|tab| tab.label.as_str())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn display_updates(&self) -> usize {
        self.display_updates
    }

    /// User activation of tab `index`. Returns the position to hand to the
    /// selection listener.
    pub fn press(&mut self, index: usize) -> Result<usize, NavError> {
        self.mark(index)?;
        debug!(index, "tab pressed");
        Ok(index)
    }

    /// Display-only selection.
    pub fn select_by_index(&mut self, index: usize) -> Result<(), NavError> {
        self.mark(index)?;
        self.display_updates += 1;
        Ok(())
    }

    fn mark(&mut self, index: usize) -> Result<(), NavError> {
        if index >= self.tabs.len() {
            return Err(NavError::IndexOutOfRange {
                index,
                count: self.tabs.len(),
            });
        }
        if let Some(previous) = self.selected {
            self.tabs[previous].selected = false;
        }
        self.tabs[index].selected = true;
        self.selected = Some(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabStrip {
        let mut strip = TabStrip::new();
        for label in ["One", "Two", "Three"] {
            strip.add_tab(label);
        }
        strip
    }

    #[test]
    fn test_add_tab_preserves_order() {
        let strip = strip();
        assert_eq!(strip.len(), 3);
        assert_eq!(strip.label(0), Some("One"));
        assert_eq!(strip.label(2), Some("Three"));
        assert_eq!(strip.current_index(), None);
    }

    #[test]
    fn test_single_selection() {
        let mut strip = strip();
        strip.select_by_index(0).unwrap();
        strip.press(2).unwrap();

        let selected: Vec<_> = strip.tabs().iter().map(|t| t.selected).collect();
        assert_eq!(selected, vec![false, false, true]);
        assert_eq!(strip.current_index(), Some(2));
    }

    #[test]
    fn test_only_display_path_counts_updates() {
        let mut strip = strip();
        assert_eq!(strip.press(1), Ok(1));
        assert_eq!(strip.display_updates(), 0);

        strip.select_by_index(1).unwrap();
        assert_eq!(strip.display_updates(), 1);
    }

    #[test]
    fn test_out_of_range_does_not_mutate() {
        let mut strip = strip();
        strip.select_by_index(1).unwrap();

        assert_eq!(
            strip.press(3),
            Err(NavError::IndexOutOfRange { index: 3, count: 3 })
        );
        assert!(strip.select_by_index(7).is_err());
        assert_eq!(strip.current_index(), Some(1));
        assert_eq!(strip.display_updates(), 1);
    }
}
