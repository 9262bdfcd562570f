//! FAQ panels and category tabs.

use crate::error::SiteError;

/// A group of expandable panels of which at most one is open.
///
/// Storing the open panel as a single index makes the single-open rule
/// hold by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionGroup {
    len: usize,
    open: Option<usize>,
}

impl AccordionGroup {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn open_panel(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Toggle a panel, closing whichever other panel was open.
    ///
    /// Returns the panel left open afterwards, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PanelOutOfRange`] when `index` is not in the group.
    pub fn toggle(&mut self, index: usize) -> Result<Option<usize>, SiteError> {
        if index >= self.len {
            return Err(SiteError::PanelOutOfRange {
                index,
                len: self.len,
            });
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.open)
    }

    /// Open flag for every panel, in order.
    #[must_use]
    pub fn states(&self) -> Vec<bool> {
        (0..self.len).map(|i| self.is_open(i)).collect()
    }
}

/// Mutually exclusive category selector over FAQ content groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTabs {
    categories: Vec<String>,
    active: Option<usize>,
}

impl CategoryTabs {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.categories[i].as_str())
    }

    /// Mark `category` active.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::UnknownCategory`] if no tab carries that tag.
    pub fn select(&mut self, category: &str) -> Result<(), SiteError> {
        let index = self
            .categories
            .iter()
            .position(|c| c == category)
            .ok_or_else(|| SiteError::UnknownCategory(category.to_string()))?;
        self.active = Some(index);
        Ok(())
    }

    #[must_use]
    pub fn is_active(&self, category: &str) -> bool {
        self.active() == Some(category)
    }

    /// Whether a content group tagged `category` should be shown.
    ///
    /// Before any selection the markup's own visibility is left alone, so
    /// every group reports visible.
    #[must_use]
    pub fn shows(&self, category: &str) -> bool {
        self.active().is_none_or(|active| active == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_second_panel_closes_first() {
        let mut group = AccordionGroup::new(3);
        assert_eq!(group.toggle(0).unwrap(), Some(0));
        assert_eq!(group.toggle(2).unwrap(), Some(2));
        assert_eq!(group.states(), vec![false, false, true]);
    }

    #[test]
    fn clicking_open_panel_closes_it() {
        let mut group = AccordionGroup::new(2);
        group.toggle(1).unwrap();
        assert_eq!(group.toggle(1).unwrap(), None);
        assert_eq!(group.states(), vec![false, false]);
    }

    #[test]
    fn single_open_holds_for_any_click_sequence() {
        let mut group = AccordionGroup::new(4);
        let clicks = [0, 1, 1, 3, 2, 2, 2, 0, 3, 3, 1];
        for click in clicks {
            group.toggle(click).unwrap();
            let open = group.states().into_iter().filter(|o| *o).count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn out_of_range_panel_is_rejected() {
        let mut group = AccordionGroup::new(2);
        assert!(matches!(
            group.toggle(2),
            Err(SiteError::PanelOutOfRange { index: 2, len: 2 })
        ));
        assert!(AccordionGroup::new(0).is_empty());
    }

    #[test]
    fn tab_selection_is_exclusive() {
        let mut tabs = CategoryTabs::new(["general", "billing", "courses"]);
        assert!(tabs.shows("billing"));
        tabs.select("billing").unwrap();
        assert!(tabs.is_active("billing"));
        assert!(!tabs.is_active("general"));
        assert!(tabs.shows("billing"));
        assert!(!tabs.shows("general"));
        tabs.select("courses").unwrap();
        assert_eq!(tabs.active(), Some("courses"));
        assert!(!tabs.shows("billing"));
    }

    #[test]
    fn unknown_tab_keeps_previous_selection() {
        let mut tabs = CategoryTabs::new(vec!["general".to_string()]);
        tabs.select("general").unwrap();
        assert!(matches!(
            tabs.select("missing"),
            Err(SiteError::UnknownCategory(c)) if c == "missing"
        ));
        assert_eq!(tabs.active(), Some("general"));
    }
}
