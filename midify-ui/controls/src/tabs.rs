/// Mutually exclusive "active" marker over a row of selector buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelector {
    active: Vec<bool>,
}

impl TabSelector {
    /// Create a selector over `count` buttons, none of them active.
    pub fn new(count: usize) -> Self {
        Self {
            active: vec![false; count],
        }
    }

    /// Clear the marker from every button and set it on `index`.
    ///
    /// Returns `false` and leaves the markers untouched when `index` is out
    /// of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.active.len() {
            return false;
        }

        for (position, active) in self.active.iter_mut().enumerate() {
            *active = position == index;
        }
        true
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Index of the active button, if any.
    pub fn active(&self) -> Option<usize> {
        self.active.iter().position(|active| *active)
    }
}

#[cfg(test)]
mod tests {
    use super::TabSelector;

    #[test]
    fn given_new_selector_when_inspected_then_nothing_is_active() {
        let selector = TabSelector::new(2);

        assert_eq!(selector.active(), None);
        assert!(!selector.is_active(0));
    }

    #[test]
    fn given_any_button_count_when_each_selected_then_exactly_one_is_active() {
        for count in 2..6 {
            let mut selector = TabSelector::new(count);
            for index in (0..count).rev() {
                assert!(selector.select(index));

                let active: Vec<usize> =
                    (0..count).filter(|i| selector.is_active(*i)).collect();
                assert_eq!(active, vec![index]);
            }
        }
    }

    #[test]
    fn given_out_of_range_index_when_selected_then_markers_are_unchanged() {
        let mut selector = TabSelector::new(2);
        selector.select(1);

        assert!(!selector.select(5));
        assert_eq!(selector.active(), Some(1));
    }
}
