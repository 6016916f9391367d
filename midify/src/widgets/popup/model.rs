use midify_ui_controls::{Acknowledgment, PopupProjection};

/// Portions are whole numbers; percentages keep one decimal.
const PORTION_SCALE: f32 = 10.0;

/// Read-only view model for the Home page popup.
#[derive(Debug, Clone)]
pub(crate) struct PopupViewModel<'a> {
    pub(crate) projection: PopupProjection,
    pub(crate) active_tab: Option<usize>,
    pub(crate) text_value: &'a str,
    pub(crate) acknowledgment: Option<&'a Acknowledgment>,
}

/// Horizontal split of the popup row as fill portions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PopupColumns {
    pub(crate) left: u16,
    pub(crate) popup: u16,
    pub(crate) right: u16,
}

impl PopupViewModel<'_> {
    /// Split the row into the space left of the popup, the popup and the
    /// remainder, following the animated `left` and `width` percentages.
    pub(crate) fn columns(&self) -> PopupColumns {
        let left = self.projection.left_pct.clamp(0.0, 100.0);
        let width = self.projection.width_pct.clamp(0.0, 100.0 - left);
        let right = 100.0 - left - width;

        PopupColumns {
            left: portion(left),
            popup: portion(width),
            right: portion(right),
        }
    }
}

fn portion(pct: f32) -> u16 {
    (pct * PORTION_SCALE).round() as u16
}

#[cfg(test)]
mod tests {
    use midify_ui_controls::{PopupSwitcher, TransitionTiming};

    use super::*;

    fn vm(projection: PopupProjection) -> PopupViewModel<'static> {
        PopupViewModel {
            projection,
            active_tab: None,
            text_value: "",
            acknowledgment: None,
        }
    }

    #[test]
    fn given_collapsed_popup_when_split_then_popup_has_no_width() {
        let popup = PopupSwitcher::new(TransitionTiming::default());
        let projection = popup.projection(std::time::Instant::now());

        let columns = vm(projection).columns();

        assert_eq!(columns.popup, 0);
        assert_eq!(columns.left, 500);
        assert_eq!(columns.right, 500);
    }
}
