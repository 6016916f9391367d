use midify_ui_controls::SidebarProjection;

use crate::pages::Page;

pub(crate) const SIDEBAR_OPEN_WIDTH: f32 = 260.0;
pub(crate) const SIDEBAR_CLOSED_WIDTH: f32 = 78.0;

/// Below this openness labels are hidden instead of drawn transparent.
const LABEL_VISIBLE_THRESHOLD: f32 = 0.05;

/// Read-only view model for the sidebar and the home section offset.
#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel {
    pub(crate) active_page: Page,
    pub(crate) projection: SidebarProjection,
}

impl SidebarViewModel {
    pub(crate) fn sidebar_width(&self) -> f32 {
        width_for(self.projection.sidebar_openness)
    }

    /// Left offset of the home section, tracking the sidebar edge.
    pub(crate) fn home_section_offset(&self) -> f32 {
        width_for(self.projection.home_section_openness)
    }

    /// Opacity of the label of nav link `index`, `None` when hidden.
    pub(crate) fn label_opacity(&self, index: usize) -> Option<f32> {
        let openness = self
            .projection
            .nav_link_openness
            .get(index)
            .copied()
            .unwrap_or(self.projection.sidebar_openness);
        (openness > LABEL_VISIBLE_THRESHOLD).then_some(openness)
    }
}

fn width_for(openness: f32) -> f32 {
    SIDEBAR_CLOSED_WIDTH
        + (SIDEBAR_OPEN_WIDTH - SIDEBAR_CLOSED_WIDTH) * openness.clamp(0.0, 1.0)
}
