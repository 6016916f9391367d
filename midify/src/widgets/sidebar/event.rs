use midify_ui_controls::{Scheduled, SidebarStep};

use crate::pages::Page;

/// Intent events handled by the sidebar widget.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// A page finished loading; restore from the session store.
    PageLoaded,
    /// A previously scheduled step is due.
    Step(SidebarStep),
    /// The collapse/expand button was clicked.
    TogglePressed,
    /// A navigation link was clicked.
    NavLinkPressed(Page),
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    /// Feed `step` back after its delay.
    Schedule(Scheduled<SidebarStep>),
    /// Load another page.
    Navigate(Page),
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    Intent(SidebarIntent),
    Effect(SidebarEffect),
}
