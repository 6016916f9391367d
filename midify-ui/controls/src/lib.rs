//! Page controllers for the Midify front-end, independent of any GUI toolkit.
//!
//! Each controller keeps its state as plain data and exposes a projection the
//! renderer reads every frame:
//! - [`FileList`] and [`FileListClient`] fetch and hold the server file
//!   listing;
//! - [`PopupSwitcher`] and [`TabSelector`] drive the two-pane input popup;
//! - [`SidebarController`] owns the collapsible sidebar and persists its
//!   open/closed state in a [`SessionStore`].
//!
//! Controllers never sleep. Anything that must happen later is returned as a
//! [`Scheduled`] step; the host waits `delay` and feeds the step back through
//! the controller's `apply` method. Visual properties that animate are
//! [`Transition`] values sampled with an [`Instant`](std::time::Instant).
//!
//! # Quick Example
//!
//! ```
//! use std::time::Instant;
//! use midify_ui_controls::{
//!     PopupPane, PopupState, PopupSwitcher, TransitionTiming, Trigger,
//! };
//!
//! let mut popup = PopupSwitcher::new(TransitionTiming::immediate());
//! let now = Instant::now();
//!
//! let mut pending = popup.trigger(Trigger::Left, now);
//! while let Some(scheduled) = pending.pop() {
//!     pending.extend(popup.apply(scheduled.step, now));
//! }
//!
//! assert_eq!(popup.state(), PopupState::ExpandedShowingTextInput);
//! assert!(popup.projection(now).pane(PopupPane::TextInput).visible);
//! ```

mod files;
mod popup;
mod schedule;
mod sidebar;
mod store;
mod tabs;
mod transition;

pub use files::{
    FILES_ENDPOINT, FileDescriptor, FileList, FileListClient, FilesError,
    decode_listing,
};
pub use popup::{
    Acknowledgment, PaneProjection, PopupPane, PopupProjection, PopupState,
    PopupStep, PopupSwitcher, Trigger,
};
pub use schedule::{Scheduled, TransitionTiming};
pub use sidebar::{
    SidebarController, SidebarProjection, SidebarState, SidebarStep,
    SuppressionTarget, ToggleIcon,
};
pub use store::{MemorySessionStore, SIDEBAR_OPEN_KEY, SessionStore};
pub use tabs::TabSelector;
pub use transition::Transition;
