use midify_ui_controls::{PopupStep, Scheduled, Trigger};

/// Intent events handled by the popup widget.
#[derive(Debug, Clone)]
pub(crate) enum PopupIntent {
    /// The Home page was (re)loaded; start collapsed.
    PageLoaded,
    /// A scheduled step is due. Steps from an earlier page load are dropped.
    Step { generation: u64, step: PopupStep },
    /// One of the half-buttons was clicked.
    TriggerPressed(Trigger),
    TextChanged(String),
    SubmitText,
    SubmitFile,
    DismissAcknowledgment,
}

/// Effect events produced by the popup reducer.
#[derive(Debug, Clone)]
pub(crate) enum PopupEffect {
    /// Feed `scheduled.step` back after its delay.
    Schedule {
        generation: u64,
        scheduled: Scheduled<PopupStep>,
    },
}

/// Popup event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PopupEvent {
    Intent(PopupIntent),
    Effect(PopupEffect),
}
