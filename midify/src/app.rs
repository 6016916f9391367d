#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::time::Instant;

use iced::{Element, Subscription, Task, Theme};
use midify_ui_controls::{FileListClient, MemorySessionStore};

use crate::config::{self, AppConfig};
use crate::pages::Page;
use crate::theme::ThemeManager;
use crate::widgets::files::{FilesEvent, FilesWidget};
use crate::widgets::popup::{PopupEvent, PopupWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 900.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    /// Load another page.
    Navigate(Page),
    /// Animation frame while a tween is running.
    Frame(Instant),
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Popup widget
    Popup(PopupEvent),
    // File list widget
    Files(FilesEvent),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) popup: PopupWidget,
    pub(crate) files: FilesWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) page: Page,
    /// Instant every projection is sampled at during `view`.
    pub(crate) now: Instant,
    pub(crate) files_client: Option<FileListClient>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_initial_config();
        (Self::from_config(&config), Task::done(AppEvent::IcedReady))
    }

    /// Build the application state for `config` without loading a page.
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        let timing = config.timing();
        let files_client = match config.files_client() {
            Ok(client) => {
                log::info!("file server at {}", config.server_url());
                Some(client)
            },
            Err(err) => {
                log::warn!("file listing disabled: {err}");
                None
            },
        };

        let widgets = Widgets {
            sidebar: SidebarWidget::new(MemorySessionStore::new(), timing),
            popup: PopupWidget::new(timing),
            files: FilesWidget::new(),
        };

        App {
            theme_manager: ThemeManager::new(),
            page: Page::default(),
            now: Instant::now(),
            files_client,
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("Midify - {}", self.page.label())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Whether any widget has a tween running at the current frame.
    pub(crate) fn is_animating(&self) -> bool {
        self.widgets.sidebar.is_animating(self.now)
            || self.widgets.popup.is_animating(self.now)
    }
}
