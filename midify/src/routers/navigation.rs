use iced::Task;

use crate::app::{App, AppEvent};
use crate::pages::Page;
use crate::routers;
use crate::widgets::files::FilesIntent;
use crate::widgets::popup::PopupIntent;
use crate::widgets::sidebar::SidebarIntent;

/// Load `page`: every widget runs its page-load sequence again, and the
/// Browser page fetches the file listing.
pub(crate) fn navigate(app: &mut App, page: Page) -> Task<AppEvent> {
    log::info!("loading page {}", page.label());
    app.page = page;

    let mut tasks = vec![
        routers::sidebar::route_intent(app, SidebarIntent::PageLoaded),
        routers::popup::route_intent(app, PopupIntent::PageLoaded),
    ];
    if page.lists_files() {
        tasks.push(routers::files::route_intent(app, FilesIntent::PageLoaded));
    }

    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use midify_ui_controls::{FileDescriptor, SidebarStep};

    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn given_home_page_when_navigating_to_browser_then_page_is_switched() {
        let mut app = App::from_config(&AppConfig::default());

        let _task = navigate(&mut app, Page::Browser);

        assert_eq!(app.page, Page::Browser);
    }

    #[test]
    fn given_toggled_sidebar_when_navigating_then_no_animation_runs() {
        let mut app = App::from_config(&AppConfig::default());
        let _task = navigate(&mut app, Page::Home);
        let _task = routers::sidebar::route_intent(
            &mut app,
            SidebarIntent::Step(SidebarStep::ReleaseSuppression),
        );
        let _task = routers::sidebar::route_intent(
            &mut app,
            SidebarIntent::TogglePressed,
        );
        assert!(app.is_animating());

        app.now = Instant::now();
        let _task = navigate(&mut app, Page::Tracks);

        assert!(!app.is_animating());
    }

    #[test]
    fn given_listing_from_earlier_visit_when_reload_fails_then_browser_is_empty()
     {
        let mut app = App::from_config(&AppConfig::default());
        let _task = navigate(&mut app, Page::Browser);
        let generation = app.widgets.files.generation();
        let _task = routers::files::route_intent(
            &mut app,
            FilesIntent::Loaded {
                generation,
                files: vec![FileDescriptor::new("old.mid")],
            },
        );
        assert_eq!(app.widgets.files.vm().items, ["old.mid"]);

        let _task = navigate(&mut app, Page::Home);
        let _task = navigate(&mut app, Page::Browser);
        let generation = app.widgets.files.generation();
        let _task = routers::files::route_intent(
            &mut app,
            FilesIntent::LoadFailed {
                generation,
                message: String::from("connection refused"),
            },
        );

        assert!(app.widgets.files.vm().items.is_empty());
    }
}
