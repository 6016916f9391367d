use iced::widget::{Stack, column, container, text};
use iced::{Element, Length, Padding, Theme};

use super::{App, AppEvent};
use crate::pages::Page;
use crate::theme::ThemeProps;
use crate::widgets::files::FilesEvent;
use crate::widgets::files::view::FilesViewProps;
use crate::widgets::popup::PopupEvent;
use crate::widgets::popup::view::PopupViewProps;
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::sidebar::view::SidebarViewProps;
use crate::widgets::{files, popup, sidebar};

const PLACEHOLDER_TITLE_SIZE: f32 = 28.0;
const PLACEHOLDER_BODY_SIZE: f32 = 15.0;

/// Render the sidebar over the home section holding the page content.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = ThemeProps::new(app.theme_manager.current());
    let background = theme.theme.iced_palette().background;

    let sidebar_vm = app.widgets.sidebar.vm(app.page, app.now);
    let home_offset = sidebar_vm.home_section_offset();
    let sidebar = sidebar::view::view(SidebarViewProps {
        vm: sidebar_vm,
        theme,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)));

    let home_section = container(page_content(app, theme))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: home_offset,
            ..Padding::ZERO
        })
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        });

    Stack::with_children(vec![home_section.into(), sidebar])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn page_content<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    match app.page {
        Page::Home => popup::view::view(PopupViewProps {
            vm: app.widgets.popup.vm(app.now),
            theme,
        })
        .map(|intent| AppEvent::Popup(PopupEvent::Intent(intent))),
        Page::Browser => files::view::view(FilesViewProps {
            vm: app.widgets.files.vm(),
            theme,
        })
        .map(|intent| AppEvent::Files(FilesEvent::Intent(intent))),
        page => placeholder(page, theme),
    }
}

fn placeholder<'a>(
    page: Page,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let title_color = palette.sidebar;
    let body_color = palette.dim_foreground;

    container(
        column![
            text(page.label()).size(PLACEHOLDER_TITLE_SIZE).style(move |_| {
                iced::widget::text::Style {
                    color: Some(title_color),
                }
            }),
            text("Nothing here yet.").size(PLACEHOLDER_BODY_SIZE).style(
                move |_| iced::widget::text::Style {
                    color: Some(body_color),
                }
            ),
        ]
        .spacing(12),
    )
    .padding(32)
    .width(Length::Fill)
    .into()
}
