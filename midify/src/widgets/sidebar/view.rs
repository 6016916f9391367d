use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Border, Element, Length, Theme, alignment};
use midify_ui_controls::ToggleIcon;

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::pages::Page;
use crate::theme::{ThemeProps, fade};

const LINK_HEIGHT: f32 = 50.0;
const LINK_RADIUS: f32 = 12.0;
const GLYPH_WIDTH: f32 = 46.0;
const GLYPH_SIZE: f32 = 20.0;
const LABEL_SIZE: f32 = 15.0;
const LOGO_SIZE: f32 = 22.0;

/// Props for the sidebar view.
#[derive(Debug, Clone)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the navigation sidebar. The home section is composed externally.
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let vm = props.vm;

    let logo_label: Element<'_, SidebarIntent, Theme, iced::Renderer> =
        match vm.label_opacity(0) {
            Some(opacity) => {
                label("Midify", LOGO_SIZE, fade(palette.foreground, opacity))
            },
            None => Space::new().into(),
        };
    let logo = row![
        container(label("♪", LOGO_SIZE, palette.accent))
            .width(Length::Fixed(GLYPH_WIDTH))
            .align_x(alignment::Horizontal::Center),
        logo_label,
    ]
    .align_y(alignment::Vertical::Center)
    .height(Length::Fixed(LINK_HEIGHT));

    let links = Column::with_children(Page::ALL.into_iter().map(|page| {
        nav_link(
            page,
            page == vm.active_page,
            vm.label_opacity(page.nav_index()),
            props.theme,
        )
    }))
    .spacing(4);

    let toggle_glyph = match vm.projection.icon {
        ToggleIcon::ChevronsLeft => "«",
        ToggleIcon::ChevronsRight => "»",
    };
    let toggle = sidebar_button(
        container(label(toggle_glyph, GLYPH_SIZE, palette.foreground))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into(),
        false,
        props.theme,
        SidebarIntent::TogglePressed,
    );

    let content = column![
        logo,
        links,
        Space::new().height(Length::Fill),
        toggle
    ]
    .spacing(12)
    .padding(12)
    .height(Length::Fill);

    let background = palette.sidebar;
    container(content)
        .width(Length::Fixed(vm.sidebar_width()))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn nav_link<'a>(
    page: Page,
    is_active: bool,
    label_opacity: Option<f32>,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let color = if is_active {
        palette.sidebar
    } else {
        palette.foreground
    };

    let icon = container(label(page.glyph(), GLYPH_SIZE, color))
        .width(Length::Fixed(GLYPH_WIDTH))
        .align_x(alignment::Horizontal::Center);
    let content = match label_opacity {
        Some(opacity) => {
            let name = label(page.label(), LABEL_SIZE, fade(color, opacity));
            row![icon, name]
        },
        None => row![icon],
    }
    .align_y(alignment::Vertical::Center);

    sidebar_button(
        content.into(),
        is_active,
        theme,
        SidebarIntent::NavLinkPressed(page),
    )
}

fn sidebar_button<'a>(
    content: Element<'a, SidebarIntent, Theme, iced::Renderer>,
    is_active: bool,
    theme: ThemeProps<'a>,
    on_press: SidebarIntent,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let active_background = palette.foreground;
    let hover_background = palette.overlay;
    let text_color = palette.foreground;

    button(
        container(content)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(on_press)
    .width(Length::Fill)
    .height(Length::Fixed(LINK_HEIGHT))
    .padding(0)
    .style(move |_, status| {
        let background = if is_active {
            Some(active_background.into())
        } else if status == button::Status::Hovered {
            Some(hover_background.into())
        } else {
            None
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: LINK_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}

fn label<'a>(
    value: &'a str,
    size: f32,
    color: iced::Color,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    text(value)
        .size(size)
        .style(move |_| iced::widget::text::Style { color: Some(color) })
        .into()
}
