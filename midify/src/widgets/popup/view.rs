use iced::widget::{
    Row, Space, Stack, button, column, container, mouse_area, row, text,
    text_input,
};
use iced::{Border, Color, Element, Length, Theme, alignment};
use midify_ui_controls::{PopupPane, Trigger};

use super::event::PopupIntent;
use super::model::{PopupColumns, PopupViewModel};
use crate::theme::{IcedColorPalette, ThemeProps, fade};

const POPUP_HEIGHT: f32 = 220.0;
const POPUP_RADIUS: f32 = 16.0;
const POPUP_PADDING: f32 = 24.0;
const HALF_BUTTON_WIDTH: f32 = 180.0;
const TITLE_SIZE: f32 = 32.0;
const HEADING_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 15.0;

/// Props for the Home page popup view.
#[derive(Debug, Clone)]
pub(crate) struct PopupViewProps<'a> {
    pub(crate) vm: PopupViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the Home page content with the popup and, when present, the
/// acknowledgment overlay on top.
pub(crate) fn view(
    props: PopupViewProps<'_>,
) -> Element<'_, PopupIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let vm = props.vm;

    let header = column![
        label("Welcome to Midify", TITLE_SIZE, palette.sidebar),
        label(
            "Type a melody description or upload a MIDI file.",
            BODY_SIZE,
            palette.dim_foreground,
        ),
    ]
    .spacing(8)
    .align_x(alignment::Horizontal::Center);

    let half_buttons = Row::with_children(Trigger::ALL.into_iter().map(
        |trigger| {
            half_button(
                trigger,
                vm.active_tab == Some(trigger.index()),
                &palette,
            )
        },
    ));

    let content = column![header, half_buttons, popup_row(&vm, &palette)]
        .spacing(32)
        .padding(32)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let Some(acknowledgment) = vm.acknowledgment else {
        return content.into();
    };

    Stack::with_children(vec![
        content.into(),
        acknowledgment_overlay(acknowledgment.to_string(), &palette),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn half_button<'a>(
    trigger: Trigger,
    is_active: bool,
    palette: &IcedColorPalette,
) -> Element<'a, PopupIntent, Theme, iced::Renderer> {
    let title = match trigger {
        Trigger::Left => "Text",
        Trigger::Right => "File",
    };
    let active_background = palette.accent;
    let hover_background = palette.accent_hover;
    let idle_background = palette.foreground;
    let active_text = palette.foreground;
    let idle_text = palette.sidebar;
    let radius = match trigger {
        Trigger::Left => iced::border::Radius {
            top_left: POPUP_RADIUS,
            bottom_left: POPUP_RADIUS,
            ..iced::border::Radius::default()
        },
        Trigger::Right => iced::border::Radius {
            top_right: POPUP_RADIUS,
            bottom_right: POPUP_RADIUS,
            ..iced::border::Radius::default()
        },
    };

    button(
        container(text(title).size(BODY_SIZE))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(PopupIntent::TriggerPressed(trigger))
    .width(Length::Fixed(HALF_BUTTON_WIDTH))
    .padding(12)
    .style(move |_, status| {
        let (background, text_color) = if is_active {
            (active_background, active_text)
        } else if status == button::Status::Hovered {
            (hover_background, active_text)
        } else {
            (idle_background, idle_text)
        };

        button::Style {
            background: Some(background.into()),
            text_color,
            border: Border {
                radius,
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}

fn popup_row<'a>(
    vm: &PopupViewModel<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, PopupIntent, Theme, iced::Renderer> {
    let columns = vm.columns();
    if !vm.projection.displayed || columns.popup == 0 {
        return Space::new().height(Length::Fixed(POPUP_HEIGHT)).into();
    }

    let panes = PopupPane::ALL
        .into_iter()
        .filter_map(|pane| {
            let projection = vm.projection.pane(pane);
            projection.displayed.then(|| {
                pane_content(pane, projection.opacity, vm.text_value, palette)
            })
        })
        .collect::<Vec<_>>();

    let background = fade(palette.overlay, vm.projection.opacity);
    let popup = container(Stack::with_children(panes))
        .width(Length::FillPortion(columns.popup))
        .height(Length::Fixed(POPUP_HEIGHT))
        .padding(POPUP_PADDING)
        .clip(true)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            border: Border {
                radius: POPUP_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    row![gap(columns, Side::Left), popup, gap(columns, Side::Right)]
        .width(Length::Fill)
        .into()
}

enum Side {
    Left,
    Right,
}

fn gap<'a>(
    columns: PopupColumns,
    side: Side,
) -> Element<'a, PopupIntent, Theme, iced::Renderer> {
    let portion = match side {
        Side::Left => columns.left,
        Side::Right => columns.right,
    };
    let width = if portion == 0 {
        Length::Fixed(0.0)
    } else {
        Length::FillPortion(portion)
    };

    Space::new().width(width).into()
}

fn pane_content<'a>(
    pane: PopupPane,
    opacity: f32,
    text_value: &'a str,
    palette: &IcedColorPalette,
) -> Element<'a, PopupIntent, Theme, iced::Renderer> {
    let foreground = fade(palette.foreground, opacity);
    let dim = fade(palette.dim_foreground, opacity);

    match pane {
        PopupPane::TextInput => {
            let input = text_input("Type something…", text_value)
                .on_input(PopupIntent::TextChanged)
                .on_submit(PopupIntent::SubmitText)
                .padding(10)
                .size(BODY_SIZE)
                .style(move |theme, status| {
                    let base = text_input::default(theme, status);
                    text_input::Style {
                        value: fade(base.value, opacity),
                        placeholder: fade(base.placeholder, opacity),
                        ..base
                    }
                });

            column![
                label("Enter some text", HEADING_SIZE, foreground),
                input,
                action_button(
                    "Submit",
                    PopupIntent::SubmitText,
                    opacity,
                    palette
                ),
            ]
            .spacing(14)
            .into()
        },
        PopupPane::FileUpload => column![
            label("Upload a MIDI file", HEADING_SIZE, foreground),
            label("Files are sent to the Midify server.", BODY_SIZE, dim),
            action_button("Upload", PopupIntent::SubmitFile, opacity, palette),
        ]
        .spacing(14)
        .into(),
    }
}

fn action_button<'a>(
    title: &'a str,
    on_press: PopupIntent,
    opacity: f32,
    palette: &IcedColorPalette,
) -> Element<'a, PopupIntent, Theme, iced::Renderer> {
    let background = fade(palette.accent, opacity);
    let hover_background = fade(palette.accent_hover, opacity);
    let text_color = fade(palette.foreground, opacity);

    button(text(title).size(BODY_SIZE))
        .on_press(on_press)
        .padding([8, 20])
        .style(move |_, status| button::Style {
            background: Some(
                if status == button::Status::Hovered {
                    hover_background
                } else {
                    background
                }
                .into(),
            ),
            text_color,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn acknowledgment_overlay<'a>(
    message: String,
    palette: &IcedColorPalette,
) -> Element<'a, PopupIntent, Theme, iced::Renderer> {
    let card_background = palette.foreground;
    let backdrop = Color {
        a: 0.45,
        ..Color::BLACK
    };

    let card = container(
        column![
            label(message, HEADING_SIZE, palette.sidebar),
            action_button(
                "OK",
                PopupIntent::DismissAcknowledgment,
                1.0,
                palette
            ),
        ]
        .spacing(18)
        .align_x(alignment::Horizontal::Center),
    )
    .padding(POPUP_PADDING)
    .style(move |_| iced::widget::container::Style {
        background: Some(card_background.into()),
        border: Border {
            radius: POPUP_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    mouse_area(
        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_| iced::widget::container::Style {
                background: Some(backdrop.into()),
                ..Default::default()
            }),
    )
    .on_press(PopupIntent::DismissAcknowledgment)
    .into()
}

fn label<'a>(
    value: impl text::IntoFragment<'a>,
    size: f32,
    color: Color,
) -> Element<'a, PopupIntent, Theme, iced::Renderer> {
    text(value)
        .size(size)
        .style(move |_| iced::widget::text::Style { color: Some(color) })
        .into()
}
