use iced::widget::{Column, button, column, container, scrollable, text};
use iced::{Border, Element, Length, Theme};

use super::event::FilesIntent;
use super::model::FilesViewModel;
use crate::theme::ThemeProps;

const TITLE_SIZE: f32 = 28.0;
const ITEM_SIZE: f32 = 15.0;

/// Props for the Browser page file list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FilesViewProps<'a> {
    pub(crate) vm: FilesViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the file list, one clickable item per file.
pub(crate) fn view(
    props: FilesViewProps<'_>,
) -> Element<'_, FilesIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let title_color = palette.sidebar;
    let item_text = palette.sidebar;
    let item_background = palette.foreground;
    let hover_background = palette.accent;
    let hover_text = palette.foreground;

    let items = Column::with_children(props.vm.items.iter().map(|name| {
        button(text(name.as_str()).size(ITEM_SIZE))
            .on_press(FilesIntent::FilePressed { name: name.clone() })
            .width(Length::Fill)
            .padding([10, 16])
            .style(move |_, status| {
                let hovered = status == button::Status::Hovered;
                button::Style {
                    background: Some(
                        if hovered {
                            hover_background
                        } else {
                            item_background
                        }
                        .into(),
                    ),
                    text_color: if hovered { hover_text } else { item_text },
                    border: Border {
                        radius: 8.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .into()
    }))
    .spacing(6);

    let content = column![
        text("Browser")
            .size(TITLE_SIZE)
            .style(move |_| iced::widget::text::Style {
                color: Some(title_color),
            }),
        scrollable(items).height(Length::Fill),
    ]
    .spacing(20);

    container(content)
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
