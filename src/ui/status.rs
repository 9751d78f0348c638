/// Loading and error placeholders
///
/// A failed or empty load replaces the whole view region with one of these
/// states — never a mix of stale and fresh content.
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Shown while the manifest fetch is pending.
pub fn loading_view() -> Element<'static, Message> {
    let content = column![
        text("Loading gallery...").size(20),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// The single user-visible error state per view: a message plus a retry
/// action that reruns the full load sequence.
pub fn error_view(message: &str) -> Element<'static, Message> {
    let content = column![
        text("Oops! Something went wrong").size(24),
        text(message.to_owned()).size(16),
        button("Try Again").on_press(Message::Reload).padding(10),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Placeholder for a category with zero valid items; the grid area must not
/// be left blank.
pub fn empty_category_view() -> Element<'static, Message> {
    container(text("No artworks in this category yet.").size(16))
        .width(Length::Fill)
        .padding(40)
        .center_x(Length::Fill)
        .into()
}
