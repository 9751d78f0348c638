/// Catalog entry cards
///
/// DOM-card construction, iced style: one clickable card per catalog item,
/// thumbnail on top, title and optional caption below. Clicking a card asks
/// the active screen to open its lightbox at that entry.
use std::path::Path;

use iced::widget::{button, column, image, text};
use iced::{Alignment, Color, Element, Length};

use crate::catalog::index::CatalogItem;
use crate::Message;

const CARD_WIDTH: f32 = 220.0;
const THUMB_HEIGHT: f32 = 160.0;

pub fn card(item: &CatalogItem, base_dir: &Path, on_open: Message) -> Element<'static, Message> {
    let thumb = image(image::Handle::from_path(base_dir.join(item.grid_src())))
        .width(Length::Fixed(CARD_WIDTH - 20.0))
        .height(Length::Fixed(THUMB_HEIGHT));

    let mut meta = column![text(item.title.clone()).size(16)].spacing(4);
    if let Some(caption) = &item.caption {
        meta = meta.push(
            text(caption.clone())
                .size(13)
                .color(Color::from_rgb8(0xa8, 0xa8, 0xa8)),
        );
    }

    let content = column![thumb, meta]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    button(content)
        .on_press(on_open)
        .style(button::text)
        .padding(10)
        .width(Length::Fixed(CARD_WIDTH))
        .into()
}
