/// Lightbox overlay
///
/// The modal image viewer. A `Lightbox` is an owned resource held by the
/// active screen: whenever the visible entry set changes, the screen
/// destroys the previous instance and initializes a fresh one scoped to the
/// new entries, because an instance indexes its entry list at init time and
/// would otherwise reference stale entries.
///
/// Entries are grouped by category: opening one entry only cycles through
/// entries sharing its category tag.
use std::path::PathBuf;

use iced::widget::{button, center, column, container, horizontal_space, image, mouse_area, opaque,
    row, stack, text};
use iced::{Alignment, Color, Element, Length};

use crate::catalog::index::CatalogItem;
use crate::Message;

const VIEWER_WIDTH: f32 = 760.0;
const VIEWER_HEIGHT: f32 = 480.0;

/// Configuration handed to `Lightbox::init`.
#[derive(Debug, Clone)]
pub struct LightboxConfig {
    pub entries: Vec<CatalogItem>,
    pub base_dir: PathBuf,
    /// Wrap around when stepping past either end of a category group.
    pub loop_within_group: bool,
    /// Pressing the image itself advances to the next entry.
    pub touch_navigation: bool,
}

impl LightboxConfig {
    pub fn new(entries: Vec<CatalogItem>, base_dir: PathBuf) -> Self {
        LightboxConfig {
            entries,
            base_dir,
            loop_within_group: true,
            touch_navigation: true,
        }
    }
}

#[derive(Debug)]
pub struct Lightbox {
    entries: Vec<CatalogItem>,
    base_dir: PathBuf,
    loop_within_group: bool,
    touch_navigation: bool,
    current: Option<usize>,
}

impl Lightbox {
    /// Bind a fresh instance to the current entry set.
    pub fn init(config: LightboxConfig) -> Self {
        tracing::debug!(entries = config.entries.len(), "lightbox initialized");
        Lightbox {
            entries: config.entries,
            base_dir: config.base_dir,
            loop_within_group: config.loop_within_group,
            touch_navigation: config.touch_navigation,
            current: None,
        }
    }

    /// Release the instance. Must be called before a replacement is
    /// initialized for a changed entry set.
    pub fn destroy(self) {
        tracing::debug!(entries = self.entries.len(), "lightbox destroyed");
    }

    pub fn open(&mut self, index: usize) {
        if index < self.entries.len() {
            self.current = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_entry(&self) -> Option<&CatalogItem> {
        self.current.map(|i| &self.entries[i])
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    /// One-based position of the open entry within its category group,
    /// together with the group size.
    pub fn position_in_group(&self) -> Option<(usize, usize)> {
        let current = self.current?;
        let group = self.group_indices(current);
        let pos = group.iter().position(|&i| i == current)?;
        Some((pos + 1, group.len()))
    }

    fn step(&mut self, delta: isize) {
        let Some(current) = self.current else {
            return;
        };
        let group = self.group_indices(current);
        let len = group.len() as isize;
        let pos = group.iter().position(|&i| i == current).unwrap_or(0) as isize;

        let next = if self.loop_within_group {
            (pos + delta).rem_euclid(len)
        } else {
            let candidate = pos + delta;
            if candidate < 0 || candidate >= len {
                return;
            }
            candidate
        };
        self.current = Some(group[next as usize]);
    }

    /// Indices of every entry sharing `of`'s category, in entry order.
    fn group_indices(&self, of: usize) -> Vec<usize> {
        let category = &self.entries[of].category;
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.category == *category)
            .map(|(i, _)| i)
            .collect()
    }

    fn view(&self) -> Option<Element<'_, Message>> {
        let entry = self.current_entry()?;
        let (pos, group_len) = self.position_in_group()?;

        let picture = image(image::Handle::from_path(self.base_dir.join(&entry.src)))
            .width(Length::Fixed(VIEWER_WIDTH))
            .height(Length::Fixed(VIEWER_HEIGHT));
        let picture: Element<'_, Message> = if self.touch_navigation {
            mouse_area(picture).on_press(Message::LightboxNext).into()
        } else {
            picture.into()
        };

        let header = row![
            text(entry.title.clone()).size(20),
            horizontal_space(),
            button(text("Close").size(14))
                .on_press(Message::CloseLightbox)
                .style(button::text),
        ]
        .align_y(Alignment::Center);

        let can_step = group_len > 1;
        let controls = row![
            button(text("Prev").size(14))
                .on_press_maybe(can_step.then_some(Message::LightboxPrev))
                .style(button::secondary),
            text(format!("{pos} / {group_len}")).size(14),
            button(text("Next").size(14))
                .on_press_maybe(can_step.then_some(Message::LightboxNext))
                .style(button::secondary),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let mut panel = column![header, picture, controls]
            .spacing(12)
            .align_x(Alignment::Center);
        if let Some(caption) = &entry.caption {
            panel = panel.push(
                text(caption.clone())
                    .size(14)
                    .color(Color::from_rgb8(0xa8, 0xa8, 0xa8)),
            );
        }

        Some(
            container(panel)
                .padding(20)
                .style(container::rounded_box)
                .into(),
        )
    }
}

/// Lay the lightbox over `base` when it is open; pressing the dimmed
/// backdrop closes it.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    lightbox: Option<&'a Lightbox>,
) -> Element<'a, Message> {
    let Some(viewer) = lightbox.and_then(|lb| lb.view()) else {
        return base;
    };

    let backdrop = center(opaque(viewer)).style(|_theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.85).into()),
        ..container::Style::default()
    });

    stack![
        base,
        opaque(mouse_area(backdrop).on_press(Message::CloseLightbox))
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, category: &str) -> CatalogItem {
        CatalogItem {
            src: format!("{title}.jpg"),
            thumb: None,
            title: title.to_owned(),
            caption: None,
            added: None,
            category: category.to_owned(),
        }
    }

    fn lightbox(entries: Vec<CatalogItem>) -> Lightbox {
        Lightbox::init(LightboxConfig::new(entries, PathBuf::from(".")))
    }

    #[test]
    fn test_starts_closed_and_opens_in_range() {
        let mut lb = lightbox(vec![entry("a", "X")]);
        assert!(!lb.is_open());

        lb.open(5);
        assert!(!lb.is_open());

        lb.open(0);
        assert!(lb.is_open());
        assert_eq!(lb.current_entry().unwrap().title, "a");
    }

    #[test]
    fn test_navigation_stays_within_category_group() {
        // a1, b1, a2: opening a1 must cycle a1 <-> a2, never through b1.
        let mut lb = lightbox(vec![entry("a1", "A"), entry("b1", "B"), entry("a2", "A")]);
        lb.open(0);

        lb.next();
        assert_eq!(lb.current_entry().unwrap().title, "a2");
        lb.next();
        assert_eq!(lb.current_entry().unwrap().title, "a1");
        lb.prev();
        assert_eq!(lb.current_entry().unwrap().title, "a2");
    }

    #[test]
    fn test_position_in_group_ignores_other_categories() {
        let mut lb = lightbox(vec![entry("a1", "A"), entry("b1", "B"), entry("a2", "A")]);
        lb.open(2);
        assert_eq!(lb.position_in_group(), Some((2, 2)));
    }

    #[test]
    fn test_without_looping_navigation_stops_at_the_ends() {
        let mut config = LightboxConfig::new(
            vec![entry("a1", "A"), entry("a2", "A")],
            PathBuf::from("."),
        );
        config.loop_within_group = false;
        let mut lb = Lightbox::init(config);

        lb.open(0);
        lb.prev();
        assert_eq!(lb.current_entry().unwrap().title, "a1");
        lb.next();
        lb.next();
        assert_eq!(lb.current_entry().unwrap().title, "a2");
    }

    #[test]
    fn test_close_resets_position() {
        let mut lb = lightbox(vec![entry("a", "X")]);
        lb.open(0);
        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.position_in_group(), None);
    }
}
