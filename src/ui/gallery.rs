/// Gallery screen
///
/// The filterable, categorized grid: a row of category pills above the grid
/// of the active category's items. Selection state lives in the
/// `FilterSelector`; the pill row and grid are projections of it. On every
/// selection change the grid entry set is rebuilt and the lightbox is
/// destroyed and re-initialized against the new set.
use std::path::{Path, PathBuf};

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Border, Element, Length, Theme};
use iced_aw::Wrap;

use crate::catalog::error::CatalogError;
use crate::catalog::index::{CatalogIndex, CatalogItem};
use crate::catalog::manifest::Manifest;
use crate::state::filter::{FilterSelector, FocusMove};
use crate::state::location::Location;
use crate::ui::card::card;
use crate::ui::lightbox::{Lightbox, LightboxConfig};
use crate::ui::status;
use crate::Message;

#[derive(Debug)]
pub enum GalleryScreen {
    Loading,
    Failed { message: String },
    Ready(GalleryState),
}

#[derive(Debug)]
pub struct GalleryState {
    index: CatalogIndex,
    filter: FilterSelector,
    /// Entries currently in the grid, i.e. the active category's items.
    entries: Vec<CatalogItem>,
    lightbox: Option<Lightbox>,
    /// Pill holding roving keyboard focus. Coupled to selection: arrow
    /// moves activate the pill they land on.
    focused_pill: usize,
    base_dir: PathBuf,
}

impl GalleryScreen {
    /// Turn a finished load into the screen state, restoring the active
    /// category from the stored location fragment.
    pub fn from_result(
        result: Result<Manifest, CatalogError>,
        base_dir: &Path,
        location: &Location,
    ) -> Self {
        let index = match result {
            Ok(manifest) => CatalogIndex::build(&manifest),
            Err(error) => return Self::failed(error),
        };
        if let Err(error) = index.require_categories() {
            return Self::failed(error);
        }

        let mut filter = FilterSelector::new(index.categories().to_vec());
        let fragment = location.read_fragment().unwrap_or_default();
        filter.init_from_fragment(&fragment);

        let mut state = GalleryState {
            focused_pill: filter.active_index(),
            index,
            filter,
            entries: Vec::new(),
            lightbox: None,
            base_dir: base_dir.to_path_buf(),
        };
        state.populate();
        tracing::info!(
            active = state.filter.active_category(),
            categories = state.filter.categories().len(),
            "gallery screen ready"
        );
        GalleryScreen::Ready(state)
    }

    fn failed(error: CatalogError) -> Self {
        tracing::warn!(%error, "gallery screen load failed");
        GalleryScreen::Failed { message: error.user_message() }
    }

    /// Release the lightbox before this screen is replaced.
    pub fn dispose(self) {
        if let GalleryScreen::Ready(GalleryState { lightbox: Some(lightbox), .. }) = self {
            lightbox.destroy();
        }
    }

    /// Pill click (or activation key on the focused pill).
    pub fn select_category(&mut self, category: &str, location: &Location) {
        if let GalleryScreen::Ready(state) = self {
            state.select(category, location);
        }
    }

    /// Arrow/Home/End navigation: move focus and activate in one step.
    pub fn move_focus(&mut self, direction: FocusMove, location: &Location) {
        if let GalleryScreen::Ready(state) = self {
            let next = state.filter.move_focus(direction, state.focused_pill);
            let category = state.filter.categories()[next].clone();
            state.select(&category, location);
        }
    }

    /// Re-activate whatever pill currently holds focus.
    pub fn activate_focused(&mut self, location: &Location) {
        if let GalleryScreen::Ready(state) = self {
            let category = state.filter.categories()[state.focused_pill].clone();
            state.select(&category, location);
        }
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        match self {
            GalleryScreen::Ready(state) => state.lightbox.as_ref(),
            _ => None,
        }
    }

    pub fn lightbox_mut(&mut self) -> Option<&mut Lightbox> {
        match self {
            GalleryScreen::Ready(state) => state.lightbox.as_mut(),
            _ => None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self {
            GalleryScreen::Loading => status::loading_view(),
            GalleryScreen::Failed { message } => status::error_view(message),
            GalleryScreen::Ready(state) => state.view(),
        }
    }
}

impl GalleryState {
    fn select(&mut self, category: &str, location: &Location) {
        if !self.filter.select(category) {
            return;
        }
        self.focused_pill = self.filter.active_index();
        location.write_fragment(&self.filter.fragment());
        self.populate();
    }

    /// Rebuild the grid entry set for the active category, then replace the
    /// lightbox: destroy the instance bound to the previous entries before
    /// initializing one for the new ones.
    fn populate(&mut self) {
        self.entries = self.index.items_in(self.filter.active_category());
        if let Some(previous) = self.lightbox.take() {
            previous.destroy();
        }
        if !self.entries.is_empty() {
            self.lightbox = Some(Lightbox::init(LightboxConfig::new(
                self.entries.clone(),
                self.base_dir.clone(),
            )));
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let pills = self
            .filter
            .categories()
            .iter()
            .enumerate()
            .fold(row![].spacing(8), |pills, (i, category)| {
                let active = i == self.filter.active_index();
                let focused = self.filter.is_tab_stop(i);
                pills.push(
                    button(text(category.clone()).size(14))
                        .on_press(Message::SelectCategory(category.clone()))
                        .padding([6.0, 14.0])
                        .style(pill_style(active, focused)),
                )
            });

        let grid: Element<'_, Message> = if self.entries.is_empty() {
            status::empty_category_view()
        } else {
            let cards: Vec<Element<'_, Message>> = self
                .entries
                .iter()
                .enumerate()
                .map(|(i, item)| card(item, &self.base_dir, Message::OpenEntry(i)))
                .collect();
            Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0).into()
        };

        scrollable(
            column![
                text("Gallery").size(28),
                container(pills).width(Length::Fill),
                grid
            ]
            .spacing(20)
            .padding(24),
        )
        .into()
    }
}

/// Active pills render filled; the pill holding roving focus carries the
/// focus ring so the keyboard position stays visible.
fn pill_style(
    active: bool,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let mut style = if active {
            button::primary(theme, status)
        } else {
            button::secondary(theme, status)
        };
        if focused {
            style.border = Border {
                color: theme.palette().primary,
                width: 2.0,
                radius: style.border.radius,
            };
        }
        style
    }
}
