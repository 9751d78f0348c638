/// Home screen
///
/// Shows a "latest artworks" strip: the newest items across every category,
/// capped at a fixed count. Orchestrates load → validate → render and owns
/// the lightbox bound to the strip's entry set.
use std::path::Path;

use iced::widget::{column, scrollable, text};
use iced::Element;
use iced_aw::Wrap;

use crate::catalog::error::CatalogError;
use crate::catalog::index::{CatalogIndex, CatalogItem};
use crate::catalog::manifest::Manifest;
use crate::ui::card::card;
use crate::ui::lightbox::{Lightbox, LightboxConfig};
use crate::ui::status;
use crate::Message;

/// Fixed "latest N" cutoff.
pub const LATEST_COUNT: usize = 8;

#[derive(Debug)]
pub enum HomeScreen {
    Loading,
    Failed { message: String },
    Ready { entries: Vec<CatalogItem>, lightbox: Option<Lightbox> },
}

impl HomeScreen {
    /// Turn a finished load into the screen state. Every catalog error is
    /// logged here and becomes the single error state for this view.
    pub fn from_result(result: Result<Manifest, CatalogError>, base_dir: &Path) -> Self {
        let index = match result {
            Ok(manifest) => CatalogIndex::build(&manifest),
            Err(error) => return Self::failed(error),
        };
        if let Err(error) = index.require_items() {
            return Self::failed(error);
        }

        let entries = index.latest(LATEST_COUNT);
        let lightbox = Lightbox::init(LightboxConfig::new(
            entries.clone(),
            base_dir.to_path_buf(),
        ));
        tracing::info!(shown = entries.len(), "home screen ready");
        HomeScreen::Ready { entries, lightbox: Some(lightbox) }
    }

    fn failed(error: CatalogError) -> Self {
        tracing::warn!(%error, "home screen load failed");
        HomeScreen::Failed { message: error.user_message() }
    }

    /// Release the lightbox before this screen is replaced.
    pub fn dispose(self) {
        if let HomeScreen::Ready { lightbox: Some(lightbox), .. } = self {
            lightbox.destroy();
        }
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        match self {
            HomeScreen::Ready { lightbox, .. } => lightbox.as_ref(),
            _ => None,
        }
    }

    pub fn lightbox_mut(&mut self) -> Option<&mut Lightbox> {
        match self {
            HomeScreen::Ready { lightbox, .. } => lightbox.as_mut(),
            _ => None,
        }
    }

    pub fn view(&self, base_dir: &Path) -> Element<'_, Message> {
        match self {
            HomeScreen::Loading => status::loading_view(),
            HomeScreen::Failed { message } => status::error_view(message),
            HomeScreen::Ready { entries, .. } => {
                let cards: Vec<Element<'_, Message>> = entries
                    .iter()
                    .enumerate()
                    .map(|(i, item)| card(item, base_dir, Message::OpenEntry(i)))
                    .collect();
                let grid: Element<'_, Message> =
                    Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0).into();

                scrollable(
                    column![text("Latest artworks").size(28), grid]
                        .spacing(20)
                        .padding(24),
                )
                .into()
            }
        }
    }
}
