use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, column, container, horizontal_space, mouse_area, row, text};
use iced::{Alignment, Border, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod catalog;
mod state;
mod ui;

use catalog::error::CatalogError;
use catalog::loader;
use catalog::manifest::Manifest;
use state::filter::FocusMove;
use state::location::Location;
use state::menu::MenuGroup;
use ui::gallery::GalleryScreen;
use ui::home::HomeScreen;
use ui::lightbox::{self, Lightbox};

/// The two pages of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Gallery,
}

// Dropdown menus in the navigation bar.
const MENU_VIEW: usize = 0;
const MENU_CATALOG: usize = 1;
const MENU_COUNT: usize = 2;

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch page; resets that page's catalog state and reloads.
    Navigate(Screen),
    /// Pick a different manifest file with the native dialog.
    OpenManifest,
    /// Refetch the manifest and fully replace the current view's state.
    Reload,
    /// Manifest load finished; `generation` guards against stale results.
    ManifestLoaded {
        generation: u64,
        result: Result<Manifest, CatalogError>,
    },
    ToggleMenu(usize),
    /// Activation outside every dropdown.
    CloseMenus,
    /// Escape anywhere: close the lightbox if open, else the menus.
    EscapePressed,
    /// Enter/Space: equivalent to clicking whatever holds focus.
    ActivateFocused,
    SelectCategory(String),
    /// Arrow/Home/End over the pill row (or the open lightbox).
    PillFocus(FocusMove),
    /// Open the active screen's lightbox at an entry of the current set.
    OpenEntry(usize),
    LightboxNext,
    LightboxPrev,
    CloseLightbox,
}

/// Main application state
struct ArtCatalog {
    screen: Screen,
    home: HomeScreen,
    gallery: GalleryScreen,
    menus: MenuGroup,
    /// Trigger that regains focus after Escape closes its menu.
    menu_focus: Option<usize>,
    location: Location,
    manifest_path: PathBuf,
    /// Item image paths resolve relative to the manifest's directory.
    base_dir: PathBuf,
    generation: u64,
    load_pending: bool,
}

impl ArtCatalog {
    fn new() -> (Self, Task<Message>) {
        let manifest_path = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(loader::DEFAULT_MANIFEST_PATH));
        let base_dir = dir_of(&manifest_path);

        let mut app = ArtCatalog {
            screen: Screen::Home,
            home: HomeScreen::Loading,
            gallery: GalleryScreen::Loading,
            menus: MenuGroup::new(MENU_COUNT),
            menu_focus: None,
            location: Location::new(),
            manifest_path,
            base_dir,
            generation: 0,
            load_pending: false,
        };
        let load = app.begin_load();
        (app, load)
    }

    /// Start a fresh manifest load for the current screen. The previous
    /// screen state (and its lightbox) is released first; the view area
    /// shows the loading placeholder until the result arrives.
    fn begin_load(&mut self) -> Task<Message> {
        self.generation += 1;
        self.load_pending = true;

        match self.screen {
            Screen::Home => {
                std::mem::replace(&mut self.home, HomeScreen::Loading).dispose();
            }
            Screen::Gallery => {
                std::mem::replace(&mut self.gallery, GalleryScreen::Loading).dispose();
            }
        }

        let generation = self.generation;
        let path = self.manifest_path.clone();
        tracing::info!(path = %path.display(), "loading manifest");
        Task::perform(loader::load(path), move |result| Message::ManifestLoaded {
            generation,
            result,
        })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                self.menus.close_all();
                self.menu_focus = None;
                self.screen = screen;
                self.begin_load()
            }
            Message::OpenManifest => {
                self.menus.close_all();
                let picked = FileDialog::new()
                    .set_title("Select Catalog Manifest")
                    .add_filter("JSON manifest", &["json"])
                    .pick_file();

                if let Some(path) = picked {
                    tracing::info!(path = %path.display(), "manifest path changed");
                    self.base_dir = dir_of(&path);
                    self.manifest_path = path;
                    self.begin_load()
                } else {
                    Task::none()
                }
            }
            Message::Reload => {
                self.menus.close_all();
                if self.load_pending {
                    // One load per view at a time; a pending fetch is never
                    // superseded.
                    tracing::debug!("load already pending, ignoring reload");
                    Task::none()
                } else {
                    self.begin_load()
                }
            }
            Message::ManifestLoaded { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(generation, "discarding stale load result");
                    return Task::none();
                }
                self.load_pending = false;
                match self.screen {
                    Screen::Home => {
                        self.home = HomeScreen::from_result(result, &self.base_dir);
                    }
                    Screen::Gallery => {
                        self.gallery =
                            GalleryScreen::from_result(result, &self.base_dir, &self.location);
                    }
                }
                Task::none()
            }
            Message::ToggleMenu(index) => {
                self.menu_focus = Some(index);
                self.menus.toggle(index);
                Task::none()
            }
            Message::CloseMenus => {
                self.menus.close_all();
                self.menu_focus = None;
                Task::none()
            }
            Message::EscapePressed => {
                let lightbox_open = self.active_lightbox().is_some_and(Lightbox::is_open);
                if lightbox_open {
                    if let Some(lightbox) = self.active_lightbox_mut() {
                        lightbox.close();
                    }
                } else if let Some(trigger) = self.menus.close_all() {
                    // Focus returns to the trigger whose menu just closed.
                    self.menu_focus = Some(trigger);
                }
                Task::none()
            }
            Message::ActivateFocused => {
                if let Some(index) = self.menu_focus {
                    self.menus.toggle(index);
                } else if self.screen == Screen::Gallery {
                    self.gallery.activate_focused(&self.location);
                }
                Task::none()
            }
            Message::SelectCategory(category) => {
                self.menus.close_all();
                self.menu_focus = None;
                self.gallery.select_category(&category, &self.location);
                Task::none()
            }
            Message::PillFocus(direction) => {
                let lightbox_open = self.active_lightbox().is_some_and(Lightbox::is_open);
                if lightbox_open {
                    if let Some(lightbox) = self.active_lightbox_mut() {
                        match direction {
                            FocusMove::Next => lightbox.next(),
                            FocusMove::Previous => lightbox.prev(),
                            _ => {}
                        }
                    }
                } else if self.screen == Screen::Gallery {
                    self.gallery.move_focus(direction, &self.location);
                }
                Task::none()
            }
            Message::OpenEntry(index) => {
                self.menus.close_all();
                self.menu_focus = None;
                if let Some(lightbox) = self.active_lightbox_mut() {
                    lightbox.open(index);
                }
                Task::none()
            }
            Message::LightboxNext => {
                if let Some(lightbox) = self.active_lightbox_mut() {
                    lightbox.next();
                }
                Task::none()
            }
            Message::LightboxPrev => {
                if let Some(lightbox) = self.active_lightbox_mut() {
                    lightbox.prev();
                }
                Task::none()
            }
            Message::CloseLightbox => {
                if let Some(lightbox) = self.active_lightbox_mut() {
                    lightbox.close();
                }
                Task::none()
            }
        }
    }

    fn active_lightbox_mut(&mut self) -> Option<&mut Lightbox> {
        match self.screen {
            Screen::Home => self.home.lightbox_mut(),
            Screen::Gallery => self.gallery.lightbox_mut(),
        }
    }

    fn active_lightbox(&self) -> Option<&Lightbox> {
        match self.screen {
            Screen::Home => self.home.lightbox(),
            Screen::Gallery => self.gallery.lightbox(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let content = match self.screen {
            Screen::Home => self.home.view(&self.base_dir),
            Screen::Gallery => self.gallery.view(),
        };

        // Presses on empty space around the content count as "outside all
        // dropdowns" and close the group.
        let content = mouse_area(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(Message::CloseMenus);

        let page = column![self.nav_bar(), content];
        lightbox::overlay(page.into(), self.active_lightbox())
    }

    fn nav_bar(&self) -> Element<'_, Message> {
        let bar = row![
            self.menu("View", MENU_VIEW),
            self.menu("Catalog", MENU_CATALOG),
            horizontal_space(),
            text("Art Catalog").size(16),
        ]
        .spacing(12)
        .padding(12)
        .align_y(Alignment::Start);

        container(bar)
            .width(Length::Fill)
            .style(container::bordered_box)
            .into()
    }

    /// One dropdown: the trigger plus, when expanded, its item panel. The
    /// trigger's visible marker mirrors the expanded state.
    fn menu(&self, label: &str, index: usize) -> Element<'_, Message> {
        let expanded = self.menus.expanded(index);
        let marker = if expanded { "▴" } else { "▾" };

        let trigger = button(text(format!("{label} {marker}")).size(14))
            .on_press(Message::ToggleMenu(index))
            .style(trigger_style(expanded, self.menu_focus == Some(index)));

        if !expanded {
            return column![trigger].into();
        }

        let items: Vec<(&'static str, Message)> = match index {
            MENU_VIEW => vec![
                ("Home", Message::Navigate(Screen::Home)),
                ("Gallery", Message::Navigate(Screen::Gallery)),
            ],
            _ => vec![
                ("Open manifest…", Message::OpenManifest),
                ("Reload", Message::Reload),
            ],
        };

        let panel = items
            .into_iter()
            .fold(column![].spacing(2), |panel, (item, message)| {
                panel.push(
                    button(text(item).size(14))
                        .on_press(message)
                        .style(button::text)
                        .width(Length::Fill),
                )
            });

        column![
            trigger,
            container(panel)
                .padding(6)
                .width(Length::Fixed(180.0))
                .style(container::rounded_box),
        ]
        .spacing(4)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Keyboard contract: Escape cancels, arrows/Home/End drive roving focus,
/// Enter/Space activate like a click.
fn handle_key(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::EscapePressed),
        Key::Named(Named::ArrowRight) | Key::Named(Named::ArrowDown) => {
            Some(Message::PillFocus(FocusMove::Next))
        }
        Key::Named(Named::ArrowLeft) | Key::Named(Named::ArrowUp) => {
            Some(Message::PillFocus(FocusMove::Previous))
        }
        Key::Named(Named::Home) => Some(Message::PillFocus(FocusMove::First)),
        Key::Named(Named::End) => Some(Message::PillFocus(FocusMove::Last)),
        Key::Named(Named::Enter) | Key::Named(Named::Space) => Some(Message::ActivateFocused),
        _ => None,
    }
}

/// Focused triggers carry the focus ring; expanded ones render filled.
fn trigger_style(
    expanded: bool,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let mut style = if expanded {
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

fn dir_of(manifest_path: &Path) -> PathBuf {
    manifest_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application("Art Catalog", ArtCatalog::update, ArtCatalog::view)
        .subscription(ArtCatalog::subscription)
        .theme(ArtCatalog::theme)
        .centered()
        .run_with(ArtCatalog::new)
}
