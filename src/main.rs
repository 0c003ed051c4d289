use iced::widget::{button, column, container, row, scrollable, text, Row};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod photo;
mod state;
mod ui;

use config::AppConfig;
use photo::ingest::{self, IngestOptions};
use state::catalog::Catalog;
use state::data::Category;
use state::forms::{ItemForm, PendingItem};
use state::generator::GeneratorPanel;
use state::library::Library;
use state::navigation::{NavAction, NavState, Screen};
use state::views::DerivedViews;
use ui::photos::PhotoCache;
use ui::screens::{self, ViewContext};

/// Extensions offered by the photo picker
const PHOTO_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Main application state
struct Wardrobe {
    /// Items and outfits, mirrored to the key-value store
    catalog: Catalog<Library>,
    /// Screen, selections, expanded groups
    nav: NavState,
    /// Cached groupings, resolved outfits and pairing suggestions
    views: DerivedViews,
    photos: PhotoCache,
    item_form: ItemForm,
    outfit_name: String,
    generator: GeneratorPanel,
    ingest_options: IngestOptions,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Navigation or selection change
    Nav(NavAction),
    ItemNameChanged(String),
    ItemCategoryChanged(Category),
    /// User clicked "Choose Photo..."
    PickPhoto,
    /// User clicked "Add"
    AddItem,
    /// Background photo ingestion finished
    ItemIngested(PendingItem, Result<String, String>),
    DeleteItem(String),
    OutfitNameChanged(String),
    SaveOutfit,
    DeleteOutfit(String),
    GenerateOutfit,
}

impl Wardrobe {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();

        // The app cannot function without its store
        let library = Library::open(&config.database_path)
            .expect("Failed to initialize database. Check permissions and disk space.");
        let catalog = Catalog::load(library);

        info!(
            "Wardrobe initialized with {} items, {} outfits ({})",
            catalog.items().len(),
            catalog.outfits().len(),
            catalog.store().path().display()
        );

        let mut app = Wardrobe {
            catalog,
            nav: NavState::default(),
            views: DerivedViews::default(),
            photos: PhotoCache::default(),
            item_form: ItemForm::default(),
            outfit_name: String::new(),
            generator: GeneratorPanel::default(),
            ingest_options: IngestOptions::from(&config),
        };
        app.refresh_views();

        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Nav(action) => {
                self.nav.apply(action);
                Task::none()
            }
            Message::ItemNameChanged(name) => {
                self.item_form.name = name;
                Task::none()
            }
            Message::ItemCategoryChanged(category) => {
                self.item_form.category = category;
                Task::none()
            }
            Message::PickPhoto => {
                let picked = FileDialog::new()
                    .set_title("Select a Photo")
                    .add_filter("Images", &PHOTO_EXTENSIONS[..])
                    .pick_file();

                if picked.is_some() {
                    self.item_form.photo = picked;
                }
                Task::none()
            }
            Message::AddItem => match self.item_form.begin_submit() {
                Some(pending) => {
                    let path = pending.photo.clone();
                    let options = self.ingest_options;
                    Task::perform(ingest::ingest_file(path, options), move |result| {
                        Message::ItemIngested(pending.clone(), result.map_err(|e| e.to_string()))
                    })
                }
                None => Task::none(),
            },
            Message::ItemIngested(pending, result) => {
                let added = match result {
                    Ok(image_url) => self
                        .catalog
                        .add_item(&pending.name, pending.category, image_url)
                        .is_some(),
                    Err(e) => {
                        error!("Error adding item from {}: {}", pending.photo.display(), e);
                        false
                    }
                };
                self.item_form.finish_submit(added);
                Task::none()
            }
            Message::DeleteItem(id) => {
                if self.catalog.delete_item(&id) {
                    self.nav.apply(NavAction::Forget(id));
                }
                Task::none()
            }
            Message::OutfitNameChanged(name) => {
                self.outfit_name = name;
                Task::none()
            }
            Message::SaveOutfit => {
                if self
                    .catalog
                    .add_outfit(&self.outfit_name, &self.nav.multi_select)
                    .is_some()
                {
                    self.outfit_name.clear();
                    self.nav.apply(NavAction::ClearMultiSelect);
                }
                Task::none()
            }
            Message::DeleteOutfit(id) => {
                if self.catalog.delete_outfit(&id) {
                    self.nav.apply(NavAction::ForgetOutfit(id));
                } else {
                    warn!("Outfit {} already gone", id);
                }
                Task::none()
            }
            Message::GenerateOutfit => {
                self.generator
                    .run(self.catalog.items(), &mut rand::thread_rng());
                Task::none()
            }
        };

        self.refresh_views();
        task
    }

    fn refresh_views(&mut self) {
        let revision = self.catalog.revision();
        self.views.refresh(
            revision,
            self.catalog.items(),
            self.catalog.outfits(),
            self.nav.anchor(),
        );
        self.photos.refresh(revision, self.catalog.items());
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let tabs: Row<Message> = Screen::ALL
            .iter()
            .fold(Row::new().spacing(8), |tabs, &screen| {
                let style: fn(&Theme, button::Status) -> button::Style = if self.nav.screen == screen {
                    button::primary
                } else {
                    button::secondary
                };
                tabs.push(
                    button(text(screen.label()))
                        .style(style)
                        .padding(10)
                        .on_press(Message::Nav(NavAction::SwitchScreen(screen))),
                )
            });

        let header = row![text("My Virtual Wardrobe").size(32), tabs]
            .spacing(30)
            .align_y(Alignment::Center);

        let ctx = ViewContext {
            nav: &self.nav,
            views: &self.views,
            photos: &self.photos,
        };
        let body = match self.nav.screen {
            Screen::Wardrobe => screens::wardrobe(&ctx, &self.item_form),
            Screen::Outfits => screens::outfits(&ctx, &self.outfit_name),
            Screen::Pairings => screens::pairings(&ctx),
            Screen::Generator => screens::generator(&ctx, &self.generator),
        };

        let content = column![
            header,
            scrollable(container(body).padding(10)).height(Length::Fill),
            text("Running 100% locally.").size(12),
        ]
        .spacing(20)
        .padding(30);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "virtual_wardrobe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    iced::application("My Virtual Wardrobe", Wardrobe::update, Wardrobe::view)
        .theme(Wardrobe::theme)
        .centered()
        .run_with(Wardrobe::new)
}
