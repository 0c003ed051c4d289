/// State management module
///
/// This module handles all application state, including:
/// - The SQLite-backed key-value store (library.rs)
/// - Catalog records (data.rs) and the catalog that owns them (catalog.rs)
/// - Derived views: category groups, resolved outfits, pairings (views.rs)
/// - Screen, selection and expand/collapse state (navigation.rs)
/// - Random outfit generation (generator.rs)
/// - Form inputs (forms.rs)

pub mod catalog;
pub mod data;
pub mod forms;
pub mod generator;
pub mod library;
pub mod navigation;
pub mod views;
