/// State management module
///
/// This module handles the pure UI state machines, kept free of any
/// rendering concerns:
/// - Category filter selection and roving focus (filter.rs)
/// - The mutually-exclusive dropdown group (menu.rs)
/// - The persisted location fragment and percent codec (location.rs)

pub mod filter;
pub mod location;
pub mod menu;
