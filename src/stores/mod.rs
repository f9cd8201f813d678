//! Stateful stores

mod favorites_store;

pub use favorites_store::{FavoritesStore, FAVORITES_KEY};
