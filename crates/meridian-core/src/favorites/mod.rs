//! Favorite zone list: domain model and persistence trait.

pub mod model;
pub mod repository;

pub use model::FavoriteSet;
pub use repository::FavoritesRepository;
