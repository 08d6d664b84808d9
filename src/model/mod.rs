//! Stored records and their JSON serialization.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::{Character, CharacterChanges, NewCharacter};
pub use favorite::{Favorite, FavoriteTarget, NewFavorite};
pub use planet::{NewPlanet, Planet, PlanetChanges};
pub use user::{NewUser, User, UserChanges};
