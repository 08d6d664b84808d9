//! Data access per table plus admin-side input validation.

mod characters;
mod favorites;
mod planets;
mod users;
mod validation;

pub use characters::CharacterService;
pub use favorites::FavoriteService;
pub use planets::PlanetService;
pub use users::UserService;
pub use validation::RequestValidator;
