//! HTTP handlers: public favorites API, admin, sitemap.

pub mod admin;
pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

pub use favorites::*;
pub use people::*;
pub use planets::*;
pub use sitemap::sitemap;
pub use users::*;
