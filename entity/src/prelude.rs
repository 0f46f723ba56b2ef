pub use super::character::Entity as Character;
pub use super::favorite::Entity as Favorite;
pub use super::film::Entity as Film;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
