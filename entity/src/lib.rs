pub mod prelude;

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod user;
