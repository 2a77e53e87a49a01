//! Pure data structures: the [`User`] entity and its [`ExtendedUser`] variant.

pub mod user;

pub use user::*;
