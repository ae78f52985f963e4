//! Wire and document models for the mirror.

pub mod external;
pub mod mirrored_user;

pub use external::ExternalUser;
pub use mirrored_user::{MirroredUser, MirroredUserResponse};
