//! Session and account store.
//!
//! - `user` - account records and ids
//! - `password` - Argon2id hashing and verification
//! - `service` - login, registration, session and remembered email

mod password;
mod service;
mod user;

pub use password::{PasswordHash, PasswordHasher};
pub use service::{AuthService, REMEMBERED_EMAIL_KEY};
pub use user::{User, UserId};
