pub mod booking;
pub mod movie;
pub mod repository;
pub mod user;

pub use booking::{Booking, CreateBookingRequest};
pub use movie::Movie;
pub use user::{NewUser, User};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
