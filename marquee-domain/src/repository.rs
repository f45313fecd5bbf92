use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::Booking;
use crate::movie::Movie;
use crate::user::User;

/// Repository trait for booking data access
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_booking(
        &self,
        booking: &Booking,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    /// Bookings for one user, in creation order.
    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns false when no booking with that id existed.
    async fn delete_booking(
        &self,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for movie catalogue access
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_movie(
        &self,
        id: Uuid,
    ) -> Result<Option<Movie>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for user account access
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        user: &User,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<User>, Box<dyn std::error::Error + Send + Sync>>;
}
