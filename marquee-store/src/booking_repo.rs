use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use marquee_domain::booking::Booking;
use marquee_domain::repository::BookingRepository;

pub struct StoreBookingRepository {
    pool: PgPool,
}

impl StoreBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    user_id: Uuid,
    movie_title: String,
    selected_date: String,
    selected_showtime: String,
    seats: Vec<i32>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            user_id: row.user_id,
            movie_title: row.movie_title,
            selected_date: row.selected_date,
            selected_showtime: row.selected_showtime,
            seats: row.seats,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BookingRepository for StoreBookingRepository {
    async fn create_booking(
        &self,
        booking: &Booking,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO bookings (id, user_id, movie_title, selected_date, selected_showtime, seats, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(&booking.movie_title)
        .bind(&booking.selected_date)
        .bind(&booking.selected_showtime)
        .bind(&booking.seats)
        .bind(booking.created_at)
        .execute(&self.pool)
        .await?;

        Ok(booking.id)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, movie_title, selected_date, selected_showtime, seats, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn delete_booking(
        &self,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
