use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use marquee_domain::movie::Movie;
use marquee_domain::repository::MovieRepository;

pub struct StoreMovieRepository {
    pool: PgPool,
}

impl StoreMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    genre: String,
    duration_minutes: i32,
    poster_url: Option<String>,
    show_dates: Vec<String>,
    showtimes: Vec<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            genre: row.genre,
            duration_minutes: row.duration_minutes,
            poster_url: row.poster_url,
            show_dates: row.show_dates,
            showtimes: row.showtimes,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MovieRepository for StoreMovieRepository {
    async fn list_movies(&self) -> Result<Vec<Movie>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, genre, duration_minutes, poster_url, show_dates, showtimes, created_at
            FROM movies
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn get_movie(
        &self,
        id: Uuid,
    ) -> Result<Option<Movie>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, genre, duration_minutes, poster_url, show_dates, showtimes, created_at
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Movie::from))
    }
}
