use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pool: Pool<Postgres>,
}

impl AppState {
    pub async fn new() -> Self {
        let db_uri = std::env::var("DATABASE_URL").expect("找不到 DATABASE_URL");

        // set up connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&db_uri)
            .await
            .expect("can't connect to database");

        Self { pool }
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
