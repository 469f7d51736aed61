pub mod categories;
mod models;
pub mod questions;

use sqlx::sqlite::SqlitePool;
use sqlx::Error;

pub use models::{Category, Question};

pub async fn establish_connection() -> Result<SqlitePool, Error> {
    dotenv::dotenv().ok();
    let database_url = dotenv::var("DATABASE_URL").expect("DATABASE_URL must be set");
    SqlitePool::connect(&database_url).await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
pub(crate) mod tests {
    use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

    // A single connection keeps every query on the same :memory: database.
    pub async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::run_migrations(&pool).await.unwrap();
        pool
    }
}
