mod app;
mod error;
mod pagination;
mod routes;
mod telemetry;

pub use app::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let pool = db::establish_connection().await?;
    db::run_migrations(&pool).await?;

    app::run_server(pool).await
}
