use userstore::config::AppConfig;
use userstore::db;
use userstore::user::{new_user_repo, NewUser, UserRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userstore=debug,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let pool = db::connect(&config).await?;
    db::ensure_schema(&pool).await?;

    let user_repo = new_user_repo(pool);

    // Create a new record.
    let row = NewUser::new("joao", Some("joao@nospam.com".into()));
    let new_id = user_repo.create(&row).await?;
    tracing::info!(new_id, "created user");

    // Fetch the record we just created.
    let new_row = user_repo.get_by_id(new_id).await?;
    tracing::info!(?new_row, "fetched user");

    Ok(())
}
