use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use tokio::main;

use signups::{
    application::usecases::{list_signups::ListSignupsUseCase, submit_signup::SubmitSignupUseCase},
    config::Config,
    infrastructure::repositories::sqlite::{self, SqliteSignupRepository},
    presentation::http::{build_route, endpoints::root::ApiState, security::AdminCredentials},
};

#[main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::try_parse().map_err(anyhow::Error::msg)?;

    let pool = sqlite::connect(&config.database_path).await?;
    sqlite::ensure_schema(&pool).await?;
    let repo = SqliteSignupRepository::new(pool);

    let state = Arc::new(ApiState {
        submit_signup_usecase: Arc::new(SubmitSignupUseCase::new(repo.clone())),
        list_signups_usecase: Arc::new(ListSignupsUseCase::new(repo)),
        admin_credentials: AdminCredentials {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        },
    });

    let server_url = format!("http://{}:{}", config.host, config.port);
    tracing::info!(%server_url, database = %config.database_path, "starting signup service");

    let app = build_route(state, &server_url);

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run(app)
        .await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
