use anyhow::{Context, Result};
use pagewright::application::{
    commands::users::SeedAdminCommand,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use pagewright::config::AppConfig;
use pagewright::domain::{
    page::{PageModuleRepository, PageReadRepository, PageRevisionRepository, PageWriteRepository},
    user::UserRepository,
};
use pagewright::infrastructure::{
    database,
    repositories::{
        SqliteModuleRepository, SqlitePageRepository, SqliteRevisionRepository,
        SqliteUserRepository,
    },
    security::{Argon2PasswordHasher, BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use pagewright::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let pages = Arc::new(SqlitePageRepository::new(pool.clone()));
    let page_write_repo: Arc<dyn PageWriteRepository> = pages.clone();
    let page_read_repo: Arc<dyn PageReadRepository> = pages;
    let module_repo: Arc<dyn PageModuleRepository> =
        Arc::new(SqliteModuleRepository::new(pool.clone()));
    let revision_repo: Arc<dyn PageRevisionRepository> =
        Arc::new(SqliteRevisionRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        page_write_repo,
        page_read_repo,
        module_repo,
        revision_repo,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ));

    if let Some(seed) = config.seed_admin() {
        let seeded = services
            .user_commands
            .seed_admin(SeedAdminCommand {
                email: seed.email.clone(),
                password: seed.password.clone(),
                name: seed.name.clone(),
            })
            .await?;
        if seeded.is_none() {
            tracing::debug!("users exist; admin seed skipped");
        }
    }

    let app = build_router(HttpState::new(services), config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info,sqlx=warn"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
