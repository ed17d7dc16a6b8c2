// src/main.rs
use anyhow::Result;
use directory_core::application::{
    ports::{
        email::EmailDispatcher,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::ReferenceGenerator,
    },
    services::{ApplicationServices, Ports},
};
use directory_core::domain::slug::SlugGenerator;
use directory_core::config::AppConfig;
use directory_core::infrastructure::{
    database,
    email::{HttpRelayDispatcher, LoggingEmailDispatcher, RelaySettings},
    repositories::postgres_repositories,
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::{DefaultSlugGenerator, RandomReferenceGenerator},
};
use directory_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MAIL_RELAY_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let repositories = postgres_repositories(&pool);

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let references: Arc<dyn ReferenceGenerator> = Arc::new(RandomReferenceGenerator);

    let mail = config.mail();
    let mailer: Arc<dyn EmailDispatcher> = match &mail.relay_url {
        Some(url) => {
            tracing::info!(relay = %url, "using HTTP mail relay");
            Arc::new(HttpRelayDispatcher::new(RelaySettings {
                url: url.clone(),
                token: mail.relay_token.clone(),
                from: mail.from.clone(),
                timeout: MAIL_RELAY_TIMEOUT,
            })?)
        }
        None => {
            tracing::warn!("MAIL_RELAY_URL not set; outgoing mail will only be logged");
            Arc::new(LoggingEmailDispatcher)
        }
    };

    let services = Arc::new(ApplicationServices::new(
        repositories,
        Ports {
            password_hasher,
            token_manager,
            clock,
            slugger,
            references,
            mailer,
        },
        config.service_settings(),
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
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
