use sea_orm::Database;
use tracing::info;

use caredesk_core::clock::SystemClock;
use caredesk_core::tracing::init_tracing;

use caredesk_frontdesk::config::FrontdeskConfig;
use caredesk_frontdesk::domain::types::AdminCredentials;
use caredesk_frontdesk::infra::mailer::SmtpMailer;
use caredesk_frontdesk::router::build_router;
use caredesk_frontdesk::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = FrontdeskConfig::from_env();

    let patients_db = Database::connect(&config.patients_database_url)
        .await
        .expect("failed to connect to patients store");
    let records_db = Database::connect(&config.records_database_url)
        .await
        .expect("failed to connect to records store");

    let mailer = SmtpMailer::new(&config.mail).expect("failed to build SMTP mailer");

    let state = AppState {
        patients_db,
        records_db,
        mailer,
        clock: SystemClock,
        hasher: config.password_scheme.hasher(),
        admin: AdminCredentials {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        },
        require_verified_email: config.require_verified_email,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.frontdesk_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("frontdesk service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
