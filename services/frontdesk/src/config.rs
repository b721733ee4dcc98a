use crate::password::PasswordScheme;

/// SMTP settings for the outbound mailer.
#[derive(Debug)]
pub struct MailConfig {
    /// SMTP relay host. Env var: `SMTP_HOST`.
    pub smtp_host: String,
    /// SMTP port (default 587, STARTTLS). Env var: `SMTP_PORT`.
    pub smtp_port: u16,
    /// SMTP username. Env var: `SMTP_USERNAME`.
    pub smtp_username: String,
    /// SMTP password (app password, not the account password). Env var:
    /// `SMTP_PASSWORD`.
    pub smtp_password: String,
    /// From address for every outbound message. Env var: `MAIL_FROM`.
    pub mail_from: String,
}

/// Frontdesk service configuration loaded from environment variables.
#[derive(Debug)]
pub struct FrontdeskConfig {
    /// PostgreSQL URL of the patients store. Env var: `PATIENTS_DATABASE_URL`.
    pub patients_database_url: String,
    /// PostgreSQL URL of the records store (accounts, codes, appointments,
    /// symptoms). Env var: `RECORDS_DATABASE_URL`.
    pub records_database_url: String,
    /// TCP port to listen on (default 5000). Env var: `FRONTDESK_PORT`.
    pub frontdesk_port: u16,
    pub mail: MailConfig,
    /// Hashing scheme for account passwords (default argon2; `sha256` pins
    /// the legacy scheme). Env var: `PASSWORD_SCHEME`.
    pub password_scheme: PasswordScheme,
    /// Gate registration completion on a consumed verification code
    /// (default false). Env var: `REQUIRE_VERIFIED_EMAIL`.
    pub require_verified_email: bool,
    /// Administrator bypass pair. Env vars: `ADMIN_USERNAME`,
    /// `ADMIN_PASSWORD`.
    pub admin_username: String,
    pub admin_password: String,
}

impl FrontdeskConfig {
    pub fn from_env() -> Self {
        Self {
            patients_database_url: std::env::var("PATIENTS_DATABASE_URL")
                .expect("PATIENTS_DATABASE_URL"),
            records_database_url: std::env::var("RECORDS_DATABASE_URL")
                .expect("RECORDS_DATABASE_URL"),
            frontdesk_port: std::env::var("FRONTDESK_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            mail: MailConfig {
                smtp_host: std::env::var("SMTP_HOST").expect("SMTP_HOST"),
                smtp_port: std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(587),
                smtp_username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME"),
                smtp_password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD"),
                mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            },
            password_scheme: std::env::var("PASSWORD_SCHEME")
                .map(|v| PasswordScheme::parse(&v))
                .unwrap_or_default(),
            require_verified_email: std::env::var("REQUIRE_VERIFIED_EMAIL")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_owned()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password".to_owned()),
        }
    }
}
