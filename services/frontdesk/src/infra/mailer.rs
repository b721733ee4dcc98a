use anyhow::Context as _;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::domain::repository::Mailer;

/// SMTP-backed mailer. `send_*` never raise: transport failures are logged
/// and reported as `false`, and the calling workflow decides what that means
/// for the request.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .context("smtp relay")?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();
        let from: Mailbox = config.mail_from.parse().context("parse MAIL_FROM")?;
        Ok(Self { transport, from })
    }

    async fn deliver(&self, recipient: &str, subject: &str, html_body: String) -> bool {
        let to: Mailbox = match recipient.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::error!(error = %e, recipient = %recipient, "invalid recipient address");
                return false;
            }
        };
        let message = match Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)
        {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, recipient = %recipient, "failed to build message");
                return false;
            }
        };
        match self.transport.send(message).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, recipient = %recipient, "smtp delivery failed");
                false
            }
        }
    }
}

impl Mailer for SmtpMailer {
    async fn send_registration_code(&self, recipient: &str, name: &str, code: &str) -> bool {
        self.deliver(
            recipient,
            "Caredesk Clinic - Email Verification",
            registration_body(name, code),
        )
        .await
    }

    async fn send_reset_code(&self, recipient: &str, name: &str, code: &str) -> bool {
        self.deliver(
            recipient,
            &format!("Password Reset Code - {code}"),
            reset_body(name, code),
        )
        .await
    }
}

fn greeting(name: &str) -> String {
    if name.is_empty() {
        "Hello!".to_owned()
    } else {
        format!("Hello {name}!")
    }
}

fn registration_body(name: &str, code: &str) -> String {
    format!(
        "<html><body style=\"font-family: Arial, sans-serif;\">\
         <h1>Caredesk Clinic</h1>\
         <h2>{}</h2>\
         <p>Your verification code is:</p>\
         <div style=\"font-size: 32px; font-weight: bold; letter-spacing: 8px;\">{}</div>\
         <p>This code expires in 10 minutes. Do not share it with anyone.</p>\
         <p>If you did not request this verification, please ignore this email.</p>\
         </body></html>",
        greeting(name),
        code
    )
}

fn reset_body(name: &str, code: &str) -> String {
    format!(
        "<html><body style=\"font-family: Arial, sans-serif;\">\
         <h1>Password Reset - Caredesk Clinic</h1>\
         <h2>{}</h2>\
         <p>You requested to reset your password. Use the code below to proceed:</p>\
         <div style=\"font-size: 32px; font-weight: bold; letter-spacing: 8px;\">{}</div>\
         <p>This code expires in 10 minutes. If you did not request this reset,\
         please ignore this email.</p>\
         </body></html>",
        greeting(name),
        code
    )
}
