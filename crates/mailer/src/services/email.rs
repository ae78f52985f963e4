//! Email service for sending the welcome message.
//!
//! Uses SMTP via lettre for delivery with Askama templates for the
//! fixed welcome body (plain text plus HTML alternative).

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use shoplab_core::Email;

use crate::config::EmailConfig;

/// HTML template for the welcome email.
#[derive(Template)]
#[template(path = "email/welcome.html")]
struct WelcomeEmailHtml<'a> {
    email: &'a str,
}

/// Plain text template for the welcome email.
#[derive(Template)]
#[template(path = "email/welcome.txt")]
struct WelcomeEmailText<'a> {
    email: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailSendError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// A mailbox failed to parse (ours or the recipient's).
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay host is not usable.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }

    /// Test the connection to the SMTP relay.
    ///
    /// # Errors
    ///
    /// Returns error if the relay is unreachable or rejects the handshake.
    pub async fn verify(&self) -> Result<bool, SmtpError> {
        self.mailer.test_connection().await
    }

    /// Send the fixed welcome email to `to`.
    ///
    /// # Errors
    ///
    /// Returns error if a template fails to render, the message cannot be
    /// built, or the relay rejects it.
    pub async fn send_welcome(&self, to: &Email) -> Result<(), EmailSendError> {
        let html = WelcomeEmailHtml { email: to.as_str() }.render()?;
        let text = WelcomeEmailText { email: to.as_str() }.render()?;

        self.send_multipart_email(to.as_str(), "Welcome to Our Service", &text, &html)
            .await
    }

    /// Send a multipart email with both plain text and HTML versions.
    async fn send_multipart_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailSendError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailSendError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        self.mailer.send(email).await?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_html_echoes_address() {
        let html = WelcomeEmailHtml {
            email: "a@b.co",
        }
        .render()
        .unwrap();

        assert!(html.contains("Welcome!"));
        assert!(html.contains("a@b.co"));
    }

    #[test]
    fn test_welcome_text_renders() {
        let text = WelcomeEmailText {
            email: "a@b.co",
        }
        .render()
        .unwrap();

        assert!(text.contains("Thank you for using our service"));
    }
}
