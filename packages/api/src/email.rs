use crate::config::EmailConfig;
use crate::types::ContactMessage;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use tracing::{debug, info};

fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

fn email_label(email: &str) -> String {
    format!("{} (len={})", email_domain(email), email.len())
}

/// Trait for email service implementations
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send_email(
        &self,
        to: &str,
        reply_to: Option<&str>,
        subject: &str,
        text: &str,
    ) -> Result<()>;
}

/// SMTP email service implementation (production)
pub struct SmtpEmailService {
    host: String,
    port: u16,
    credentials: Credentials,
    from: Mailbox,
}

impl SmtpEmailService {
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        let EmailConfig::SMTP {
            host,
            port,
            username,
            password,
            from_email,
            from_name,
        } = config
        else {
            bail!("SMTP email service needs an SMTP configuration");
        };

        Ok(Self {
            host: host.clone(),
            port: *port,
            credentials: Credentials::new(username.clone(), password.clone()),
            from: format!("{from_name} <{from_email}>")
                .parse()
                .context("SMTP_FROM_EMAIL is not a valid address")?,
        })
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_email(
        &self,
        to: &str,
        reply_to: Option<&str>,
        subject: &str,
        text: &str,
    ) -> Result<()> {
        debug!(
            "email.smtp.send_email: to={} subject_len={} text_len={}",
            email_label(to),
            subject.len(),
            text.len()
        );

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to.parse().context("invalid recipient address")?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);
        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(reply_to.parse().context("invalid reply-to address")?);
        }
        let email = builder.body(text.to_string())?;

        let mailer = SmtpTransport::relay(&self.host)?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build();

        // Wrap blocking SMTP operation in spawn_blocking
        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| anyhow!("Task join error: {e}"))??;

        Ok(())
    }
}

/// Console email service implementation (local development)
pub struct ConsoleEmailService;

#[async_trait]
impl EmailService for ConsoleEmailService {
    async fn send_email(
        &self,
        to: &str,
        reply_to: Option<&str>,
        subject: &str,
        text: &str,
    ) -> Result<()> {
        println!("\n📧 EMAIL (Local Mode - Not Sent)");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("To: {to}");
        if let Some(reply_to) = reply_to {
            println!("Reply-To: {reply_to}");
        }
        println!("Subject: {subject}");
        println!("────────────────────────────────");
        println!("{text}");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        Ok(())
    }
}

/// Forward a contact-form message to the parish inbox.
pub async fn send_contact_notification(
    email_service: &dyn EmailService,
    inbox: &str,
    message: &ContactMessage,
) -> Result<()> {
    info!(
        "email.send_contact_notification: inbox={} from={}",
        email_label(inbox),
        email_label(&message.email)
    );

    let subject = format!("[Website] {}", message.subject);
    let text = contact_notification_text(message);
    email_service
        .send_email(inbox, Some(&message.email), &subject, &text)
        .await
}

fn contact_notification_text(message: &ContactMessage) -> String {
    format!(
        "New message from the website contact form.\n\nFrom: {} <{}>\nSubject: {}\n\n{}\n",
        message.name, message.email, message.subject, message.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[test]
    fn email_label_hides_local_part() {
        assert_eq!(email_label("mary@example.org"), "example.org (len=16)");
        assert_eq!(email_label("nobody"), "invalid (len=6)");
    }

    #[test]
    fn notification_text_carries_sender_and_body() {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: "Mary".to_string(),
            email: "mary@example.org".to_string(),
            subject: "Mass timings".to_string(),
            message: "When is the Tamil mass on Sunday?".to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        let text = contact_notification_text(&message);
        assert!(text.contains("From: Mary <mary@example.org>"));
        assert!(text.contains("Subject: Mass timings"));
        assert!(text.contains("When is the Tamil mass on Sunday?"));
    }

    #[test]
    fn smtp_service_requires_smtp_config() {
        assert!(SmtpEmailService::from_config(&EmailConfig::Console).is_err());
    }
}
