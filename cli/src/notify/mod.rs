//! # Onboarding Email Renderer
//!
//! File: cli/src/notify/mod.rs
//!
//! ## Overview
//!
//! Renders the onboarding email sequence (welcome, tour, first release,
//! marketing tips, success stories) for a recipient. Nothing is delivered:
//! the renderer logs the would-be send and returns the subject, the HTML body
//! and an acknowledgement payload for the caller.
//!
//! ## Request validation
//!
//! - `email`, `name` and `type` are all required and must not be blank,
//!   otherwise `Missing required fields: email, name, type`.
//! - `type` must name a known email kind, otherwise `Invalid email type`.
//!
//! Both failures are `AppError` client errors (HTTP 400 in `srv`).
//!
use crate::core::config::NotifyConfig;
use crate::core::error::{AppError, Result};
use crate::core::templating::TemplateSet;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

mod templates;

/// The emails of the onboarding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EmailKind {
    Welcome,
    Tour,
    FirstRelease,
    MarketingTips,
    SuccessStories,
}

impl EmailKind {
    pub const ALL: [EmailKind; 5] = [
        EmailKind::Welcome,
        EmailKind::Tour,
        EmailKind::FirstRelease,
        EmailKind::MarketingTips,
        EmailKind::SuccessStories,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmailKind::Welcome => "welcome",
            EmailKind::Tour => "tour",
            EmailKind::FirstRelease => "first-release",
            EmailKind::MarketingTips => "marketing-tips",
            EmailKind::SuccessStories => "success-stories",
        }
    }

    fn subject(self) -> &'static str {
        match self {
            EmailKind::Welcome => templates::WELCOME_SUBJECT,
            EmailKind::Tour => templates::TOUR_SUBJECT,
            EmailKind::FirstRelease => templates::FIRST_RELEASE_SUBJECT,
            EmailKind::MarketingTips => templates::MARKETING_TIPS_SUBJECT,
            EmailKind::SuccessStories => templates::SUCCESS_STORIES_SUBJECT,
        }
    }

    fn body_template(self) -> String {
        format!("{}.html", self.as_str())
    }

    fn body_source(self) -> &'static str {
        match self {
            EmailKind::Welcome => templates::WELCOME_HTML,
            EmailKind::Tour => templates::TOUR_HTML,
            EmailKind::FirstRelease => templates::FIRST_RELEASE_HTML,
            EmailKind::MarketingTips => templates::MARKETING_TIPS_HTML,
            EmailKind::SuccessStories => templates::SUCCESS_STORIES_HTML,
        }
    }
}

impl fmt::Display for EmailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailKind {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EmailKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::UnknownEmailType { kind: s.to_string() })
    }
}

/// Incoming `{email, name, type}` payload. Missing fields deserialize as
/// empty strings so that validation can report them uniformly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Acknowledgement returned to the caller in place of a delivery receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAck {
    pub success: bool,
    pub message: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEmail {
    pub kind: EmailKind,
    pub to: String,
    pub subject: String,
    pub html: String,
}

pub struct Notifier {
    templates: TemplateSet,
    app_url: String,
    support_email: String,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("app_url", &self.app_url)
            .field("support_email", &self.support_email)
            .finish_non_exhaustive()
    }
}

impl Notifier {
    pub fn new(config: &NotifyConfig) -> Result<Self> {
        let mut sources: Vec<(String, &str)> = vec![("base.html".to_string(), templates::BASE_HTML)];
        sources.extend(
            EmailKind::ALL
                .iter()
                .map(|kind| (kind.body_template(), kind.body_source())),
        );
        let borrowed: Vec<(&str, &str)> = sources.iter().map(|(n, s)| (n.as_str(), *s)).collect();

        Ok(Self {
            templates: TemplateSet::from_raw(&borrowed)?,
            app_url: config.app_url.trim_end_matches('/').to_string(),
            support_email: config.support_email.clone(),
        })
    }

    /// Renders one email for `name`. The address is only recorded in the result.
    pub fn render(&self, kind: EmailKind, to: &str, name: &str) -> Result<RenderedEmail> {
        let mut context = HashMap::new();
        context.insert("name".to_string(), name.to_string());
        context.insert("app_url".to_string(), self.app_url.clone());
        context.insert("support_email".to_string(), self.support_email.clone());

        let html = self.templates.render(&kind.body_template(), &context)?;
        debug!("Rendered {} email ({} bytes)", kind, html.len());
        Ok(RenderedEmail {
            kind,
            to: to.to_string(),
            subject: kind.subject().to_string(),
            html,
        })
    }

    /// Validates a request, renders the email, and acknowledges it without sending.
    pub fn handle(&self, request: &EmailRequest) -> Result<(EmailAck, RenderedEmail)> {
        let email = request.email.trim();
        let name = request.name.trim();
        let kind = request.kind.trim();
        if email.is_empty() || name.is_empty() || kind.is_empty() {
            return Err(anyhow!(AppError::InvalidRequest(
                "Missing required fields: email, name, type".to_string()
            )));
        }
        let kind: EmailKind = kind.parse()?;

        let rendered = self.render(kind, email, name)?;
        info!("Sending {} email to {}", kind, email);

        let ack = EmailAck {
            success: true,
            message: format!("{} email would be sent to {}", kind, email),
            subject: rendered.subject.clone(),
        };
        Ok((ack, rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> Notifier {
        Notifier::new(&NotifyConfig {
            app_url: "https://elevated.example/".into(),
            support_email: "help@elevated.example".into(),
        })
        .expect("templates parse")
    }

    fn request(email: &str, name: &str, kind: &str) -> EmailRequest {
        EmailRequest {
            email: email.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }

    #[test]
    fn every_kind_renders_with_name() {
        let n = notifier();
        for kind in EmailKind::ALL {
            let email = n.render(kind, "ada@example.com", "Ada").unwrap();
            assert!(email.html.contains("Ada"), "{kind} body lacks name");
            assert!(email.html.contains("help@elevated.example"), "{kind} footer");
            assert!(!email.subject.is_empty());
            assert!(email.html.starts_with("<!DOCTYPE html>"));
        }
    }

    #[test]
    fn links_use_app_url_without_double_slash() {
        let n = notifier();
        let welcome = n.render(EmailKind::Welcome, "a@b.c", "Ada").unwrap();
        assert!(welcome.html.contains("href=\"https://elevated.example/portal\""));
        let tour = n.render(EmailKind::Tour, "a@b.c", "Ada").unwrap();
        assert!(tour.html.contains("href=\"https://elevated.example/ai-tools\""));
    }

    #[test]
    fn recipient_name_is_escaped() {
        let n = notifier();
        let email = n.render(EmailKind::Welcome, "a@b.c", "<script>").unwrap();
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn handle_acknowledges_without_sending() {
        let (ack, rendered) = notifier()
            .handle(&request("ada@example.com", "Ada", "first-release"))
            .unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, "first-release email would be sent to ada@example.com");
        assert_eq!(ack.subject, "🎶 Ready to Release Your Music?");
        assert_eq!(rendered.kind, EmailKind::FirstRelease);
        assert_eq!(rendered.to, "ada@example.com");
    }

    #[test]
    fn missing_fields_rejected() {
        let n = notifier();
        for req in [
            request("", "Ada", "welcome"),
            request("ada@example.com", "  ", "welcome"),
            request("ada@example.com", "Ada", ""),
            EmailRequest::default(),
        ] {
            let err = n.handle(&req).unwrap_err();
            assert_eq!(err.to_string(), "Missing required fields: email, name, type");
            assert!(err.downcast_ref::<AppError>().unwrap().is_client_error());
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = notifier()
            .handle(&request("ada@example.com", "Ada", "newsletter"))
            .unwrap_err();
        let app_err = err.downcast_ref::<AppError>().expect("AppError");
        assert!(matches!(app_err, AppError::UnknownEmailType { kind } if kind == "newsletter"));
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in EmailKind::ALL {
            assert_eq!(kind.as_str().parse::<EmailKind>().unwrap(), kind);
        }
        assert!("Welcome".parse::<EmailKind>().is_err());
    }

    #[test]
    fn request_deserializes_type_field() {
        let req: EmailRequest =
            serde_json::from_str(r#"{"email":"a@b.c","type":"tour"}"#).unwrap();
        assert_eq!(req.kind, "tour");
        assert_eq!(req.name, "");
    }
}
