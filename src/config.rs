// config.rs
use std::env;
use std::str::FromStr;

use crate::errors::{AppError, Result};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_FROM_NAME: &str = "MYBIZ - One App. Every Business";

/// Which request shape the bill endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceForm {
    /// `{ to, customerName?, invoiceNumber, cloudinaryUrl, paymentStatus, orderDetails? }`
    Detailed,
    /// `{ to, pdfUrl }`
    Simple,
}

impl FromStr for InvoiceForm {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(InvoiceForm::Detailed),
            "simple" => Ok(InvoiceForm::Simple),
            other => Err(AppError::configuration(format!(
                "INVOICE_FORM must be 'detailed' or 'simple', got '{}'",
                other
            ))),
        }
    }
}

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    /// Implicit TLS from the first byte, usually port 465.
    Tls,
    /// Plaintext greeting upgraded with STARTTLS, usually port 587.
    StartTls,
    /// No encryption. Local relays and test servers only.
    None,
}

impl FromStr for SmtpTls {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tls" => Ok(SmtpTls::Tls),
            "starttls" => Ok(SmtpTls::StartTls),
            "none" => Ok(SmtpTls::None),
            other => Err(AppError::configuration(format!(
                "SMTP_TLS must be 'tls', 'starttls' or 'none', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub tls: SmtpTls,
    pub username: String,
    pub password: String,
    pub from_name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mail: MailConfig,
    pub port: u16,
    pub cors_origin: String,
    pub environment: String,
    pub expose_otp: bool,
    pub invoice_form: InvoiceForm,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("APP_ENV").unwrap_or_else(|| "development".to_string());
        let is_production = environment.eq_ignore_ascii_case("production");

        let expose_otp = match get("EXPOSE_OTP") {
            Some(raw) => parse_bool("EXPOSE_OTP", &raw)?,
            None => !is_production,
        };

        let mail = MailConfig {
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: parse_or("SMTP_PORT", get("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
            tls: match get("SMTP_TLS") {
                Some(raw) => raw.parse()?,
                None => SmtpTls::Tls,
            },
            username: get("USER_EMAIL")
                .ok_or_else(|| AppError::configuration("USER_EMAIL not set"))?,
            password: get("USER_EMAIL_PASS")
                .ok_or_else(|| AppError::configuration("USER_EMAIL_PASS not set"))?,
            from_name: get("MAIL_FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
        };

        Ok(AppConfig {
            mail,
            port: parse_or("SERVER_PORT", get("SERVER_PORT"), DEFAULT_SERVER_PORT)?,
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| "*".to_string()),
            environment,
            expose_otp,
            invoice_form: match get("INVOICE_FORM") {
                Some(raw) => raw.parse()?,
                None => InvoiceForm::Detailed,
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("{} must be a number, got '{}'", key, value))),
        None => Ok(default),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::configuration(format!("{} must be a boolean, got '{}'", key, raw))),
    }
}
