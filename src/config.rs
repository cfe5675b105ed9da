use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_secure: bool,
    pub email_user: String,
    pub email_pass: String,
    pub org_email: String,
    pub brand_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            smtp_host: env::var("SMTP_HOST").map_err(|_| ConfigError::MissingSmtpHost)?,
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidSmtpPort)?,
            // true for implicit TLS (465), false for STARTTLS on submission ports
            smtp_secure: env::var("SMTP_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            email_user: env::var("EMAIL_USER").map_err(|_| ConfigError::MissingEmailUser)?,
            email_pass: env::var("EMAIL_PASS").map_err(|_| ConfigError::MissingEmailPass)?,
            org_email: env::var("ORG_EMAIL")
                .unwrap_or_else(|_| "farhan.enzo99@gmail.com".to_string()),
            brand_name: env::var("BRAND_NAME").unwrap_or_else(|_| "PayWifiBill".to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("Invalid SMTP port")]
    InvalidSmtpPort,
    #[error("SMTP_HOST environment variable is required")]
    MissingSmtpHost,
    #[error("EMAIL_USER environment variable is required")]
    MissingEmailUser,
    #[error("EMAIL_PASS environment variable is required")]
    MissingEmailPass,
}
