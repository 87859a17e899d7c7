use std::env;
use std::time::Duration;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Company facts shown on the contact panel. These are plain data, not
/// translations, so they live in the configuration instead of the
/// locale bundles.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_facebook_url")]
    pub facebook_url: String,
    #[serde(default = "default_vat")]
    pub vat: String,
    #[serde(default = "default_register")]
    pub register: String,
    #[serde(default = "default_bank_name")]
    pub bank_name: String,
    #[serde(default = "default_iban")]
    pub iban: String,
    #[serde(default = "default_bic")]
    pub bic: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            contact_email: default_contact_email(),
            phone: default_phone(),
            address: default_address(),
            facebook_url: default_facebook_url(),
            vat: default_vat(),
            register: default_register(),
            bank_name: default_bank_name(),
            iban: default_iban(),
            bic: default_bic(),
        }
    }
}

fn default_company_name() -> String {
    "Harald Bleiner GmbH".to_string()
}

fn default_contact_email() -> String {
    "haraldbleinergmbh@gmail.com".to_string()
}

fn default_phone() -> String {
    "0664 / 462 17 57".to_string()
}

fn default_address() -> String {
    "Wolfernstraße 20b, 4400 Steyr, Austria".to_string()
}

fn default_facebook_url() -> String {
    "https://www.facebook.com/harald.bleiner".to_string()
}

fn default_vat() -> String {
    "ATU79792814".to_string()
}

fn default_register() -> String {
    "611331 t".to_string()
}

fn default_bank_name() -> String {
    "Raiffeisenbank Sierning-Enns".to_string()
}

fn default_iban() -> String {
    "AT84 3456 0000 0203 3538".to_string()
}

fn default_bic() -> String {
    "RZOOAT2L560".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Delay of the simulated delivery backend.
    #[serde(default = "default_send_delay_ms")]
    pub send_delay_ms: u64,
    /// How long the success message stays up before the form resets.
    #[serde(default = "default_success_reset_secs")]
    pub success_reset_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: default_send_delay_ms(),
            success_reset_secs: default_success_reset_secs(),
        }
    }
}

impl ContactConfig {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn success_reset(&self) -> Duration {
        Duration::from_secs(self.success_reset_secs)
    }
}

fn default_send_delay_ms() -> u64 {
    1500
}

fn default_success_reset_secs() -> u64 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (BLEINER__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional, defaults carry a full site.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BLEINER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.site.contact_email.contains('@') {
            return Err("site.contact_email must be an email address".to_string());
        }
        if self.contact.success_reset_secs == 0 {
            return Err("contact.success_reset_secs must be at least 1".to_string());
        }
        Ok(())
    }
}
