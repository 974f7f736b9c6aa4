use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub seed_doctors: bool,
    pub opd_token_start: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            seed_doctors: true,
            opd_token_start: 1,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut config = Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| {
                    warn!("SERVER_HOST not set, using default");
                    defaults.server_host.clone()
                }),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            seed_doctors: parse_var("SEED_DOCTORS", defaults.seed_doctors),
            opd_token_start: parse_var("OPD_TOKEN_START", defaults.opd_token_start),
        };

        if config.opd_token_start == 0 {
            warn!("OPD_TOKEN_START must be at least 1, tokens will start at 1");
            config.opd_token_start = 1;
        }

        if !config.is_configured() {
            warn!("Application not fully configured - SERVER_HOST is empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        self.opd_token_start > 0 && !self.server_host.is_empty()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", key, default);
            default
        }
    }
}
