use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    // App Settings
    pub app_name: String,
    pub version: String,

    // Server Settings
    pub host: String,
    pub port: u16,
    pub assets_dir: String,

    // Logging
    pub log_format: String,

    // Access Control
    pub protected_routes: Vec<String>,

    // Identity Provider
    pub auth_provider: String,
    pub session_cookie: String,
    pub session_secret: String,
    pub session_public_key: Option<String>,
    pub authorized_parties: Vec<String>,
    pub identity_api_url: String,
    pub identity_secret_key: String,
    pub identity_timeout_ms: u64,
    pub sign_in_url: String,
    pub sign_up_url: String,
}

impl Settings {
    pub fn new() -> Self {
        Settings {
            app_name: get_env("APP_NAME", "Shortly"),
            version: get_env("VERSION", "0.1.0"),

            host: get_env("HOST", "0.0.0.0"),
            port: get_env_parsed("PORT", 3000),
            assets_dir: get_env("ASSETS_DIR", "./public"),

            log_format: get_env("LOG_FORMAT", "text"),

            protected_routes: get_env_list("PROTECTED_ROUTES", "/dashboard(.*)"),

            auth_provider: get_env("AUTH_PROVIDER", "session-token"),
            session_cookie: get_env("SESSION_COOKIE", "__session"),
            session_secret: get_env(
                "SESSION_SECRET",
                "change-this-to-the-identity-provider-signing-secret",
            ),
            session_public_key: env::var("SESSION_PUBLIC_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            authorized_parties: get_env_list("AUTHORIZED_PARTIES", ""),
            identity_api_url: get_env("IDENTITY_API_URL", "https://api.identity.example.com"),
            identity_secret_key: get_env("IDENTITY_SECRET_KEY", ""),
            identity_timeout_ms: get_env_parsed("IDENTITY_TIMEOUT_MS", 5000),
            sign_in_url: get_env("SIGN_IN_URL", "/sign-in"),
            sign_up_url: get_env("SIGN_UP_URL", "/sign-up"),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::new);

pub fn get_settings() -> &'static Settings {
    &SETTINGS
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Falls back to `default` when unset or out of range for `T`
fn get_env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Comma-separated list, blanks dropped
fn get_env_list(key: &str, default: &str) -> Vec<String> {
    get_env(key, default)
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
