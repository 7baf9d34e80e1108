use log::warn;

pub const DEFAULT_API_URL: &str = "https://portal-pausa-backend.onrender.com";

/// Development builds get the diagnostics panel and the simulated backend
/// fallback; production builds never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn parse(value: &str) -> Option<Mode> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Mode::Development),
            "production" | "prod" => Some(Mode::Production),
            _ => None,
        }
    }

    #[cfg(debug_assertions)]
    pub fn build_default() -> Mode {
        Mode::Development
    }

    #[cfg(not(debug_assertions))]
    pub fn build_default() -> Mode {
        Mode::Production
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub mode: Mode,
}

impl AppConfig {
    /// Reads `PORTAL_PAUSA_API_URL` and `PORTAL_PAUSA_MODE` as baked in at build time.
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("PORTAL_PAUSA_API_URL"),
            option_env!("PORTAL_PAUSA_MODE"),
        )
    }

    pub fn resolve(api_url: Option<&str>, mode: Option<&str>) -> Self {
        let api_base_url = match api_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => DEFAULT_API_URL.to_string(),
        };

        let mode = match mode {
            Some(raw) => Mode::parse(raw).unwrap_or_else(|| {
                warn!("Unknown operating mode '{}', using build default", raw);
                Mode::build_default()
            }),
            None => Mode::build_default(),
        };

        Self { api_base_url, mode }
    }

    pub fn contact_url(&self) -> String {
        format!("{}/api/contact", self.api_base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_base_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
