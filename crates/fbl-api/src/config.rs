use std::{env, path::PathBuf};

use anyhow::Context;
use reqwest::Url;

const DEFAULT_PORT: u16 = 3000;

/// Deployment environment, selected with the `ENVIRONMENT` variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Process-wide configuration, read once at startup and immutable afterwards.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub app_id: String,
    pub app_secret: String,
    pub port: u16,
    /// Externally visible base URL, used for the OAuth redirect URI and the
    /// deletion confirmation URL. Stored without a trailing slash.
    pub public_base_url: String,
    pub public_dir: PathBuf,
    /// Graph API base, overridable so tests can point at a local mock.
    pub graph_base_url: Url,
    /// Login dialog base, overridable the same way.
    pub dialog_base_url: Url,
    /// When enabled, data-deletion webhook signatures are checked against
    /// the app secret. Off by default to match the provider-facing behavior
    /// the service shipped with.
    pub verify_signed_requests: bool,
    pub env: Environment,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let app_id = env::var("FB_APP_ID").context("FB_APP_ID not set")?;
        let app_secret = env::var("FB_APP_SECRET").context("FB_APP_SECRET not set")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();

        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let graph_base_url = base_url_var("FB_GRAPH_BASE_URL", "https://graph.facebook.com")?;
        let dialog_base_url = base_url_var("FB_DIALOG_BASE_URL", "https://www.facebook.com")?;

        let verify_signed_requests = env::var("FB_VERIFY_SIGNED_REQUESTS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let environment = match env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Self {
            app_id,
            app_secret,
            port,
            public_base_url,
            public_dir,
            graph_base_url,
            dialog_base_url,
            verify_signed_requests,
            env: environment,
        })
    }

    /// Callback URL registered with the provider.
    pub fn redirect_uri(&self) -> String {
        format!("{}/fb-callback", self.public_base_url)
    }
}

fn base_url_var(var: &str, default: &str) -> anyhow::Result<Url> {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).with_context(|| format!("{var} is not a valid URL: {raw}"))
}
