use reqwest::Url;

use super::models::{TokenResponse, UserProfile};
use crate::config::ApiConfig;

/// Client for the handful of Graph API endpoints this service calls.
///
/// Endpoint URLs are derived from the configured base URLs at construction,
/// so tests can point the whole client at a local mock server. Calls share
/// one pooled `reqwest::Client`; no timeouts are configured beyond the
/// transport defaults.
#[derive(Clone, Debug)]
pub struct GraphClient {
    http: reqwest::Client,
    app_id: String,
    app_secret: String,
    redirect_uri: String,
    login_url: Url,
    token_url: Url,
    profile_url: Url,
    permissions_url: Url,
}

impl GraphClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let redirect_uri = config.redirect_uri();

        let mut login_url = config.dialog_base_url.join("/v12.0/dialog/oauth")?;
        login_url
            .query_pairs_mut()
            .append_pair("client_id", &config.app_id)
            .append_pair("redirect_uri", &redirect_uri)
            .append_pair("scope", "email,public_profile");

        Ok(Self {
            http: reqwest::Client::new(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            redirect_uri,
            login_url,
            token_url: config.graph_base_url.join("/v12.0/oauth/access_token")?,
            profile_url: config.graph_base_url.join("/me")?,
            permissions_url: config.graph_base_url.join("/me/permissions")?,
        })
    }

    /// Authorization dialog URL the browser is redirected to. Fixed per
    /// process: client id, redirect URI and scopes all come from config.
    pub fn login_dialog_url(&self) -> &str {
        self.login_url.as_str()
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, reqwest::Error> {
        self.http
            .get(self.token_url.clone())
            .query(&[
                ("client_id", self.app_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("client_secret", self.app_secret.as_str()),
                ("code", code),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch the logged-in user's profile fields.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, reqwest::Error> {
        self.http
            .get(self.profile_url.clone())
            .query(&[("fields", "id,name,email"), ("access_token", access_token)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Ask the provider to revoke all permissions granted to the app by the
    /// token's owner. This is the closest thing to "deleting" data the
    /// service can do, since it stores none of its own.
    pub async fn revoke_permissions(&self, access_token: &str) -> Result<(), reqwest::Error> {
        self.http
            .delete(self.permissions_url.clone())
            .query(&[("access_token", access_token)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::Environment;

    fn config() -> ApiConfig {
        ApiConfig {
            app_id: "424242".to_string(),
            app_secret: "shhh".to_string(),
            port: 3000,
            public_base_url: "http://localhost:3000".to_string(),
            public_dir: PathBuf::from("public"),
            graph_base_url: Url::parse("https://graph.facebook.com").unwrap(),
            dialog_base_url: Url::parse("https://www.facebook.com").unwrap(),
            verify_signed_requests: false,
            env: Environment::Development,
        }
    }

    #[test]
    fn login_dialog_url_carries_client_id_and_scopes() {
        let client = GraphClient::new(&config()).unwrap();
        let url = Url::parse(client.login_dialog_url()).unwrap();

        assert_eq!(url.host_str(), Some("www.facebook.com"));
        assert_eq!(url.path(), "/v12.0/dialog/oauth");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("client_id".to_string(), "424242".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:3000/fb-callback".to_string()
        )));
        assert!(pairs.contains(&("scope".to_string(), "email,public_profile".to_string())));
    }

    #[test]
    fn endpoint_urls_follow_the_configured_base() {
        let mut config = config();
        config.graph_base_url = Url::parse("http://127.0.0.1:4546").unwrap();

        let client = GraphClient::new(&config).unwrap();
        assert_eq!(
            client.token_url.as_str(),
            "http://127.0.0.1:4546/v12.0/oauth/access_token"
        );
        assert_eq!(client.profile_url.as_str(), "http://127.0.0.1:4546/me");
        assert_eq!(
            client.permissions_url.as_str(),
            "http://127.0.0.1:4546/me/permissions"
        );
    }
}
