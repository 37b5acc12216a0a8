use crate::{config::ApiConfig, facebook::GraphClient};

/// Shared, immutable state handed to every handler. Cheap to clone: one
/// pooled HTTP client plus a few strings.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub graph: GraphClient,
    pub app_secret: String,
    pub public_base_url: String,
    pub verify_signed_requests: bool,
}

impl ApiState {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        Ok(Self {
            graph: GraphClient::new(config)?,
            app_secret: config.app_secret.clone(),
            public_base_url: config.public_base_url.clone(),
            verify_signed_requests: config.verify_signed_requests,
        })
    }
}
