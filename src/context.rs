//! Application Context
//!
//! Shared backend gateway provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpGateway;
use crate::config::ApiConfig;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    gateway: Arc<HttpGateway>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        log::info!("[APP] Backend at {} / {}", config.base_url, config.v1_base_url);
        Self {
            gateway: Arc::new(HttpGateway::new(config)),
        }
    }

    pub fn gateway(&self) -> Arc<HttpGateway> {
        self.gateway.clone()
    }
}

/// Gateway from the nearest `AppContext`
pub fn use_gateway() -> Arc<HttpGateway> {
    expect_context::<AppContext>().gateway()
}
