#![allow(dead_code)]

use description_service::config::{DescriptionConfig, GenerationConfig, OpenRouterConfig};
use description_service::services::TemplateSelector;
use description_service::services::templates::FixedSelector;
use description_service::startup::{AppState, Application};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_API_KEY: &str = "sk-or-test-key";
pub const TEST_TITLE: &str = "Chaise ergonomique";

/// Config pointing at `base_url` with a short upstream timeout.
pub fn test_config(api_key: Option<&str>, base_url: &str) -> DescriptionConfig {
    DescriptionConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        openrouter: OpenRouterConfig {
            api_key: api_key.map(|k| Secret::new(k.to_string())),
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(2),
            ..OpenRouterConfig::default()
        },
        generation: GenerationConfig::default(),
    }
}

/// A URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(config: DescriptionConfig) -> Self {
        Self::spawn_with_selector(config, Arc::new(FixedSelector(0))).await
    }

    pub async fn spawn_with_selector(
        config: DescriptionConfig,
        selector: Arc<dyn TemplateSelector>,
    ) -> Self {
        let state = AppState::new(config, selector).expect("Failed to build app state");
        let app = Application::with_state(state)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn description_url(&self) -> String {
        format!("{}/api/ai/description", self.address)
    }

    pub async fn post_description(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.description_url())
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
