#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request};
use http_body_util::BodyExt;
use quickquid::{AppState, Config, routes};
use quickquid_notification::{DeliveryProvider, NotificationPayload};
use quickquid_submission::{Forms, SystemClock, TracingHandoff};
use tokio::sync::Semaphore;

#[derive(Default)]
pub struct MockProvider {
    calls: Mutex<Vec<(String, NotificationPayload)>>,
    fail: bool,
    gate: Option<Arc<Semaphore>>,
}

impl MockProvider {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn gated() -> (Arc<Self>, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let provider = Arc::new(Self {
            gate: Some(gate.clone()),
            ..Default::default()
        });

        (provider, gate)
    }

    /// Template id and payload of every send, in order.
    pub fn calls(&self) -> Vec<(String, NotificationPayload)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryProvider for MockProvider {
    async fn send(
        &self,
        _service_id: &str,
        template_id: &str,
        payload: &NotificationPayload,
    ) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((template_id.to_owned(), payload.clone()));

        if let Some(gate) = &self.gate {
            gate.acquire().await?.forget();
        }

        if self.fail {
            anyhow::bail!("provider unavailable");
        }

        Ok(())
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.delivery.service_id = "service_test".to_owned();
    config.delivery.contact_template_id = "template_contact".to_owned();
    config
}

pub fn setup_app(provider: Arc<MockProvider>) -> (Router, Forms) {
    let config = test_config();
    let forms = Forms::new(
        config.site.clone(),
        config.submission,
        &config.delivery,
        provider,
        Arc::new(SystemClock::new(config.site.display_offset_minutes)),
        Arc::new(TracingHandoff),
    );

    let app = routes::router(AppState::new(config, forms.clone()));

    (app, forms)
}

pub fn form_post(uri: &str, fields: &[(&str, &str)]) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .header("user-agent", "Mozilla/5.0 (X11; Linux x86_64)")
        .header("referer", "https://quickquid.in/#contact")
        .body(Body::from(serde_urlencoded::to_string(fields)?))?)
}

pub fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().uri(uri).body(Body::empty())?)
}

pub async fn json_body(response: axum::response::Response) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}
