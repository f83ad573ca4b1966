use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use quickquid_notification::{DeliveryConfig, DeliveryProvider, NotificationPayload};
use quickquid_submission::{
    Clock, FallbackPayload, Forms, MailHandoff, PageContext, SiteConfig, TimingConfig,
};
use time::{OffsetDateTime, macros::datetime};
use tokio::sync::Semaphore;

#[derive(Debug, Clone)]
pub struct Call {
    pub service_id: String,
    pub template_id: String,
    pub payload: NotificationPayload,
}

#[derive(Default)]
pub struct MockProvider {
    calls: Mutex<Vec<Call>>,
    fail: bool,
    gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)]
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

    /// Every send waits for a permit on the returned semaphore.
    pub fn gated(fail: bool) -> (Arc<Self>, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let provider = Arc::new(Self {
            fail,
            gate: Some(gate.clone()),
            ..Default::default()
        });

        (provider, gate)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryProvider for MockProvider {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &NotificationPayload,
    ) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(Call {
            service_id: service_id.to_owned(),
            template_id: template_id.to_owned(),
            payload: payload.clone(),
        });

        if let Some(gate) = &self.gate {
            gate.acquire().await?.forget();
        }

        if self.fail {
            anyhow::bail!("provider unavailable");
        }

        Ok(())
    }
}

/// Does its delivery on the blocking pool, out of reach of the caller's
/// future, and records the most sends it ever saw running at once.
pub struct DetachedProvider {
    work: Duration,
    running: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl DetachedProvider {
    pub fn new(work: Duration) -> Arc<Self> {
        Arc::new(Self {
            work,
            running: Arc::default(),
            peak: Arc::default(),
        })
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeliveryProvider for DetachedProvider {
    async fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        _payload: &NotificationPayload,
    ) -> anyhow::Result<()> {
        let work = self.work;
        let running = self.running.clone();
        let peak = self.peak.clone();

        tokio::task::spawn_blocking(move || {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(work);
            running.fetch_sub(1, Ordering::SeqCst);
        })
        .await?;

        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingHandoff {
    opened: Mutex<Vec<FallbackPayload>>,
}

#[allow(dead_code)]
impl RecordingHandoff {
    pub fn opened(&self) -> Vec<FallbackPayload> {
        self.opened.lock().unwrap().clone()
    }
}

impl MailHandoff for RecordingHandoff {
    fn open(&self, fallback: &FallbackPayload) {
        self.opened.lock().unwrap().push(fallback.clone());
    }
}

pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

pub fn delivery_config() -> DeliveryConfig {
    DeliveryConfig {
        service_id: "service_test".to_owned(),
        contact_template_id: "template_contact".to_owned(),
        waitlist_template_id: "template_waitlist".to_owned(),
        ..Default::default()
    }
}

pub fn setup_forms(provider: Arc<dyn DeliveryProvider>) -> (Forms, Arc<RecordingHandoff>) {
    let handoff = Arc::new(RecordingHandoff::default());
    let forms = Forms::new(
        SiteConfig::default(),
        TimingConfig::default(),
        &delivery_config(),
        provider,
        Arc::new(FixedClock(datetime!(2026-10-19 14:30:05 +05:30))),
        handoff.clone(),
    );

    (forms, handoff)
}

pub fn page() -> PageContext {
    PageContext::new("https://quickquid.in/#contact", "Mozilla/5.0 (X11; Linux x86_64)")
}
