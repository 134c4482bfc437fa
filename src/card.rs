//! Digital member card with a rotating QR code.
//!
//! While the card is open a background task bumps a rotation counter every
//! refresh interval; the QR payload embeds the counter so a screenshot of
//! an old code stops matching. The counter survives close/reopen, the
//! task does not.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::models::MemberCard;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("QR generation failed: {0}")]
    QrGeneration(String),

    #[error("QR refresh needs a running tokio runtime")]
    NoRuntime,
}

/// Text encoded in the QR code.
pub fn qr_payload(card: &MemberCard, rotation: u64) -> String {
    format!("GAPS:{}:{}", card.member_id, rotation)
}

/// Render `payload` as an SVG QR code.
pub fn render_qr_svg(payload: &str) -> Result<String, CardError> {
    use qrcode::render::svg;
    use qrcode::QrCode;

    let code =
        QrCode::new(payload.as_bytes()).map_err(|e| CardError::QrGeneration(e.to_string()))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .max_dimensions(300, 300)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .quiet_zone(true)
        .build())
}

// ---------------------------------------------------------------------------
// Refresher
// ---------------------------------------------------------------------------

/// Background task bumping the rotation counter. Aborted on `stop` or drop.
pub struct QrRefresher {
    handle: Option<JoinHandle<()>>,
}

impl QrRefresher {
    /// Spawn on `runtime`. The first bump happens one full `interval`
    /// after start.
    pub fn spawn(runtime: &Handle, counter: Arc<AtomicU64>, interval: Duration) -> Self {
        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let rotation = counter.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::debug!(rotation, "QR code rotated");
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for QrRefresher {
    fn drop(&mut self) {
        self.stop();
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DigitalCardView<'a> {
    #[serde(flatten)]
    pub card: &'a MemberCard,
    pub rotation: u64,
    pub qr_payload: String,
    pub qr_svg: String,
}

pub struct DigitalCard {
    card: MemberCard,
    interval: Duration,
    counter: Arc<AtomicU64>,
    refresher: Option<QrRefresher>,
}

impl DigitalCard {
    pub fn new(card: MemberCard, interval: Duration) -> Self {
        Self {
            card,
            interval,
            counter: Arc::new(AtomicU64::new(0)),
            refresher: None,
        }
    }

    pub fn card(&self) -> &MemberCard {
        &self.card
    }

    pub fn rotation(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresher.as_ref().is_some_and(QrRefresher::is_running)
    }

    /// Start rotating on the current tokio runtime. Opening an open card
    /// keeps the running refresher.
    pub fn start(&mut self) -> Result<(), CardError> {
        if self.refresher.is_some() {
            return Ok(());
        }
        let runtime = Handle::try_current().map_err(|_| CardError::NoRuntime)?;
        self.refresher = Some(QrRefresher::spawn(&runtime, self.counter.clone(), self.interval));
        tracing::debug!(interval_secs = self.interval.as_secs(), "QR refresh started");
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.refresher.take().is_some() {
            tracing::debug!(rotation = self.rotation(), "QR refresh stopped");
        }
    }

    pub fn view(&self) -> Result<DigitalCardView<'_>, CardError> {
        let rotation = self.rotation();
        let payload = qr_payload(&self.card, rotation);
        Ok(DigitalCardView {
            card: &self.card,
            rotation,
            qr_svg: render_qr_svg(&payload)?,
            qr_payload: payload,
        })
    }
}
