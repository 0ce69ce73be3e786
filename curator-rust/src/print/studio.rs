use super::{PrintQuote, PrintSelection};
use crate::artwork::Artwork;
use serde::Serialize;
use std::time::Duration;
use tracing::info_span;
use tracing_futures::Instrument;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_MOCKUP_DELAY: Duration = Duration::from_millis(1500);

const ORDER_CONFIRMATION: &str = "Pedido simulado enviado para produção!";

/// Acknowledgement of a submitted configuration. Nothing is ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedOrder {
    pub artwork_id: String,
    pub quote: PrintQuote,
    pub message: &'static str,
}

/// Staging suggestion for a print in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockupConfig {
    pub artwork_id: String,
    pub mood: String,
    pub room_type: String,
    pub selection: PrintSelection,
}

/// The print configurator's back end. A demo: both operations only wait.
#[derive(Debug, Clone, Copy)]
pub struct PrintStudio {
    submit_delay: Duration,
    mockup_delay: Duration,
}

impl Default for PrintStudio {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            mockup_delay: DEFAULT_MOCKUP_DELAY,
        }
    }
}

impl PrintStudio {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delays(mut self, submit: Duration, mockup: Duration) -> Self {
        self.submit_delay = submit;
        self.mockup_delay = mockup;
        self
    }

    pub async fn submit(&self, artwork: &Artwork, selection: PrintSelection) -> SimulatedOrder {
        let span = info_span!(
            "arte_curator.print.submit",
            artwork = %artwork.id,
            size = selection.size.id(),
            frame = selection.frame.id()
        );
        async {
            tokio::time::sleep(self.submit_delay).await;
            tracing::info!(total = %selection.price(), "simulated print order sent");
            SimulatedOrder {
                artwork_id: artwork.id.clone(),
                quote: selection.quote(),
                message: ORDER_CONFIRMATION,
            }
        }
        .instrument(span)
        .await
    }

    /// Suggests a staging for `artwork`. No model is consulted; the
    /// suggestion carries the default selection.
    pub async fn suggest_mockup(&self, artwork: &Artwork, mood: &str, room: &str) -> MockupConfig {
        tokio::time::sleep(self.mockup_delay).await;
        MockupConfig {
            artwork_id: artwork.id.clone(),
            mood: mood.to_string(),
            room_type: room.to_string(),
            selection: PrintSelection::default(),
        }
    }
}
