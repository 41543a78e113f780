use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Default bound of the in-process event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Domain events raised by admin mutations after they commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ReturnAdminApproved {
        return_id: i32,
        at: DateTime<Utc>,
    },
    ReturnAdminRejected {
        return_id: i32,
        at: DateTime<Utc>,
    },
    ReturnRefundCompleted {
        return_id: i32,
    },
    SellerVerificationChanged {
        seller_id: i32,
        is_verified: bool,
    },
    DesignerVerificationChanged {
        designer_id: i32,
        is_verified: bool,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::ReturnAdminApproved { .. } => "return.admin_approved",
            Event::ReturnAdminRejected { .. } => "return.admin_rejected",
            Event::ReturnRefundCompleted { .. } => "return.refund_completed",
            Event::SellerVerificationChanged { .. } => "seller.verification_changed",
            Event::DesignerVerificationChanged { .. } => "designer.verification_changed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Sends an event for a mutation that has already been committed.
    /// Delivery failures are logged and swallowed.
    pub async fn publish(&self, event: Event) {
        let name = event.name();
        if let Err(e) = self.send(event).await {
            warn!(event = name, error = %e, "event could not be published");
        }
    }
}

/// Creates a bounded event channel.
pub fn channel(capacity: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}

/// Consumes events until every sender is dropped.
///
/// Each event marks admin-console data as stale; for now they are only logged.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match &event {
            Event::ReturnAdminApproved { return_id, at } => {
                info!(event = event.name(), return_id, %at, "return approved by admin")
            }
            Event::ReturnAdminRejected { return_id, at } => {
                info!(event = event.name(), return_id, %at, "return rejected by admin")
            }
            Event::ReturnRefundCompleted { return_id } => {
                info!(event = event.name(), return_id, "refund completed")
            }
            Event::SellerVerificationChanged {
                seller_id,
                is_verified,
            } => info!(event = event.name(), seller_id, is_verified, "seller verification changed"),
            Event::DesignerVerificationChanged {
                designer_id,
                is_verified,
            } => info!(
                event = event.name(),
                designer_id, is_verified, "designer verification changed"
            ),
        }
    }

    info!("Event processing loop stopped");
}
