//! Chat transport seam and bounded-concurrency message dispatch.
//!
//! The transport's connection and session lifecycle live outside this crate;
//! here it is only an interface: inbound messages arrive on a channel, and
//! replies go out through `send_text`. The dispatch loop spawns one
//! short-lived task per message, bounded by a semaphore, and survives any
//! handler or send failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Semaphore};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ChatError;
use crate::handler::MessageHandler;

/// One received chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub id: Uuid,
    /// Transport-specific conversation identifier, used to address the reply.
    pub conversation_id: String,
    pub sender: String,
    pub text: String,
    /// Group/broadcast messages are silently dropped by the handler.
    pub is_group: bool,
}

impl InboundMessage {
    pub fn direct(
        conversation_id: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation_id: conversation_id.into(),
            sender: sender.into(),
            text: text.into(),
            is_group: false,
        }
    }

    pub fn group(
        conversation_id: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            is_group: true,
            ..Self::direct(conversation_id, sender, text)
        }
    }
}

/// A chat transport the bot can receive from and reply through.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Transport display name for logs.
    fn name(&self) -> &str;

    /// Send a plain-text reply to a conversation.
    async fn send_text(&self, conversation_id: &str, text: &str) -> Result<(), ChatError>;

    /// Start receiving messages. The transport feeds the returned channel
    /// from its own background task; the channel closes when the transport
    /// shuts down.
    fn start_receiving(&self) -> mpsc::UnboundedReceiver<InboundMessage>;
}

/// Consume the transport's inbound stream until it closes, handling each
/// message in its own task. At most `max_in_flight` messages are processed
/// concurrently; the tasks share no mutable state. Reply-send failures are
/// logged and do not stop the loop.
pub async fn run_dispatch(
    transport: Arc<dyn ChatTransport>,
    handler: Arc<MessageHandler>,
    max_in_flight: usize,
) {
    let mut inbound = transport.start_receiving();
    let permits = Arc::new(Semaphore::new(max_in_flight.max(1)));

    info!(transport = transport.name(), "Message dispatch started");

    while let Some(msg) = inbound.recv().await {
        let permit = match Arc::clone(&permits).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break, // semaphore closed, loop is shutting down
        };
        let transport = Arc::clone(&transport);
        let handler = Arc::clone(&handler);

        tokio::spawn(async move {
            let _permit = permit;
            if let Some(reply) = handler.handle_message(&msg).await {
                if let Err(e) = transport.send_text(&msg.conversation_id, &reply).await {
                    warn!(
                        error = %e,
                        conversation = %msg.conversation_id,
                        "Failed to send reply"
                    );
                }
            }
        });
    }

    info!("Inbound message stream closed; dispatch ending");
}
