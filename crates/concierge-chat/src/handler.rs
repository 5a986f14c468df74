//! Message handler: the orchestrator for one inbound chat message.
//!
//! Wires parser, registry, inventory source, resolver, and formatter into a
//! single terminal pipeline. Every message yields at most one reply; every
//! failure is converted to a fixed reply plus a log line, and nothing
//! propagates out to the dispatch loop.

use std::sync::Arc;

use tracing::{debug, error};

use concierge_inventory::{resolve, InventorySource};

use crate::channel::InboundMessage;
use crate::error::ChatError;
use crate::parser::QueryParser;
use crate::registry::RoomRegistry;
use crate::reply::ReplyFormatter;

/// Reply for messages that do not match the query grammar.
pub const USAGE_REPLY: &str =
    "Please ask in the format: <room abbr> <startDay>-<endDay> <month>\nExample: bfs 5-9 jul";

/// Reply for codes not present in the registry.
pub const UNKNOWN_ROOM_REPLY: &str = "Unknown room abbreviation.";

/// Reply when the inventory cannot be fetched. The cause is logged, never
/// shown to the user.
pub const INVENTORY_ERROR_REPLY: &str = "Error checking availability.";

/// Per-message orchestrator. Holds only read-only collaborators, so a single
/// instance is shared across concurrent message tasks.
pub struct MessageHandler {
    parser: QueryParser,
    registry: Arc<RoomRegistry>,
    inventory: Arc<dyn InventorySource>,
    formatter: ReplyFormatter,
}

impl MessageHandler {
    pub fn new(registry: Arc<RoomRegistry>, inventory: Arc<dyn InventorySource>) -> Self {
        Self {
            parser: QueryParser::new(),
            registry,
            inventory,
            formatter: ReplyFormatter::new(),
        }
    }

    /// Handle one inbound message to completion.
    ///
    /// Returns the reply text, or `None` for messages that are silently
    /// dropped (group/broadcast chatter). Never panics and never returns an
    /// error: all failures become one of the fixed replies.
    pub async fn handle_message(&self, msg: &InboundMessage) -> Option<String> {
        if msg.is_group {
            debug!(conversation = %msg.conversation_id, "Ignoring group message");
            return None;
        }

        match self.try_handle(msg.text.trim()).await {
            Ok(reply) => Some(reply),
            Err(err) => {
                match &err {
                    ChatError::Inventory(cause) => {
                        error!(error = %cause, "Inventory fetch failed");
                    }
                    other => {
                        debug!(error = %other, text = %msg.text, "Query rejected");
                    }
                }
                Some(err.user_reply().to_string())
            }
        }
    }

    async fn try_handle(&self, text: &str) -> Result<String, ChatError> {
        let query = self
            .parser
            .parse(text)
            .ok_or(ChatError::UnrecognizedFormat)?;

        let room_type = self
            .registry
            .resolve(&query.code)
            .ok_or_else(|| ChatError::UnknownRoomCode(query.code.clone()))?;

        let table = self.inventory.fetch_inventory().await?;
        let result = resolve(&query, room_type, &table);
        Ok(self.formatter.format(&query.code, &result))
    }
}
