//! Error taxonomy for the conversational interface.

use concierge_inventory::InventoryError;

use crate::handler::{INVENTORY_ERROR_REPLY, UNKNOWN_ROOM_REPLY, USAGE_REPLY};

/// Errors from handling a chat message.
///
/// Every variant maps to exactly one fixed user-facing reply via
/// [`ChatError::user_reply`]; internal details are for the log only.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message does not match the query format")]
    UnrecognizedFormat,
    #[error("unknown room code: {0}")]
    UnknownRoomCode(String),
    #[error("inventory unavailable: {0}")]
    Inventory(#[from] InventoryError),
    #[error("transport error: {0}")]
    Transport(String),
}

impl ChatError {
    /// The fixed reply shown to the user for this failure.
    pub fn user_reply(&self) -> &'static str {
        match self {
            ChatError::UnrecognizedFormat => USAGE_REPLY,
            ChatError::UnknownRoomCode(_) => UNKNOWN_ROOM_REPLY,
            ChatError::Inventory(_) | ChatError::Transport(_) => INVENTORY_ERROR_REPLY,
        }
    }
}
