//! Conversational interface for the concierge bot.
//!
//! Turns free-text chat messages into structured availability lookups and
//! renders the result back as a plain-text reply. Provides the abbreviation
//! registry, the query parser, the reply formatter, the transport seam, and
//! the message handler wiring them together.

pub mod channel;
pub mod error;
pub mod handler;
pub mod parser;
pub mod registry;
pub mod reply;

pub use channel::{run_dispatch, ChatTransport, InboundMessage};
pub use error::ChatError;
pub use handler::{MessageHandler, INVENTORY_ERROR_REPLY, UNKNOWN_ROOM_REPLY, USAGE_REPLY};
pub use parser::QueryParser;
pub use registry::RoomRegistry;
pub use reply::ReplyFormatter;

#[cfg(test)]
pub(crate) mod testutil;
