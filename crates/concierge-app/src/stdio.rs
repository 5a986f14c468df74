//! Line-oriented stdin/stdout transport.
//!
//! The production chat network sits behind the [`ChatTransport`] trait; this
//! implementation stands in for it so the engine runs end-to-end locally.
//! Each stdin line becomes one direct message; replies print to stdout.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;

use concierge_chat::{ChatError, ChatTransport, InboundMessage};

const CONVERSATION_ID: &str = "stdio";

pub struct StdioTransport;

impl StdioTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for StdioTransport {
    fn name(&self) -> &str {
        "stdio"
    }

    async fn send_text(&self, _conversation_id: &str, text: &str) -> Result<(), ChatError> {
        println!("{}", text);
        Ok(())
    }

    fn start_receiving(&self) -> mpsc::UnboundedReceiver<InboundMessage> {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        if tx
                            .send(InboundMessage::direct(CONVERSATION_ID, "local", line))
                            .is_err()
                        {
                            break; // dispatch loop gone
                        }
                    }
                    Ok(None) => break, // EOF
                    Err(e) => {
                        warn!(error = %e, "Failed to read from stdin");
                        break;
                    }
                }
            }
        });

        rx
    }
}
