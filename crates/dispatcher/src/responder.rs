//! Guest reply seam.

use async_trait::async_trait;
use reply_brain::{Reply, ReplyBrain};

/// Produces replies to inbound guest messages. Must never fail.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate_reply(&self, text: &str, guest_name: &str, hotel_phone: &str) -> Reply;
}

#[async_trait]
impl ReplyGenerator for ReplyBrain {
    async fn generate_reply(&self, text: &str, guest_name: &str, hotel_phone: &str) -> Reply {
        ReplyBrain::generate_reply(self, text, guest_name, hotel_phone).await
    }
}
