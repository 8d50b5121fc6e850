// src/page/message.rs
//! Messages posted from the page context to the host.
//!
//! On the wire a message is an untyped JSON value, like a `postMessage`
//! payload. The host only acts on values whose `type` it knows; everything
//! else on the channel is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::order::OrderRecord;

pub const ORDERS_DATA: &str = "ORDERS_DATA";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PageMessage {
    #[serde(rename = "ORDERS_DATA")]
    OrdersData { orders: Vec<OrderRecord> },
}

impl PageMessage {
    /// Encode for posting across the boundary.
    pub fn to_value(&self) -> Value {
        // Only derive-serialized strings and maps in here; can't fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Host-side filter. Unknown `type`, missing `type`, or a known type with
    /// a malformed body all come back as `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let kind = value.get("type")?.as_str()?;
        if kind != ORDERS_DATA {
            logd!("Bridge: Ignoring message type={kind}");
            return None;
        }
        match serde_json::from_value(value.clone()) {
            Ok(msg) => Some(msg),
            Err(e) => {
                loge!("Bridge: Malformed {kind} message: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_matches_post_message_payload() {
        let msg = PageMessage::OrdersData { orders: vec![OrderRecord::new("A", "u", "v", "1")] };
        assert_eq!(
            msg.to_value(),
            json!({
                "type": "ORDERS_DATA",
                "orders": [{ "title": "A", "url": "u", "variation": "v", "count": "1" }]
            })
        );
    }

    #[test]
    fn filters_on_type_only() {
        assert_eq!(PageMessage::from_value(&json!({ "type": "PING", "orders": [] })), None);
        assert_eq!(PageMessage::from_value(&json!({ "orders": [] })), None);
        assert_eq!(PageMessage::from_value(&json!("ORDERS_DATA")), None);
        assert_eq!(
            PageMessage::from_value(&json!({ "type": "ORDERS_DATA", "orders": [] })),
            Some(PageMessage::OrdersData { orders: vec![] })
        );
    }
}
