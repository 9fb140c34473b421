//! Notification broadcast console: message validation, device tokens and batched push delivery.

pub mod gateway;
pub mod message;
pub mod router;

pub use gateway::{
    BroadcastError, BroadcastReport, BroadcastTarget, DeliveryStatus, NotificationDeliveryError,
    NotificationGateway, PushSink, PushTransportError, TokenRegistry, TokenStatus,
    DEFAULT_BATCH_SIZE,
};
pub use message::{BroadcastMessage, MessageError, BODY_MAX_CHARS, TITLE_MAX_CHARS};
pub use router::broadcast_router;
