use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope around a published event payload.
///
/// Carries the identifiers a consumer needs to deduplicate and to stitch a
/// notification back to the request that caused it:
/// - `event_id` is unique per publication (UUIDv7, time-ordered).
/// - `correlation_id` ties the event to the originating operation; every
///   event published while serving one request shares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    correlation_id: Uuid,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, correlation_id: Uuid, payload: E) -> Self {
        Self {
            event_id,
            correlation_id,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
