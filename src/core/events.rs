use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::BookId;
use crate::utils::date::timestamp_serializer;

// DomainEventType defines the kind of committed catalog change
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Rented,
    Returned,
    Deleted,
}

impl DomainEventType {
    pub(crate) fn event_name(&self) -> &'static str {
        match self {
            DomainEventType::Added => "book_added",
            DomainEventType::Rented => "book_rented",
            DomainEventType::Returned => "book_returned",
            DomainEventType::Deleted => "book_deleted",
        }
    }
}

// DomainEvent records a catalog mutation after it has been applied
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "timestamp_serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn new<T: Serialize>(kind: DomainEventType, book_id: BookId,
                             metadata: HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: kind.event_name().to_string(),
            group: "books".to_string(),
            key: book_id.to_string(),
            kind,
            metadata,
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}
