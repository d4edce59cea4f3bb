// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($ty) }
        }
    };
}

// ============================================================================
// CRIACAO EVENTS
// ============================================================================

/// Emitted when a batch is registered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriacaoRegistrada {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub criacao_id: String,
    pub raca: String,
}

impl CriacaoRegistrada {
    pub fn new(criacao_id: String, raca: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            criacao_id,
            raca,
        }
    }
}

impl_domain_event!(CriacaoRegistrada);

// ============================================================================
// COLETA EVENTS
// ============================================================================

/// Emitted when a collection is recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColetaRegistrada {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub coleta_id: i64,
    pub criacao_id: String,
    pub data: NaiveDate,
    pub quantidade: f64,
}

impl ColetaRegistrada {
    pub fn new(coleta_id: i64, criacao_id: String, data: NaiveDate, quantidade: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            coleta_id,
            criacao_id,
            data,
            quantidade,
        }
    }
}

impl_domain_event!(ColetaRegistrada);

/// Emitted when a collection is edited
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColetaAtualizada {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub coleta_id: i64,
    pub data_anterior: NaiveDate,
    pub data: NaiveDate,
    pub quantidade: f64,
}

impl ColetaAtualizada {
    pub fn new(coleta_id: i64, data_anterior: NaiveDate, data: NaiveDate, quantidade: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            coleta_id,
            data_anterior,
            data,
            quantidade,
        }
    }
}

impl_domain_event!(ColetaAtualizada);

/// Emitted when a collection is deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColetaRemovida {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub coleta_id: i64,
    pub criacao_id: String,
}

impl ColetaRemovida {
    pub fn new(coleta_id: i64, criacao_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            coleta_id,
            criacao_id,
        }
    }
}

impl_domain_event!(ColetaRemovida);
