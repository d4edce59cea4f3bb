// src/events/mod.rs
//
// Internal Event System - Public API

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{ColetaAtualizada, ColetaRegistrada, ColetaRemovida, CriacaoRegistrada};

pub use bus::{EventBus, EventLogEntry};

/// Subscribe handlers that write every collection change to the log
pub fn register_logging_handlers(bus: &EventBus) {
    bus.subscribe::<CriacaoRegistrada, _>(|event| {
        log::info!("Criacao {} registered ({})", event.criacao_id, event.raca);
    });
    bus.subscribe::<ColetaRegistrada, _>(|event| {
        log::info!(
            "Coleta {} recorded for {} on {}: {}",
            event.coleta_id, event.criacao_id, event.data, event.quantidade
        );
    });
    bus.subscribe::<ColetaAtualizada, _>(|event| {
        log::info!(
            "Coleta {} updated: {} -> {} ({})",
            event.coleta_id, event.data_anterior, event.data, event.quantidade
        );
    });
    bus.subscribe::<ColetaRemovida, _>(|event| {
        log::info!("Coleta {} of {} deleted", event.coleta_id, event.criacao_id);
    });
}
