// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Implementation details that support the domain
// but are not part of the domain itself.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
