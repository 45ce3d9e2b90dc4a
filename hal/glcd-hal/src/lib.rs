//! Glcd Hardware Abstraction Layer
//!
//! This crate defines the transport contract the display driver is written
//! against. Chip-specific code (or the `embedded-hal` adapters behind the
//! `embedded-hal` feature) implements these traits so the same driver runs on
//! any host processor.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  glcd-drivers (ST7735R protocol engine) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glcd-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  board code   │
//! │   adapters    │       │ (direct regs) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip-select and command/data lines
//! - [`spi::SpiBus`] - Write-only serial byte channel
//! - [`delay::DelayMs`] - Blocking millisecond waits

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "embedded-hal")]
pub mod adapters;
pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use spi::SpiBus;
