//! Display driver implementations
//!
//! This crate drives the ST7735R controller on the 128x128 GLCD board over
//! the transport traits from `glcd-hal`:
//!
//! - Command framing on the command/data line
//! - Windowed rectangle and pixel drawing
//! - Origin corner (MADCTL) control with per-revision correction
//! - The power-up initialisation sequence
//! - A locked wrapper for sharing one display session

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod shared;
pub mod st7735;

#[cfg(test)]
mod mock;

pub use shared::SharedDisplay;
pub use st7735::{Error, St7735, TransferKind, Transport};
