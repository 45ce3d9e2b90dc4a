//! Board-agnostic model of the ST7735R display controller
//!
//! This crate contains everything about the panel that does not touch a bus:
//!
//! - Instruction opcode table and parameter counts
//! - 24-bit colour values and their wire encoding
//! - The MADCTL mirror/exchange register as a value type
//! - Addressing windows and per-revision coordinate correction
//! - Interface pixel format and gamma selection
//! - Display session configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod format;
pub mod instruction;
pub mod madctl;
pub mod orientation;
pub mod panel;
pub mod window;

// Re-export key types
pub use color::Color;
pub use config::DisplayConfig;
pub use format::{ColorFormat, GammaCurve};
pub use instruction::Instruction;
pub use madctl::{ColorOrder, Madctl, Origin};
pub use orientation::Orientation;
pub use panel::PanelRevision;
pub use window::{Window, WindowError};
