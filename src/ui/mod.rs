//! Presentation layer: cart screen, clear dialog, terminal primitives.

pub mod clear;
pub mod format;
pub mod messages;
pub mod mvi;
pub mod prompt;
pub mod shell;
