//! Nutrino Chat Library
//!
//! This crate provides the scripted chat screen behind the `nutrino-chat`
//! terminal application.

pub mod chat;
pub mod haptics;
pub mod nav;
pub mod runner;
pub mod tui;
