//! pcmgen CLI library.
//!
//! This crate provides the command implementations behind the `pcmgen`
//! binary: generating raw PCM files, inspecting existing ones, and listing
//! the supported sample formats.

pub mod commands;
