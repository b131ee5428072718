//! UI Module - Terminal Presentation Layer
//!
//! Thin by design: bounded prompts in, rendered text out. All decision
//! logic lives in `logic`.

pub mod form;
pub mod render;
