//! Logic Module - Inference Adapter & Engines
//!
//! Everything between the form and the rendered prediction:
//!
//! - `employee` - Typed input record (closed enums, bounded fields)
//! - `features/` - Versioned feature layout, vector, encoding
//! - `model/` - Model artifact loading + ONNX inference
//! - `risk/` - Threshold rules and risk-factor derivation
//! - `adapter` - encode -> predict -> annotate, one call per request

pub mod adapter;
pub mod employee;
pub mod features;
pub mod model;
pub mod risk;
