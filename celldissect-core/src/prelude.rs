//! Convenient re-exports for common usage.
//!
//! This module provides a curated set of the most commonly used types
//! from celldissect-core, allowing you to import them with a single `use` statement.
//!
//! # Example
//!
//! ```rust
//! use celldissect_core::prelude::*;
//!
//! // Create a protocol registry with all built-in parsers
//! let registry = default_registry();
//! assert!(registry.get_parser("bssmap").is_some());
//! ```

// Schema types
pub use crate::schema::{ElementFormat, ElementSpec, ElementTable, FieldDescriptor, MessageTable};

// Engine types
pub use crate::engine::{DecodeContext, DecoderConfig, Diagnostic, Severity};

// Protocol types
pub use crate::protocol::{
    default_registry, dissect, BuiltinProtocol, Element, ElementStatus, Encapsulation, FieldValue,
    ParseContext, ParseResult, Protocol, ProtocolRegistry,
};

// Error types
pub use crate::error::DecodeError;
