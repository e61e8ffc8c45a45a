//! Archive record decoding, layered like a protocol module:
//! - `layout`: the field descriptor and byte widths (source of truth)
//! - `reader`: safe little-endian byte access, no domain knowledge
//! - `transform`: per-field raw-scalar-to-value decode rules
//! - `wind` / `forecast`: static code-to-text lookup tables
//! - `parser`: descriptor-driven decoding into the ordered mapping
//! - `error`: explicit, actionable errors
//!
//! Everything here is pure and synchronous; callers supply the 52-byte
//! buffer and consume the decoded mapping.

pub mod error;
pub mod forecast;
pub mod layout;
pub(crate) mod parser;
pub(crate) mod reader;
pub mod transform;
pub mod wind;
