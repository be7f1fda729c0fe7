//! Type encodings.
//!
//! Objective-C runtime type encodings (`i`, `^^i`, `{CGPoint=dd}`, `@?`, ...)
//! for resolved types:
//!
//! - [`table`] — fixed tag/encoding tables and encoding helpers
//! - [`synth`] — recursive synthesis for types the front-end did not encode
//!
//! The synthesizer only sees registered records and typedefs through the
//! [`EncodingLookup`] trait, so it sits below the definition model.

pub mod synth;
pub mod table;


pub use synth::{Encoded, EncodingLookup, RecordShape, Rebound, Synthesizer, TypeShape};
pub use table::{
    BLOCK_ENCODING, CLASS_ENCODING, DOUBLE_FUNCTION_POINTER_ENCODING, FUNCTION_POINTER_ENCODING,
    INSTANCETYPE, OBJECT_ENCODING, SELECTOR_ENCODING, UNKNOWN_ENCODING, encoding_for_tag,
    filter_encoding, needs_resolving, primitive_encoding, tag_for_encoding, tag_for_kind,
};
