//! # propstore-value
//!
//! Typed property values and the codec that maps them to the text stored
//! in the property table.
//!
//! ## Storage Format
//!
//! Every value is persisted as text alongside its [`TypeTag`] ordinal:
//!
//! | Tag      | Ordinal | Text form                     |
//! |----------|---------|-------------------------------|
//! | `string` | 0       | the string itself             |
//! | `int32`  | 1       | decimal                       |
//! | `int64`  | 2       | decimal                       |
//! | `double` | 3       | shortest round-trip decimal   |
//! | `bool`   | 4       | `true` / `false`              |
//! | `blob`   | 5       | standard base64, padded       |
//!
//! Encoding never fails. Decoding is strict: anything that does not parse
//! under the requested tag is a [`CodecError`].

mod codec;
mod error;
mod types;

pub use codec::{decode, encode};
pub use error::CodecError;
pub use types::{PropertyType, TypeTag, Value};
