//! Declarative field-mapping codec.
//!
//! A type opts in by holding one slot per wire field and declaring its
//! field table; the orchestrator then decodes and encodes it against a
//! keyed JSON container with no hand-written per-type logic:
//! - [`OptionalSlot`] / [`RequiredSlot`]: plain fields, absence tolerated
//!   or flagged
//! - [`TransformSlot`] / [`StrictTransformSlot`]: fields converted through
//!   a [`Transformable`] or [`StrictTransformable`]
//! - [`DecodeTable`] / [`EncodeTable`]: per-type field tables linked to the
//!   extended type's table
//! - [`decode_fields`] / [`encode_fields`]: the chain-walking orchestrator
//! - [`SerializableDecode`] / [`SerializableEncode`] and [`Codec`]: the
//!   entry points domain code calls
//!
//! Each slot resolves its primary key (explicit override, else the declared
//! field name), then its alternate key, and otherwise keeps the value it
//! already held. A wrong-shaped wire value counts as a miss.

mod codec;
mod descriptor;
mod error;
mod macros;
mod orchestrator;
mod serializable;
pub mod serde_glue;
mod slot;
mod transform;

pub use codec::{Codec, CodecConfig, RequiredPolicy};
pub use descriptor::{DecodeFields, DecodeTable, EncodeFields, EncodeTable, field_names};
pub use error::{EncodeError, ModelError, ModelResult};
pub use orchestrator::{DecodeReport, UnsetField, decode_fields, encode_fields, encode_into};
pub use serializable::{Decoded, Serializable, SerializableDecode, SerializableEncode};
pub use slot::{
    DecodeField, EncodeField, OptionalSlot, RequiredSlot, Resolution, SlotKeys,
    StrictTransformSlot, TransformSlot,
};
pub use transform::{StrictTransformable, Transformable};

pub use serialized_types::{KeyedContainer, WireKey};

#[doc(hidden)]
pub use serde as __serde;
