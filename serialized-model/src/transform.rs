//! Bidirectional value transforms between a wire type and a domain type.
//!
//! Transforms are implemented on marker types and selected per slot at the
//! type level, e.g. `TransformSlot<StringToNumber>`. They are pure and
//! cannot fail: a value that does not convert becomes `None` (tolerant) or
//! a sentinel chosen by the implementation (strict).

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Absence-tolerant transform used by [`TransformSlot`](crate::TransformSlot).
///
/// ```
/// use serialized_model::Transformable;
///
/// struct StringToNumber;
///
/// impl Transformable for StringToNumber {
///     type From = String;
///     type To = i64;
///
///     fn from_wire(value: Option<String>) -> Option<i64> {
///         value?.parse().ok()
///     }
///
///     fn to_wire(value: Option<&i64>) -> Option<String> {
///         value.map(ToString::to_string)
///     }
/// }
///
/// assert_eq!(StringToNumber::from_wire(Some("18".into())), Some(18));
/// assert_eq!(StringToNumber::from_wire(Some("asd".into())), None);
/// ```
pub trait Transformable {
    /// The wire-representable type.
    type From: Serialize + DeserializeOwned;
    /// The domain type held by the slot.
    type To;

    /// Converts a wire value, which may be missing, into a domain value.
    fn from_wire(value: Option<Self::From>) -> Option<Self::To>;

    /// Converts a domain value, which may be unset, into a wire value.
    fn to_wire(value: Option<&Self::To>) -> Option<Self::From>;
}

/// Total transform used by [`StrictTransformSlot`](crate::StrictTransformSlot).
///
/// A strict transform always produces a domain value. When neither the
/// primary nor the alternate key resolves, the slot asks for
/// [`from_missing`](StrictTransformable::from_missing) instead of feeding
/// the transform an input it cannot have.
pub trait StrictTransformable {
    type From: Serialize + DeserializeOwned;
    type To;

    fn from_wire(value: Self::From) -> Self::To;

    fn to_wire(value: &Self::To) -> Self::From;

    /// The domain value used when the wire data has no usable input.
    fn from_missing() -> Self::To;
}
