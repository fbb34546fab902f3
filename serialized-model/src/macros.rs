/// Declares a type's field table and makes it serializable.
///
/// Lists the slot fields in declaration order, optionally renaming the
/// declared name used as the fallback wire key, and optionally names the
/// field holding the extended base type. Generates [`DecodeFields`],
/// [`EncodeFields`], [`SerializableDecode`], [`SerializableEncode`] and the
/// serde impls that let the type nest inside other slots.
///
/// The type must implement `Default`, building each slot with its keys and
/// default value.
///
/// Type parameters are listed as plain identifiers, `Wrapper<T> { value }`.
/// They are bounded by `DeserializeOwned` on the decode impls and by
/// `Serialize` on the encode impls, so they stand for wire values held in
/// slots. Lifetime parameters and inline bounds are not accepted.
///
/// ```
/// use serialized_model::{OptionalSlot, SerializableDecode, serializable};
///
/// #[derive(Default)]
/// struct Named {
///     name: OptionalSlot<String>,
/// }
///
/// struct User {
///     base: Named,
///     phone_number: OptionalSlot<String>,
/// }
///
/// impl Default for User {
///     fn default() -> Self {
///         Self {
///             base: Named::default(),
///             phone_number: OptionalSlot::new().alternate_key("phone"),
///         }
///     }
/// }
///
/// serializable!(Named { name });
/// serializable!(User extends base { phone_number => "phoneNumber" });
///
/// let user = User::from_json_str(r#"{"name": "Ana", "phone": "+386"}"#)
///     .unwrap()
///     .into_inner();
/// assert_eq!(user.base.name.get().map(String::as_str), Some("Ana"));
/// assert_eq!(user.phone_number.get().map(String::as_str), Some("+386"));
/// ```
///
/// [`DecodeFields`]: crate::DecodeFields
/// [`EncodeFields`]: crate::EncodeFields
/// [`SerializableDecode`]: crate::SerializableDecode
/// [`SerializableEncode`]: crate::SerializableEncode
#[macro_export]
macro_rules! serializable {
    (@name $field:ident) => {
        ::core::stringify!($field)
    };
    (@name $field:ident $name:literal) => {
        $name
    };
    (
        $ty:ident $(< $($gen:ident),+ >)? $(extends $base:ident)? {
            $($field:ident $(=> $name:literal)?),* $(,)?
        }
    ) => {
        impl $(<$($gen),+>)? $crate::DecodeFields for $ty $(<$($gen),+>)?
        where
            $($($gen: $crate::__serde::de::DeserializeOwned,)+)?
        {
            fn decode_table(&mut self) -> $crate::DecodeTable<'_> {
                $crate::DecodeTable::new(::core::stringify!($ty))
                    $(.field($crate::serializable!(@name $field $($name)?), &mut self.$field))*
                    $(.ancestor(&mut self.$base))?
            }
        }

        impl $(<$($gen),+>)? $crate::EncodeFields for $ty $(<$($gen),+>)?
        where
            $($($gen: $crate::__serde::Serialize,)+)?
        {
            fn encode_table(&self) -> $crate::EncodeTable<'_> {
                $crate::EncodeTable::new(::core::stringify!($ty))
                    $(.field($crate::serializable!(@name $field $($name)?), &self.$field))*
                    $(.ancestor(&self.$base))?
            }
        }

        impl $(<$($gen),+>)? $crate::SerializableDecode for $ty $(<$($gen),+>)?
        where
            Self: ::core::default::Default,
            $($($gen: $crate::__serde::de::DeserializeOwned,)+)?
        {
        }

        impl $(<$($gen),+>)? $crate::SerializableEncode for $ty $(<$($gen),+>)?
        where
            $($($gen: $crate::__serde::Serialize,)+)?
        {
        }

        impl $(<$($gen),+>)? $crate::__serde::Serialize for $ty $(<$($gen),+>)?
        where
            $($($gen: $crate::__serde::Serialize,)+)?
        {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                $crate::serde_glue::serialize(self, serializer)
            }
        }

        impl<'de $($(, $gen)+)?> $crate::__serde::Deserialize<'de> for $ty $(<$($gen),+>)?
        where
            Self: ::core::default::Default,
            $($($gen: $crate::__serde::de::DeserializeOwned,)+)?
        {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                $crate::serde_glue::deserialize(deserializer)
            }
        }
    };
}
