//! Shared domain types and transforms for model tests.

#![allow(dead_code)]

use serialized_model::{
    OptionalSlot, RequiredSlot, StrictTransformSlot, StrictTransformable, TransformSlot,
    Transformable, serializable,
};

/// Installs a fmt subscriber once; honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ── Transforms ───────────────────────────────────────────────────

/// Numbers carried as strings; non-numeric input converts to nothing.
pub struct StringToNumber;

impl Transformable for StringToNumber {
    type From = String;
    type To = i64;

    fn from_wire(value: Option<String>) -> Option<i64> {
        value?.parse().ok()
    }

    fn to_wire(value: Option<&i64>) -> Option<String> {
        value.map(ToString::to_string)
    }
}

/// Numbers carried as strings; anything unusable becomes `-1`.
pub struct StringToNumberOrSentinel;

impl StrictTransformable for StringToNumberOrSentinel {
    type From = String;
    type To = i64;

    fn from_wire(value: String) -> i64 {
        value.parse().unwrap_or(-1)
    }

    fn to_wire(value: &i64) -> String {
        value.to_string()
    }

    fn from_missing() -> i64 {
        -1
    }
}

/// Yields a value even without input.
pub struct ZeroWhenMissing;

impl Transformable for ZeroWhenMissing {
    type From = i64;
    type To = i64;

    fn from_wire(value: Option<i64>) -> Option<i64> {
        Some(value.unwrap_or(0))
    }

    fn to_wire(value: Option<&i64>) -> Option<i64> {
        value.copied()
    }
}

// ── Domain types ─────────────────────────────────────────────────

pub struct User {
    pub surname: OptionalSlot<String>,
    pub address: OptionalSlot<String>,
    pub phone_number: OptionalSlot<String>,
    pub token: OptionalSlot<String>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            surname: OptionalSlot::with_default("No name".to_string()),
            address: OptionalSlot::keyed("home_address"),
            phone_number: OptionalSlot::keyed("phone_number"),
            token: OptionalSlot::keyed("token").alternate_key("authorization"),
        }
    }
}

serializable!(User {
    surname,
    address,
    phone_number,
    token,
});

#[derive(Default)]
pub struct Foo {
    pub foo: OptionalSlot<String>,
}

serializable!(Foo { foo });

pub struct Bar {
    pub base: Foo,
    pub bar: OptionalSlot<String>,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            base: Foo::default(),
            bar: OptionalSlot::keyed("bar"),
        }
    }
}

serializable!(Bar extends base { bar });

/// Three levels deep, to check the walk order past one ancestor.
#[derive(Default)]
pub struct Baz {
    pub base: Bar,
    pub baz: RequiredSlot<String>,
}

serializable!(Baz extends base { baz });

pub struct RequiredUser {
    pub name: RequiredSlot<String>,
    pub post: RequiredSlot<String>,
}

impl Default for RequiredUser {
    fn default() -> Self {
        Self {
            name: RequiredSlot::keyed("name").alternate_key("full_name"),
            post: RequiredSlot::keyed("city").alternate_key("town"),
        }
    }
}

serializable!(RequiredUser { name, post });

pub struct Measurements {
    pub height: TransformSlot<StringToNumber>,
    pub age: TransformSlot<StringToNumber>,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            height: TransformSlot::keyed("height"),
            age: TransformSlot::keyed("age"),
        }
    }
}

serializable!(Measurements { height, age });

pub struct StrictMeasurements {
    pub height: StrictTransformSlot<StringToNumberOrSentinel>,
    pub age: StrictTransformSlot<StringToNumberOrSentinel>,
}

impl Default for StrictMeasurements {
    fn default() -> Self {
        Self {
            height: StrictTransformSlot::keyed("height"),
            age: StrictTransformSlot::keyed("age"),
        }
    }
}

serializable!(StrictMeasurements { height, age });
