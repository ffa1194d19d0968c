//! Lenient request values.
//!
//! Browser clients send whatever their form state holds, so text fields may
//! arrive as numbers or booleans and enum fields may hold values outside the
//! enumeration. These wrappers accept any JSON scalar and leave the policy
//! (default, ignore, reject) to the caller. Arrays and objects are still
//! rejected at deserialization time.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::board::{TaskPriority, TaskStatus};

// ---------------------------------------------------------------------------
// TextValue
// ---------------------------------------------------------------------------

/// A text field that also accepts numbers and booleans, stored in their
/// textual form (`42` -> `"42"`, `true` -> `"true"`).
///
/// Remembers whether the raw value was falsy (`""`, `0`, `false`) so
/// create paths can treat it as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValue {
    text: String,
    falsy: bool,
}

impl TextValue {
    fn new(text: String, falsy: bool) -> Self {
        Self { text, falsy }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// `true` for `""`, `0`, `0.0` and `false`.
    pub fn is_falsy(&self) -> bool {
        self.falsy
    }

    /// Text of an optional value; missing and falsy values give `""`.
    pub fn or_empty(value: Option<TextValue>) -> String {
        value
            .filter(|v| !v.is_falsy())
            .map(TextValue::into_string)
            .unwrap_or_default()
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        Self::new(value.to_string(), value.is_empty())
    }
}

impl<'de> Deserialize<'de> for TextValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl Visitor<'_> for TextVisitor {
            type Value = TextValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TextValue, E> {
                Ok(TextValue::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<TextValue, E> {
                let falsy = v.is_empty();
                Ok(TextValue::new(v, falsy))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<TextValue, E> {
                Ok(TextValue::new(v.to_string(), !v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TextValue, E> {
                Ok(TextValue::new(v.to_string(), v == 0))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TextValue, E> {
                Ok(TextValue::new(v.to_string(), v == 0))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<TextValue, E> {
                Ok(TextValue::new(v.to_string(), v == 0.0 || v.is_nan()))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

// ---------------------------------------------------------------------------
// Choice
// ---------------------------------------------------------------------------

/// Enums that can be looked up by their wire name.
pub trait WireName: Sized {
    fn from_wire(name: &str) -> Option<Self>;
}

impl WireName for TaskStatus {
    fn from_wire(name: &str) -> Option<Self> {
        Self::from_name(name)
    }
}

impl WireName for TaskPriority {
    fn from_wire(name: &str) -> Option<Self> {
        Self::from_name(name)
    }
}

/// A supplied enum value that may or may not name a variant of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Known(T),
    Unknown,
}

impl<T> Choice<T> {
    pub fn known(self) -> Option<T> {
        match self {
            Choice::Known(value) => Some(value),
            Choice::Unknown => None,
        }
    }
}

impl<'de, T: WireName> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChoiceVisitor<T>(PhantomData<T>);

        impl<T: WireName> Visitor<'_> for ChoiceVisitor<T> {
            type Value = Choice<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Choice<T>, E> {
                Ok(T::from_wire(v).map_or(Choice::Unknown, Choice::Known))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Choice<T>, E> {
                Ok(Choice::Unknown)
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Choice<T>, E> {
                Ok(Choice::Unknown)
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Choice<T>, E> {
                Ok(Choice::Unknown)
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Choice<T>, E> {
                Ok(Choice::Unknown)
            }
        }

        deserializer.deserialize_any(ChoiceVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        text: Option<TextValue>,
        status: Option<Choice<TaskStatus>>,
    }

    fn parse(json: &str) -> Result<Body, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn text_accepts_scalars() {
        assert_eq!(parse(r#"{"text":"hi"}"#).unwrap().text.unwrap().as_str(), "hi");
        assert_eq!(parse(r#"{"text":42}"#).unwrap().text.unwrap().as_str(), "42");
        assert_eq!(parse(r#"{"text":-3}"#).unwrap().text.unwrap().as_str(), "-3");
        assert_eq!(parse(r#"{"text":1.5}"#).unwrap().text.unwrap().as_str(), "1.5");
        assert_eq!(parse(r#"{"text":true}"#).unwrap().text.unwrap().as_str(), "true");
    }

    #[test]
    fn null_and_missing_are_not_supplied() {
        assert!(parse(r#"{"text":null,"status":null}"#).unwrap().text.is_none());
        let body = parse("{}").unwrap();
        assert!(body.text.is_none());
        assert!(body.status.is_none());
    }

    #[test]
    fn falsy_scalars_are_flagged() {
        for json in [r#"{"text":0}"#, r#"{"text":false}"#, r#"{"text":""}"#, r#"{"text":0.0}"#] {
            assert!(parse(json).unwrap().text.unwrap().is_falsy(), "{json}");
        }
        for json in [r#"{"text":"0"}"#, r#"{"text":true}"#, r#"{"text":7}"#, r#"{"text":" "}"#] {
            assert!(!parse(json).unwrap().text.unwrap().is_falsy(), "{json}");
        }
    }

    #[test]
    fn or_empty_drops_falsy_values() {
        assert_eq!(TextValue::or_empty(parse(r#"{"text":0}"#).unwrap().text), "");
        assert_eq!(TextValue::or_empty(parse(r#"{"text":false}"#).unwrap().text), "");
        assert_eq!(TextValue::or_empty(None), "");
        assert_eq!(TextValue::or_empty(parse(r#"{"text":12}"#).unwrap().text), "12");
    }

    #[test]
    fn text_rejects_containers() {
        assert!(parse(r#"{"text":["a"]}"#).is_err());
        assert!(parse(r#"{"text":{"a":1}}"#).is_err());
    }

    #[test]
    fn choice_known_and_unknown() {
        let body = parse(r#"{"status":"in_progress"}"#).unwrap();
        assert_eq!(body.status, Some(Choice::Known(TaskStatus::InProgress)));

        let body = parse(r#"{"status":"blocked"}"#).unwrap();
        assert_eq!(body.status, Some(Choice::Unknown));

        let body = parse(r#"{"status":3}"#).unwrap();
        assert_eq!(body.status.and_then(Choice::known), None);
    }

    #[test]
    fn choice_rejects_containers() {
        assert!(parse(r#"{"status":["done"]}"#).is_err());
    }
}
