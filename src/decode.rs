//! Shape-aware JSON decoding.
//!
//! Upstream APIs are not consistent about returning a bare object or an array of
//! objects, so callers state the shape they expect and the body is checked against
//! it before being decoded into the concrete type.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Root kind of a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Anything that is not an array: an object or a scalar.
    Object,
    List,
}

impl Shape {
    fn of(value: &Value) -> Self {
        if value.is_array() {
            Shape::List
        } else {
            Shape::Object
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Object => f.write_str("object"),
            Shape::List => f.write_str("list"),
        }
    }
}

/// A decoded body, tagged with the shape it had.
#[derive(Debug, PartialEq)]
pub enum Decoded<T> {
    Object(T),
    List(Vec<T>),
}

/// Decodes `body` into `T` (for [`Shape::Object`]) or `Vec<T>` (for [`Shape::List`]).
///
/// An empty body is [`Error::EmptyResponse`], malformed JSON or a schema mismatch is
/// [`Error::Parse`], and a root of the wrong kind is [`Error::ShapeMismatch`].
/// An empty array is a valid list.
pub fn decode<T: DeserializeOwned>(body: &[u8], expected: Shape) -> Result<Decoded<T>, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::EmptyResponse);
    }

    let value: Value = serde_json::from_slice(body)?;
    let found = Shape::of(&value);
    if found != expected {
        return Err(Error::ShapeMismatch { expected, found });
    }

    Ok(match expected {
        Shape::Object => Decoded::Object(serde_json::from_value(value)?),
        Shape::List => Decoded::List(serde_json::from_value(value)?),
    })
}

pub fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    match decode(body, Shape::Object)? {
        Decoded::Object(value) => Ok(value),
        Decoded::List(_) => Err(Error::ShapeMismatch {
            expected: Shape::Object,
            found: Shape::List,
        }),
    }
}

pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, Error> {
    match decode(body, Shape::List)? {
        Decoded::List(values) => Ok(values),
        Decoded::Object(_) => Err(Error::ShapeMismatch {
            expected: Shape::List,
            found: Shape::Object,
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn list_keeps_order_and_count() {
        let items: Vec<Item> = decode_list(br#"[{"id":3},{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(items, vec![Item { id: 3 }, Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn empty_array_is_a_list() {
        let items: Vec<Item> = decode_list(b"[]").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn object_decodes() {
        let item: Item = decode_object(br#"{"id":7}"#).unwrap();
        assert_eq!(item, Item { id: 7 });
    }

    #[test]
    fn object_rejected_as_list() {
        let err = decode_list::<Item>(br#"{"id":7}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: Shape::List,
                found: Shape::Object
            }
        ));
    }

    #[test]
    fn list_rejected_as_object() {
        let err = decode_object::<Item>(br#"[{"id":7}]"#).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: Shape::Object,
                found: Shape::List
            }
        ));
    }

    #[test]
    fn scalar_counts_as_object_shape() {
        let err = decode_list::<Item>(b"42").unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { found: Shape::Object, .. }));
    }

    #[test]
    fn empty_body() {
        assert!(matches!(decode_object::<Item>(b""), Err(Error::EmptyResponse)));
        assert!(matches!(decode_list::<Item>(b" \n"), Err(Error::EmptyResponse)));
    }

    #[test]
    fn truncated_json() {
        assert!(matches!(decode_object::<Item>(br#"{"id":"#), Err(Error::Parse(_))));
    }

    #[test]
    fn wrong_schema_is_parse_error() {
        assert!(matches!(decode_object::<Item>(br#"{"id":"x"}"#), Err(Error::Parse(_))));
    }

    #[test]
    fn tagged_decode() {
        let decoded: Decoded<Item> = decode(br#"[{"id":1}]"#, Shape::List).unwrap();
        assert_eq!(decoded, Decoded::List(vec![Item { id: 1 }]));
    }
}
