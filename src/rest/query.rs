//! Serialization of option structs into query parameters.
//!
//! A field is sent only when it holds a value other than its type's default:
//! `0`, `false`, `""`, empty arrays, `None` and `()` are left out. A value
//! wrapped in `Some` is always sent, so `Option<bool>` and `Option<u32>`
//! fields can still ask for `test=false` or `since_id=0`.

use std::num::FpCategory;

use serde::ser::{self, Error as _, Impossible};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::Query;
use crate::rest::ResourceError;

/// Flattens a serializable options value into query parameters.
///
/// - fields holding their type's default value are omitted, unless wrapped
///   in `Some`
/// - arrays are comma-joined (`ids=1,2,3`)
/// - unit enum variants are sent by their serialized name
/// - nested objects are sent as their JSON text
/// - `()` and bare scalars yield no parameters
///
/// # Errors
///
/// Returns [`ResourceError::Serialize`] if `params` cannot be serialized, or
/// is a sequence or an enum with data rather than a struct or map.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use shopify_rest::rest::serialize_to_query;
///
/// #[derive(Serialize)]
/// struct Filters {
///     limit: u32,
///     published: bool,
///     test: Option<bool>,
/// }
///
/// let query = serialize_to_query(
///     &Filters { limit: 0, published: false, test: Some(false) },
///     "Product",
/// )
/// .unwrap();
///
/// assert_eq!(query.len(), 1);
/// assert_eq!(query.get("test").map(String::as_str), Some("false"));
/// ```
pub fn serialize_to_query<T: Serialize + ?Sized>(
    params: &T,
    resource: &'static str,
) -> Result<Query, ResourceError> {
    params
        .serialize(QuerySerializer)
        .map_err(|source| ResourceError::Serialize { resource, source })
}

fn unsupported(what: &str) -> serde_json::Error {
    serde_json::Error::custom(format!("{what} cannot be sent as query parameters"))
}

fn key_string<T: Serialize + ?Sized>(key: &T) -> Result<String, serde_json::Error> {
    Ok(match serde_json::to_value(key)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Serializes the top-level options value into a [`Query`].
struct QuerySerializer;

macro_rules! no_parameters {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, _value: $ty) -> Result<Query, Self::Error> {
                Ok(Query::new())
            }
        )*
    };
}

impl ser::Serializer for QuerySerializer {
    type Ok = Query;
    type Error = serde_json::Error;
    type SerializeSeq = Impossible<Query, Self::Error>;
    type SerializeTuple = Impossible<Query, Self::Error>;
    type SerializeTupleStruct = Impossible<Query, Self::Error>;
    type SerializeTupleVariant = Impossible<Query, Self::Error>;
    type SerializeMap = QueryMap;
    type SerializeStruct = QueryMap;
    type SerializeStructVariant = Impossible<Query, Self::Error>;

    no_parameters!(
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_f32(f32),
        serialize_f64(f64),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    );

    fn serialize_none(self) -> Result<Query, Self::Error> {
        Ok(Query::new())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Query, Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Query, Self::Error> {
        Ok(Query::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Query, Self::Error> {
        Ok(Query::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<Query, Self::Error> {
        Ok(Query::new())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Query, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Query, Self::Error> {
        Err(unsupported("an enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Err(unsupported("a sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Err(unsupported("a tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Err(unsupported("a tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(unsupported("an enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(QueryMap::default())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(QueryMap::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(unsupported("an enum variant"))
    }
}

#[derive(Default)]
struct QueryMap {
    query: Query,
    key: Option<String>,
}

impl QueryMap {
    fn insert<T: Serialize + ?Sized>(
        &mut self,
        key: String,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        if let Some(rendered) = value.serialize(FieldSerializer::default())? {
            self.query.insert(key, rendered);
        }
        Ok(())
    }
}

impl ser::SerializeMap for QueryMap {
    type Ok = Query;
    type Error = serde_json::Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Self::Error> {
        self.key = Some(key_string(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        let key = self
            .key
            .take()
            .ok_or_else(|| serde_json::Error::custom("map value without a key"))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Query, Self::Error> {
        Ok(self.query)
    }
}

impl ser::SerializeStruct for QueryMap {
    type Ok = Query;
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Query, Self::Error> {
        Ok(self.query)
    }
}

/// Renders one field value; `None` leaves the field out.
///
/// `explicit` is set once the value has passed through `Some`, and keeps
/// default values that would otherwise be dropped.
#[derive(Clone, Copy, Default)]
struct FieldSerializer {
    explicit: bool,
}

macro_rules! integer_field {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, value: $ty) -> Result<Self::Ok, Self::Error> {
                Ok((self.explicit || value != 0).then(|| value.to_string()))
            }
        )*
    };
}

macro_rules! float_field {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, value: $ty) -> Result<Self::Ok, Self::Error> {
                Ok((self.explicit || value.classify() != FpCategory::Zero)
                    .then(|| value.to_string()))
            }
        )*
    };
}

impl ser::Serializer for FieldSerializer {
    type Ok = Option<String>;
    type Error = serde_json::Error;
    type SerializeSeq = FieldList;
    type SerializeTuple = FieldList;
    type SerializeTupleStruct = FieldList;
    type SerializeTupleVariant = Impossible<Option<String>, Self::Error>;
    type SerializeMap = JsonObject;
    type SerializeStruct = JsonObject;
    type SerializeStructVariant = Impossible<Option<String>, Self::Error>;

    integer_field!(
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
    );

    float_field!(serialize_f32(f32), serialize_f64(f64));

    fn serialize_bool(self, value: bool) -> Result<Self::Ok, Self::Error> {
        Ok((self.explicit || value).then(|| value.to_string()))
    }

    fn serialize_char(self, value: char) -> Result<Self::Ok, Self::Error> {
        Ok(Some(value.to_string()))
    }

    fn serialize_str(self, value: &str) -> Result<Self::Ok, Self::Error> {
        Ok((self.explicit || !value.is_empty()).then(|| value.to_string()))
    }

    fn serialize_bytes(self, _value: &[u8]) -> Result<Self::Ok, Self::Error> {
        Err(unsupported("raw bytes"))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Self::Ok, Self::Error> {
        value.serialize(Self { explicit: true })
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(Some(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        let mut object = Map::new();
        object.insert(variant.to_string(), serde_json::to_value(value)?);
        Ok(Some(Value::Object(object).to_string()))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(FieldList::default())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(FieldList::default())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(FieldList::default())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(unsupported("a tuple variant field"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(JsonObject::default())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(JsonObject::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(unsupported("a struct variant field"))
    }
}

/// Comma-joined array items. Items are kept even when they are `0`.
#[derive(Default)]
struct FieldList {
    items: Vec<String>,
}

impl ser::SerializeSeq for FieldList {
    type Ok = Option<String>;
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        if let Some(item) = value.serialize(FieldSerializer { explicit: true })? {
            self.items.push(item);
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok((!self.items.is_empty()).then(|| self.items.join(",")))
    }
}

impl ser::SerializeTuple for FieldList {
    type Ok = Option<String>;
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for FieldList {
    type Ok = Option<String>;
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        ser::SerializeSeq::end(self)
    }
}

/// A nested object, sent as its JSON text.
#[derive(Default)]
struct JsonObject {
    object: Map<String, Value>,
    key: Option<String>,
}

impl ser::SerializeMap for JsonObject {
    type Ok = Option<String>;
    type Error = serde_json::Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Self::Error> {
        self.key = Some(key_string(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        let key = self
            .key
            .take()
            .ok_or_else(|| serde_json::Error::custom("map value without a key"))?;
        self.object.insert(key, serde_json::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok((!self.object.is_empty()).then(|| Value::Object(self.object).to_string()))
    }
}

impl ser::SerializeStruct for JsonObject {
    type Ok = Option<String>;
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        self.object.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        ser::SerializeMap::end(self)
    }
}
