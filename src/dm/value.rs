/*
 *
 *    Copyright (c) 2020-2022 Project CHIP Authors
 *
 *    Licensed under the Apache License, Version 2.0 (the "License");
 *    you may not use this file except in compliance with the License.
 *    You may obtain a copy of the License at
 *
 *        http://www.apache.org/licenses/LICENSE-2.0
 *
 *    Unless required by applicable law or agreed to in writing, software
 *    distributed under the License is distributed on an "AS IS" BASIS,
 *    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *    See the License for the specific language governing permissions and
 *    limitations under the License.
 */

//! The decoded, owned data-model value representation.
//!
//! [`Value`] is what the driver's codec produces from a report or response
//! payload and what it consumes when framing a write or an invocation.
//! The accessors mirror the shape checks of a TLV reader: asking a value
//! for a type it does not hold is a decode failure, never a coercion.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, ErrorCode};

/// An owned, already-decoded data model value.
///
/// `Struct` fields are keyed by their context tag; `List` elements are
/// anonymous and ordered as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    Null,
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Utf8(String),
    Octets(Vec<u8>),
    List(Vec<Value>),
    Struct(Vec<(u8, Value)>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn bool(&self) -> Result<bool, Error> {
        match self {
            Self::Bool(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn u8(&self) -> Result<u8, Error> {
        match self {
            Self::U8(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    // Unsigned accessors accept any narrower width, as a codec is free to
    // use the smallest encoding that fits the value.
    pub fn u16(&self) -> Result<u16, Error> {
        match self {
            Self::U8(v) => Ok(*v as u16),
            Self::U16(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn u32(&self) -> Result<u32, Error> {
        match self {
            Self::U8(v) => Ok(*v as u32),
            Self::U16(v) => Ok(*v as u32),
            Self::U32(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn u64(&self) -> Result<u64, Error> {
        match self {
            Self::U8(v) => Ok(*v as u64),
            Self::U16(v) => Ok(*v as u64),
            Self::U32(v) => Ok(*v as u64),
            Self::U64(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn i8(&self) -> Result<i8, Error> {
        match self {
            Self::I8(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn i16(&self) -> Result<i16, Error> {
        match self {
            Self::I8(v) => Ok(*v as i16),
            Self::I16(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn i32(&self) -> Result<i32, Error> {
        match self {
            Self::I8(v) => Ok(*v as i32),
            Self::I16(v) => Ok(*v as i32),
            Self::I32(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn i64(&self) -> Result<i64, Error> {
        match self {
            Self::I8(v) => Ok(*v as i64),
            Self::I16(v) => Ok(*v as i64),
            Self::I32(v) => Ok(*v as i64),
            Self::I64(v) => Ok(*v),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn utf8(&self) -> Result<&str, Error> {
        match self {
            Self::Utf8(v) => Ok(v.as_str()),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn octets(&self) -> Result<&[u8], Error> {
        match self {
            Self::Octets(v) => Ok(v.as_slice()),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn list(&self) -> Result<&[Value], Error> {
        match self {
            Self::List(v) => Ok(v.as_slice()),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    pub fn struct_fields(&self) -> Result<&[(u8, Value)], Error> {
        match self {
            Self::Struct(v) => Ok(v.as_slice()),
            _ => Err(ErrorCode::ValueTypeMismatch.into()),
        }
    }

    /// Look up an optional context-tagged field of a struct value.
    ///
    /// Fails if `self` is not a struct; returns `None` if the field
    /// is simply absent.
    pub fn find_ctx(&self, tag: u8) -> Result<Option<&Value>, Error> {
        Ok(self
            .struct_fields()?
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, v)| v))
    }

    /// Look up a mandatory context-tagged field of a struct value.
    pub fn ctx(&self, tag: u8) -> Result<&Value, Error> {
        self.find_ctx(tag)?
            .ok_or_else(|| ErrorCode::ValueNotFound.into())
    }
}

/// A type that can be produced from a decoded [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, Error>;
}

/// A type that can be turned into a [`Value`] for the driver's codec.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! prim_value {
    ($t:ty, $accessor:ident, $var:ident) => {
        impl FromValue for $t {
            fn from_value(value: &Value) -> Result<Self, Error> {
                value.$accessor()
            }
        }

        impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::$var(*self)
            }
        }
    };
}

prim_value!(bool, bool, Bool);
prim_value!(u8, u8, U8);
prim_value!(u16, u16, U16);
prim_value!(u32, u32, U32);
prim_value!(u64, u64, U64);
prim_value!(i8, i8, I8);
prim_value!(i16, i16, I16);
prim_value!(i32, i32, I32);
prim_value!(i64, i64, I64);

/// The empty command-fields struct, for commands declared without fields.
impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Struct(Vec::new())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(value.utf8()?.into())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Utf8(self.clone())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::Utf8((*self).into())
    }
}

/// An owned octet string.
///
/// A newtype rather than a bare `Vec<u8>`, so that octet-string fields and
/// lists of `u8` values stay distinct at the marshaling seam.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Octets(pub Vec<u8>);

impl FromValue for Octets {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self(value.octets()?.into()))
    }
}

impl ToValue for Octets {
    fn to_value(&self) -> Value {
        Value::Octets(self.0.clone())
    }
}

impl From<&[u8]> for Octets {
    fn from(octets: &[u8]) -> Self {
        Self(octets.into())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, Error> {
        value.list()?.iter().map(T::from_value).collect()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(T::to_value).collect())
    }
}

/// Generate `FromValue` / `ToValue` for a fieldless `repr(u8)` enum
/// deriving `strum::FromRepr`.
#[allow(unused_macros)]
#[macro_export]
macro_rules! enum_value {
    ($en:ty) => {
        impl $crate::dm::FromValue for $en {
            fn from_value(value: &$crate::dm::Value) -> Result<Self, $crate::error::Error> {
                <$en>::from_repr(value.u8()?)
                    .ok_or_else(|| $crate::error::ErrorCode::ValueTypeMismatch.into())
            }
        }

        impl $crate::dm::ToValue for $en {
            fn to_value(&self) -> $crate::dm::Value {
                $crate::dm::Value::U8(*self as u8)
            }
        }
    };
}

/// Generate `FromValue` / `ToValue` for a `bitflags` bitmap of the
/// given width.
///
/// Unknown bits are retained, as a device is allowed to set bits from a
/// newer cluster revision than the one this client was built against.
#[allow(unused_macros)]
#[macro_export]
macro_rules! bitmap_value {
    ($bm:ty, u8) => {
        $crate::bitmap_value!(@impl $bm, u8, U8);
    };
    ($bm:ty, u16) => {
        $crate::bitmap_value!(@impl $bm, u16, U16);
    };
    ($bm:ty, u32) => {
        $crate::bitmap_value!(@impl $bm, u32, U32);
    };
    (@impl $bm:ty, $accessor:ident, $var:ident) => {
        impl $crate::dm::FromValue for $bm {
            fn from_value(value: &$crate::dm::Value) -> Result<Self, $crate::error::Error> {
                Ok(<$bm>::from_bits_retain(value.$accessor()?))
            }
        }

        impl $crate::dm::ToValue for $bm {
            fn to_value(&self) -> $crate::dm::Value {
                $crate::dm::Value::$var(self.bits())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening() {
        assert_eq!(Value::U8(7).u32().unwrap(), 7);
        assert_eq!(Value::U16(300).u64().unwrap(), 300);
        assert_eq!(Value::I8(-3).i64().unwrap(), -3);
        assert!(Value::U16(300).u8().is_err());
        assert!(Value::I8(-3).u32().is_err());
    }

    #[test]
    fn mismatch_is_an_error() {
        let err = Value::Bool(true).u8().unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::ValueTypeMismatch);

        let err = Value::List(alloc::vec![]).struct_fields().unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::ValueTypeMismatch);
    }

    #[test]
    fn struct_fields_lookup() {
        let value = Value::Struct(alloc::vec![(0, Value::U8(1)), (2, Value::Bool(false))]);

        assert_eq!(value.ctx(0).unwrap(), &Value::U8(1));
        assert_eq!(value.find_ctx(1).unwrap(), None);
        assert_eq!(
            value.ctx(1).unwrap_err().code(),
            crate::error::ErrorCode::ValueNotFound
        );
    }

    #[test]
    fn list_roundtrip() {
        let list = alloc::vec![1u16, 2, 3];
        let value = list.to_value();
        assert_eq!(Vec::<u16>::from_value(&value).unwrap(), list);
    }
}
