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

use crate::error::Error;

use super::{FromValue, ToValue, Value};

/// A nullable attribute or field value.
///
/// Distinct from `Option`: a `Nullable` field is *present* on the wire with
/// the null marker, whereas an optional field is absent altogether. The two
/// are deliberately not interchangeable at the marshaling seam.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Nullable<T> {
    #[default]
    Null,
    NonNull(T),
}

impl<T> Nullable<T> {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Null => Nullable::Null,
            Self::NonNull(t) => Nullable::NonNull(t),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Null => None,
            Self::NonNull(t) => Some(t),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Self::NonNull(t),
            None => Self::Null,
        }
    }
}

impl<T: FromValue> FromValue for Nullable<T> {
    fn from_value(value: &Value) -> Result<Self, Error> {
        if value.is_null() {
            Ok(Self::Null)
        } else {
            Ok(Self::NonNull(T::from_value(value)?))
        }
    }
}

impl<T: ToValue> ToValue for Nullable<T> {
    fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::NonNull(t) => t.to_value(),
        }
    }
}
