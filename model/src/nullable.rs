use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value that tells apart a key absent from the payload from one
/// explicitly set to `null`.
///
/// Fields of this type should carry
/// `#[serde(default, skip_serializing_if = "Nullable::is_missing")]`, so that
/// an absent key decodes to [`Nullable::Missing`] and is omitted again on
/// encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    #[default]
    Missing,
    Null,
    Present(T),
}

impl<T> Nullable<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Nullable::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Nullable::Present(_))
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Missing => Nullable::Missing,
            Nullable::Null => Nullable::Null,
            Nullable::Present(v) => Nullable::Present(v),
        }
    }

    pub fn as_mut(&mut self) -> Nullable<&mut T> {
        match self {
            Nullable::Missing => Nullable::Missing,
            Nullable::Null => Nullable::Null,
            Nullable::Present(v) => Nullable::Present(v),
        }
    }

    /// Collapses missing and null into `None`.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Nullable::Present(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Present(v) => Some(v),
            _ => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Nullable::Missing => Nullable::Missing,
            Nullable::Null => Nullable::Null,
            Nullable::Present(v) => Nullable::Present(f(v)),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Present(v),
            None => Nullable::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Present(v) => v.serialize(serializer),
            // missing is normally skipped by the field attribute
            Nullable::Missing | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
