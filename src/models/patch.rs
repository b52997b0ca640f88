use serde::{Deserialize, Deserializer};

/// A field of a partial update: either left out of the request or set to a value.
///
/// Deserializing always yields `Set`; pair it with `#[serde(default)]` so that a
/// missing key becomes `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    pub fn unwrap_or(self, current: T) -> T {
        match self {
            Patch::Set(value) => value,
            Patch::Unset => current,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}
