use serde::{Deserialize, Serialize};

/// An operation that turns the default value of a collection into the value
/// of one specific trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "camelCase")]
pub enum Patch<T> {
    Replace(T),
}

impl<T> Patch<T> {
    pub fn value(&self) -> &T {
        match self {
            Patch::Replace(value) => value,
        }
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Patch<U> {
        match self {
            Patch::Replace(value) => Patch::Replace(f(value)),
        }
    }
}
