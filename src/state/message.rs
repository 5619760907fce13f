use serde::{Deserialize, Serialize};

/// Opaque handle returned by `add`, used to replace or delete a message later.
#[derive(Serialize, Deserialize, Hash, Eq, PartialEq, Clone, Debug)]
#[serde(transparent)]
pub struct MessageKey(String);

impl MessageKey {
    pub(crate) fn from_id(id: u64) -> Self {
        Self(format!("{:08x}", id))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MessageKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Message {
    pub header: String,
    pub body: String,
}

impl Message {
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} / {:?}", self.header, self.body)
    }
}
