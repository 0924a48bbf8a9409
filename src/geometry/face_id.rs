use std::fmt;
use std::sync::Arc;

/// Identifier of a face scene, e.g. `"face-3"`.
///
/// Cloning is cheap; the active edge hands a copy to the registry every frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(Arc<str>);

impl FaceId {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FaceId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl AsRef<str> for FaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
