use crate::api::{ApiError, EstimatorApi};

/// Location options offered by the service, in the order it sent them.
///
/// Empty until the one-shot load succeeds; never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationSet {
    items: Vec<String>,
}

impl LocationSet {
    /// Fetches the options from the service.
    pub async fn load<A: EstimatorApi>(api: &A) -> Result<Self, ApiError> {
        api.locations().await.map(Self::from)
    }

    /// Returns the options as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Returns the first option, the form's default.
    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the option after (or before) `current`, wrapping around.
    ///
    /// If `current` is not an option, stepping forward lands on the first
    /// entry and stepping back on the last. Returns `None` when empty.
    pub fn neighbour(&self, current: &str, forward: bool) -> Option<&str> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let index = match self.items.iter().position(|loc| loc == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.items.get(index).map(String::as_str)
    }
}

impl From<Vec<String>> for LocationSet {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}
