use std::fmt;

use serde::{Deserialize, Serialize};

/// The person a tax report is prepared for.
///
/// Only used to label reports; it plays no part in the tax computation.
/// Equality is deliberately not derived, use [`Taxpayer::same_identity`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxpayer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Taxpayer {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Two taxpayers are the same person when both id and last name match.
    /// The first name is ignored.
    pub fn same_identity(
        &self,
        other: &Taxpayer,
    ) -> bool {
        self.id == other.id && self.last_name == other.last_name
    }
}

impl fmt::Display for Taxpayer {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
