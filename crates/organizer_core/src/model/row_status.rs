//! Row lifecycle status shared by every organization entity.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Non-destructive lifecycle flag.
///
/// Both transitions are caller driven through update requests; archiving a
/// row never removes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowStatus {
    /// Active row.
    #[default]
    Normal,
    /// Archived row, still present in storage.
    Archived,
}

impl RowStatus {
    /// Storage representation used in the `row_status` column.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Parses the storage representation. Returns `None` for unknown text.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "NORMAL" => Some(Self::Normal),
            "ARCHIVED" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl Display for RowStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_db_str())
    }
}
