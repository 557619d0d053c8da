//! Display order of the move list.

use serde::{Deserialize, Serialize};

/// Order in which the move list is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label of the toggle control: names the order currently shown.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort ASC",
            SortOrder::Descending => "Sort DESC",
        }
    }

    /// Puts items given oldest first into this order.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == SortOrder::Descending {
            items.reverse();
        }
        items
    }
}
