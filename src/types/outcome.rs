//! Operation inputs and results shared by both record kinds

use crate::types::customer::{AccountNumber, Balance};

/// Answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Affirmed,
    Declined,
}

impl Confirmation {
    /// Interpret a typed token; only `YES` (any case) is affirmative
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("YES") {
            Confirmation::Affirmed
        } else {
            Confirmation::Declined
        }
    }

    pub fn is_affirmed(self) -> bool {
        matches!(self, Confirmation::Affirmed)
    }
}

/// Ordering for a full-collection view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewOrder {
    /// File order
    #[default]
    Ascending,
    /// Reverse file order
    Descending,
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was loaded, so nothing was considered or written
    StoreEmpty,
    /// The filter matched no record; the collection was rewritten unchanged
    NoMatches,
    /// This many records were removed
    Removed(usize),
    /// Delete-all was not confirmed; the file is untouched
    Cancelled,
}

/// Validated balance change, shown to the user before confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePreview {
    pub account: AccountNumber,
    pub name: String,
    pub balance: Balance,
    pub amount: Balance,
    pub resulting: Balance,
}

/// Result of a deposit or withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOutcome {
    /// The change was confirmed and persisted
    Applied {
        account: AccountNumber,
        previous: Balance,
        balance: Balance,
    },
    /// The change was declined; nothing was written
    Cancelled,
}
