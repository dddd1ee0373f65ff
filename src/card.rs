//! A single owned card entry

use std::fmt;

/// One entry of a collection.
///
/// Everything except the quantity is fixed at construction. Cards read from a
/// Decked Builder collection only carry `id` and `count`; the descriptive
/// fields are `None` for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: String,
    name: Option<String>,
    card_number: Option<String>,
    set_name: Option<String>,
    set_code: Option<String>,
    count: i64,
}

impl Card {
    /// Creates a card carrying only its catalog id and quantity
    pub fn new(id: impl Into<String>, count: i64) -> Self {
        Self {
            id: id.into(),
            name: None,
            card_number: None,
            set_name: None,
            set_code: None,
            count,
        }
    }

    /// Creates a fully described card, as exported by ScryGlass
    pub fn with_details(
        id: impl Into<String>,
        name: Option<String>,
        card_number: Option<String>,
        set_name: Option<String>,
        set_code: Option<String>,
        count: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            card_number,
            set_name,
            set_code,
            count,
        }
    }

    /// Catalog (Gatherer) id, the merge key
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn card_number(&self) -> Option<&str> {
        self.card_number.as_deref()
    }

    /// Full edition name (e.g. "Core Set 2019")
    pub fn set_name(&self) -> Option<&str> {
        self.set_name.as_deref()
    }

    pub fn set_code(&self) -> Option<&str> {
        self.set_code.as_deref()
    }

    /// Number of copies owned. Negative values are carried through unchecked.
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn set_count(&mut self, count: i64) {
        self.count = count;
    }

    /// Adds a single copy. Stays at `i64::MAX` once there.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Returns true if both entries describe the same card (ids are equal)
    pub fn same_card(&self, other: &Card) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} ({})",
            self.count,
            self.name().unwrap_or_default(),
            self.set_name().unwrap_or_default(),
            self.id
        )
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
