use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static name to unit price lookup supplied by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    items: BTreeMap<String, Decimal>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, name: impl Into<String>, price: Decimal) -> Self {
        self.items.insert(name.into(), price);
        self
    }

    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.items.get(name).copied()
    }

    /// Items in name order.
    pub fn items(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.items.iter().map(|(name, price)| (name.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Decimal)> for Menu {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(n, p)| (n.into(), p)).collect(),
        }
    }
}
