//! The draft order a terminal builds before committing it.
//!
//! A cart is plain local state. Nothing is shared or stored until it is
//! handed to [`TableClient::generate_bill`](crate::clients::TableClient::generate_bill).

use crate::model::{Menu, OrderLine, Totals};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid quantity for {item}: {quantity}")]
    InvalidQuantity { item: String, quantity: u32 },

    #[error("Negative price for {item}: {price}")]
    NegativePrice { item: String, price: Decimal },

    #[error("Item not on the menu: {0}")]
    UnknownItem(String),

    #[error("More than one line for {0}")]
    DuplicateItem(String),

    #[error("Amount too large to bill")]
    AmountOverflow,
}

/// Ordered list of lines with at most one line per item name.
///
/// Deserialising goes through [`Cart::add_line`], so a cart received over the
/// wire obeys the same rules as one built locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartLines")]
pub struct Cart {
    lines: Vec<OrderLine>,
}

#[derive(Deserialize)]
struct CartLines {
    lines: Vec<OrderLine>,
}

impl TryFrom<CartLines> for Cart {
    type Error = CartError;

    fn try_from(raw: CartLines) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();
        for line in raw.lines {
            cart.add_line(line.item_name, line.unit_price, line.quantity)?;
        }
        Ok(cart)
    }
}

/// Checks lines that did not come through [`Cart::add_line`]: positive
/// quantities, non-negative prices, one line per item and representable
/// line totals.
pub fn validate_lines(lines: &[OrderLine]) -> Result<(), CartError> {
    for (i, line) in lines.iter().enumerate() {
        if line.quantity == 0 {
            return Err(CartError::InvalidQuantity {
                item: line.item_name.clone(),
                quantity: line.quantity,
            });
        }
        if line.unit_price < Decimal::ZERO {
            return Err(CartError::NegativePrice {
                item: line.item_name.clone(),
                price: line.unit_price,
            });
        }
        if lines[..i].iter().any(|l| l.item_name == line.item_name) {
            return Err(CartError::DuplicateItem(line.item_name.clone()));
        }
        if line.line_total().is_none() {
            return Err(CartError::AmountOverflow);
        }
    }
    Ok(())
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of an item. An existing line with the same name keeps
    /// its price and position and has its quantity increased.
    pub fn add_line(
        &mut self,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Result<(), CartError> {
        let name = name.into();
        if quantity == 0 {
            return Err(CartError::InvalidQuantity {
                item: name,
                quantity,
            });
        }
        if unit_price < Decimal::ZERO {
            return Err(CartError::NegativePrice {
                item: name,
                price: unit_price,
            });
        }

        match self.lines.iter_mut().find(|l| l.item_name == name) {
            Some(line) => {
                let merged = line.quantity.checked_add(quantity).ok_or_else(|| {
                    CartError::InvalidQuantity {
                        item: name.clone(),
                        quantity,
                    }
                })?;
                if line.unit_price.checked_mul(Decimal::from(merged)).is_none() {
                    return Err(CartError::AmountOverflow);
                }
                line.quantity = merged;
            }
            None => {
                let line = OrderLine::new(name, unit_price, quantity);
                if line.line_total().is_none() {
                    return Err(CartError::AmountOverflow);
                }
                self.lines.push(line);
            }
        }
        Ok(())
    }

    /// Adds an item at its menu price.
    pub fn add_from_menu(&mut self, menu: &Menu, name: &str, quantity: u32) -> Result<(), CartError> {
        let price = menu
            .price_of(name)
            .ok_or_else(|| CartError::UnknownItem(name.to_string()))?;
        self.add_line(name, price, quantity)
    }

    /// Changes the quantity of an existing line by `delta`. The line is
    /// dropped once its quantity reaches zero or below. Unknown names are
    /// ignored.
    pub fn adjust_quantity(&mut self, name: &str, delta: i64) {
        let Some(pos) = self.lines.iter().position(|l| l.item_name == name) else {
            return;
        };
        let next = i64::from(self.lines[pos].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Removes the line for `name`, if any.
    pub fn remove_line(&mut self, name: &str) {
        self.lines.retain(|l| l.item_name != name);
    }

    /// Totals of the current lines. An empty cart totals to zero.
    pub fn compute_totals(&self, tax_rate: Decimal) -> Result<Totals, CartError> {
        Totals::compute(&self.lines, tax_rate)
    }

    /// Totals for a cart about to be committed. The lines are checked again
    /// so a cart that bypassed `add_line` cannot reach the stores.
    pub fn checked_totals(&self, tax_rate: Decimal) -> Result<Totals, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }
        validate_lines(&self.lines)?;
        self.compute_totals(tax_rate)
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<OrderLine> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
