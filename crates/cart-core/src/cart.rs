//! # Cart Store
//!
//! Insertion-ordered line items with the three mutations the page can
//! request. Every line item in the store has `quantity >= 1`.

use crate::error::{CartError, CartResult};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product entry in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, also the merge key
    pub name: String,

    /// Unit price
    pub unit_price: Money,

    /// Quantity (never zero while stored)
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Unit price times quantity
    pub fn total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Result of [`Cart::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// New entry appended at this position
    Appended(usize),
    /// Existing same-name entry at this position had its quantity bumped
    Merged(usize),
}

/// Result of [`Cart::set_quantity`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// Quantity set to this value
    Updated(u32),
    /// Requested quantity was not positive; the entry was dropped
    Removed(LineItem),
}

/// The shopper's cart for the current page session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `name`.
    ///
    /// The first entry with the same name absorbs the unit; its stored
    /// price is kept even when `unit_price` differs.
    pub fn add(&mut self, name: impl Into<String>, unit_price: Money) -> AddOutcome {
        let name = name.into();
        match self.items.iter().position(|item| item.name == name) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                AddOutcome::Merged(index)
            }
            None => {
                self.items.push(LineItem::new(name, unit_price));
                AddOutcome::Appended(self.items.len() - 1)
            }
        }
    }

    /// Remove the entry at `index`
    pub fn remove(&mut self, index: i64) -> CartResult<LineItem> {
        let position = self.position(index)?;
        Ok(self.items.remove(position))
    }

    /// Set the quantity of the entry at `index`.
    ///
    /// Zero, negative and non-finite requests remove the entry instead.
    /// Positive fractions are truncated, but never below one.
    pub fn set_quantity(&mut self, index: i64, requested: f64) -> CartResult<QuantityChange> {
        let position = self.position(index)?;

        if !requested.is_finite() || requested <= 0.0 {
            return Ok(QuantityChange::Removed(self.items.remove(position)));
        }

        let quantity = requested.trunc().max(1.0);
        let quantity = if quantity >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            quantity as u32
        };
        self.items[position].quantity = quantity;
        Ok(QuantityChange::Updated(quantity))
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities (the badge number)
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of unit price times quantity
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::total).sum()
    }

    fn position(&self, index: i64) -> CartResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.items.len())
            .ok_or(CartError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(n: i64) -> Money {
        Money::from_minor(n)
    }

    #[test]
    fn test_add_merges_by_name() {
        let mut cart = Cart::new();
        assert_eq!(cart.add("Mug", cents(2500)), AddOutcome::Appended(0));
        assert_eq!(cart.add("Mug", cents(2500)), AddOutcome::Merged(0));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), cents(5000));
    }

    #[test]
    fn test_merge_keeps_first_price() {
        let mut cart = Cart::new();
        cart.add("Shirt", cents(1000));
        cart.add("Shirt", cents(9999));

        assert_eq!(cart.items()[0].unit_price, cents(1000));
        assert_eq!(cart.total(), cents(2000));
    }

    #[test]
    fn test_insertion_order() {
        let mut cart = Cart::new();
        cart.add("A", cents(100));
        cart.add("B", cents(200));
        cart.add("A", cents(100));
        cart.add("C", cents(300));

        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total(), cents(700));
    }

    #[test]
    fn test_remove_bounds() {
        let mut cart = Cart::new();
        cart.add("A", cents(100));
        cart.add("B", cents(200));

        assert!(matches!(
            cart.remove(-1),
            Err(CartError::IndexOutOfRange { index: -1, len: 2 })
        ));
        assert!(cart.remove(2).is_err());
        assert_eq!(cart.len(), 2);

        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(cart.items()[0].name, "B");
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add("A", cents(150));

        assert_eq!(cart.set_quantity(0, 4.0).unwrap(), QuantityChange::Updated(4));
        assert_eq!(cart.total(), cents(600));

        assert_eq!(cart.set_quantity(0, 2.9).unwrap(), QuantityChange::Updated(2));
        assert!(cart.set_quantity(1, 3.0).is_err());
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_removes_on_non_positive() {
        for requested in [0.0, -0.0, -2.0, -0.4, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut cart = Cart::new();
            cart.add("A", cents(100));
            cart.add("B", cents(100));

            let change = cart.set_quantity(0, requested).unwrap();
            assert!(matches!(change, QuantityChange::Removed(ref item) if item.name == "A"));
            assert_eq!(cart.len(), 1);
        }
    }

    #[test]
    fn test_set_quantity_keeps_positive_fractions() {
        let mut cart = Cart::new();
        cart.add("A", cents(100));

        assert_eq!(cart.set_quantity(0, 0.5).unwrap(), QuantityChange::Updated(1));
        assert_eq!(cart.set_quantity(0, 1e-9).unwrap(), QuantityChange::Updated(1));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), cents(100));
    }

    #[test]
    fn test_set_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add("A", cents(1));
        assert_eq!(
            cart.set_quantity(0, 1e12).unwrap(),
            QuantityChange::Updated(u32::MAX)
        );
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("A", cents(100));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.item_count(), 0);
    }
}
