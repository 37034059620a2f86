//! Shopping List Store
//!
//! Owns the ordered product list and its mutation API. The rendering
//! layer pulls snapshots through signals (see context.rs); every
//! successful mutation is followed by a persistence write there.

use crate::models::Product;

/// Result of an add attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Product was prepended to the list
    Added,
    /// A product with the same name is already in the list
    Duplicate,
    /// Name was empty
    Invalid,
}

/// Ordered product list with a load guard
///
/// `loaded` stays false until the persisted list has been restored, so
/// an empty startup state is never written back over saved data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    products: Vec<Product>,
    loaded: bool,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with persisted products and mark the store ready
    pub fn restore(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loaded = true;
    }

    /// Whether the initial load has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Products in list order (newest first)
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Add a new product to the front of the list.
    ///
    /// Empty names and duplicate names are rejected without changing
    /// the list. A missing or zero quantity falls back to 1.
    pub fn add(&mut self, name: &str, quantity: Option<u32>) -> AddOutcome {
        if name.is_empty() {
            return AddOutcome::Invalid;
        }
        if self.products.iter().any(|p| p.name == name) {
            return AddOutcome::Duplicate;
        }
        let quantity = quantity.filter(|q| *q > 0).unwrap_or(1);
        self.products.insert(0, Product::new(name.to_string(), quantity));
        AddOutcome::Added
    }

    /// Flip the bought flag of the named product and move it to the
    /// back of the list. Returns false if no product matches.
    pub fn toggle(&mut self, name: &str) -> bool {
        let Some(pos) = self.products.iter().position(|p| p.name == name) else {
            return false;
        };
        let mut product = self.products.remove(pos);
        product.bought = !product.bought;
        self.products.push(product);
        true
    }

    /// Remove the named product, returning it. Unknown names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Product> {
        let pos = self.products.iter().position(|p| p.name == name)?;
        Some(self.products.remove(pos))
    }

    /// Display order: all unbought products before all bought ones.
    /// Only the grouping is contractual.
    pub fn display_order(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(|p| !p.bought)
            .chain(self.products.iter().filter(|p| p.bought))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loaded_list() -> ShoppingList {
        let mut list = ShoppingList::new();
        list.restore(Vec::new());
        list
    }

    #[test]
    fn test_restore_marks_loaded() {
        let mut list = ShoppingList::new();
        assert!(!list.is_loaded());

        list.restore(vec![Product::new("Milch".to_string(), 2)]);
        assert!(list.is_loaded());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_distinct_names_grows_by_one_each() {
        let mut list = loaded_list();
        for (i, name) in ["Milch", "Brot", "Eier", "Butter"].iter().enumerate() {
            assert_eq!(list.add(name, Some(1)), AddOutcome::Added);
            assert_eq!(list.len(), i + 1);
        }
    }

    #[test]
    fn test_add_prepends() {
        let mut list = loaded_list();
        list.add("Milch", Some(2));
        list.add("Brot", Some(1));

        assert_eq!(list.products()[0].name, "Brot");
        assert_eq!(list.products()[1].name, "Milch");
    }

    #[test]
    fn test_add_duplicate_rejected_without_change() {
        let mut list = loaded_list();
        assert_eq!(list.add("Milch", Some(2)), AddOutcome::Added);
        assert_eq!(list.add("Milch", Some(5)), AddOutcome::Duplicate);

        assert_eq!(list.len(), 1);
        // The original entry is untouched
        assert_eq!(list.products()[0].quantity, 2);
        assert!(!list.products()[0].bought);
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut list = loaded_list();
        assert_eq!(list.add("", Some(1)), AddOutcome::Invalid);
        assert!(list.is_empty());
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let mut list = loaded_list();
        list.add("Milch", None);
        list.add("Brot", Some(0));

        assert_eq!(list.products()[1].quantity, 1);
        assert_eq!(list.products()[0].quantity, 1);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = loaded_list();
        list.add("Milch", Some(2));
        list.add("Brot", Some(1));
        list.add("Eier", Some(6));

        assert!(list.toggle("Brot"));

        for product in list.products() {
            assert_eq!(product.bought, product.name == "Brot");
        }
        // Quantities survive the toggle
        let brot = list.products().iter().find(|p| p.name == "Brot").unwrap();
        assert_eq!(brot.quantity, 1);
    }

    #[test]
    fn test_toggle_moves_to_back_and_flips_back() {
        let mut list = loaded_list();
        list.add("Milch", Some(2));
        list.add("Brot", Some(1));

        list.toggle("Brot");
        assert_eq!(list.products().last().unwrap().name, "Brot");

        list.toggle("Brot");
        assert!(!list.products().last().unwrap().bought);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut list = loaded_list();
        list.add("Milch", Some(2));

        assert!(!list.toggle("Brot"));
        assert_eq!(list.len(), 1);
        assert!(!list.products()[0].bought);
    }

    #[test]
    fn test_remove_eliminates_exactly_one() {
        let mut list = loaded_list();
        list.add("Milch", Some(2));
        list.add("Brot", Some(1));

        let removed = list.remove("Milch").unwrap();
        assert_eq!(removed.name, "Milch");
        assert_eq!(removed.quantity, 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.products()[0].name, "Brot");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = loaded_list();
        list.add("Milch", Some(2));

        assert!(list.remove("Brot").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_display_order_groups_unbought_first() {
        let mut list = loaded_list();
        list.add("Milch", Some(2));
        list.add("Brot", Some(1));
        list.add("Eier", Some(6));
        list.toggle("Eier");
        list.toggle("Milch");

        let names: Vec<&str> = list.display_order().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Brot", "Eier", "Milch"]);

        let flags: Vec<bool> = list.display_order().map(|p| p.bought).collect();
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn test_full_flow() {
        let mut list = loaded_list();
        list.add("Milch", Some(2));
        list.add("Brot", Some(1));

        let names: Vec<&str> = list.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Brot", "Milch"]);

        list.toggle("Milch");
        let order: Vec<&str> = list.display_order().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["Brot", "Milch"]);

        list.remove("Milch");
        assert_eq!(list.len(), 1);
        let brot = &list.products()[0];
        assert_eq!((brot.name.as_str(), brot.quantity, brot.bought), ("Brot", 1, false));
    }

    proptest! {
        #[test]
        fn prop_display_order_always_groups(
            ops in proptest::collection::vec(("[a-z]{1,8}", 1u32..20, any::<bool>()), 0..24)
        ) {
            let mut list = loaded_list();
            for (name, quantity, buy) in &ops {
                list.add(name, Some(*quantity));
                if *buy {
                    list.toggle(name);
                }
            }

            let flags: Vec<bool> = list.display_order().map(|p| p.bought).collect();
            let first_bought = flags.iter().position(|b| *b).unwrap_or(flags.len());
            prop_assert!(flags[first_bought..].iter().all(|b| *b));
            prop_assert_eq!(flags.len(), list.len());
        }
    }
}
