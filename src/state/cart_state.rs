// ============================================================================
// CART STATE - Carrito (solo lo modifican las operaciones del carrito)
// ============================================================================
// Cada listado es una pieza única: una línea por item, sin cantidades.
// ============================================================================

use crate::models::{Item, ItemId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añadir; `false` si ya estaba en el carrito (no cambia nada)
    pub fn add(&mut self, item: Item) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Devuelve el item eliminado, si existía
    pub fn remove(&mut self, item_id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;

    fn artwork(id: ItemId, price: u64) -> Item {
        Item {
            id,
            title: format!("Artwork {}", id),
            category: "artwork".into(),
            price,
            status: ItemStatus::Active,
            seller_name: "GreenArt Studio".into(),
            views: 0,
            green_coins_reward: 0,
            image: None,
            image_url: None,
            buyer_name: None,
            sold_at: None,
            waste_used_kg: None,
            medium: None,
        }
    }

    #[test]
    fn adding_the_same_piece_twice_keeps_one_line() {
        let mut cart = Cart::new();
        assert!(cart.add(artwork(1, 3500)));
        assert!(!cart.add(artwork(1, 3500)));
        assert!(cart.add(artwork(2, 950)));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 3500 + 950);
    }

    #[test]
    fn total_matches_the_sum_of_what_gets_bought() {
        let mut cart = Cart::new();
        cart.add(artwork(101, 3500));
        cart.add(artwork(101, 3500));
        let charged: u64 = cart.items().iter().map(|item| item.price).sum();
        assert_eq!(cart.total(), charged);
        assert_eq!(cart.total(), 3500);
    }

    #[test]
    fn remove_drops_the_item() {
        let mut cart = Cart::new();
        cart.add(artwork(1, 100));
        let removed = cart.remove(1).expect("item exists");
        assert_eq!(removed.id, 1);
        assert!(cart.is_empty());
        assert_eq!(cart.remove(1), None);
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(artwork(3, 1200));
        assert!(cart.contains(3));
        cart.clear();
        assert!(!cart.contains(3));
        assert_eq!(cart.len(), 0);
    }
}
