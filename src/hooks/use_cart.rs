// ============================================================================
// USE CART - Carrito en memoria compartido por las vistas de compra
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::models::{Item, ItemId};
use crate::state::Cart;

pub enum CartAction {
    Add(Item),
    Remove(ItemId),
    Clear,
}

impl Reducible for Cart {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CartAction::Add(item) => {
                let (title, id) = (item.title.clone(), item.id);
                if next.add(item) {
                    log::info!("🛒 [CART] + {} ({})", title, id);
                } else {
                    log::debug!("🛒 [CART] {} ya está en el carrito", id);
                }
            }
            CartAction::Remove(id) => {
                next.remove(id);
            }
            CartAction::Clear => next.clear(),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseCartHandle {
    cart: UseReducerHandle<Cart>,
}

impl UseCartHandle {
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn dispatcher(&self) -> Callback<CartAction> {
        let cart = self.cart.clone();
        Callback::from(move |action: CartAction| cart.dispatch(action))
    }
}

#[hook]
pub fn use_cart() -> UseCartHandle {
    let cart = use_reducer(Cart::new);
    UseCartHandle { cart }
}
