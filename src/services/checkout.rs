// ============================================================================
// CHECKOUT - Compra del carrito, item a item
// ============================================================================
// Cada compra que sale bien se notifica en el acto (`on_bought`) para que el
// carrito la quite: si un item falla, los ya comprados no vuelven a intentarse.
// ============================================================================

use crate::error::ApiError;
use crate::models::{Item, ItemId};
use crate::services::api::MarketplaceApi;

/// Lo que se compró en un intento de checkout
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderReceipt {
    pub items: Vec<Item>,
    pub total: u64,
}

impl OrderReceipt {
    fn record(&mut self, item: Item) {
        self.total += item.price;
        self.items.push(item);
    }
}

/// Checkout interrumpido en `failed`; `bought` ya salió del carrito
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutFailure {
    pub bought: OrderReceipt,
    pub failed: ItemId,
    pub error: ApiError,
}

pub async fn place_order<F>(
    api: &dyn MarketplaceApi,
    items: Vec<Item>,
    mut on_bought: F,
) -> Result<OrderReceipt, CheckoutFailure>
where
    F: FnMut(&Item),
{
    let mut receipt = OrderReceipt::default();

    for item in items {
        match api.buy_item(item.id).await {
            Ok(_) => {
                on_bought(&item);
                receipt.record(item);
            }
            Err(error) => {
                log::error!("❌ [ORDER] Compra de {} fallida: {}", item.id, error);
                return Err(CheckoutFailure {
                    bought: receipt,
                    failed: item.id,
                    error,
                });
            }
        }
    }

    log::info!("✅ [ORDER] {} items comprados por {}", receipt.items.len(), receipt.total);
    Ok(receipt)
}
