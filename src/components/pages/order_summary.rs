// ============================================================================
// ORDER SUMMARY - Resumen y confirmación de la compra del carrito
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::pages::PageProps;
use crate::components::{ErrorBanner, LoadingSpinner};
use crate::hooks::CartAction;
use crate::services::{place_order, CheckoutFailure};
use crate::state::Page;
use crate::utils::format_inr;

#[derive(Clone, PartialEq)]
enum Checkout {
    Review,
    Placing,
    Placed { total: u64, items: usize },
    Failed(String),
}

fn failure_message(failure: &CheckoutFailure) -> String {
    if failure.bought.items.is_empty() {
        failure.error.to_string()
    } else {
        format!(
            "{} ({} item(s) already bought for {} and removed from your cart)",
            failure.error,
            failure.bought.items.len(),
            format_inr(failure.bought.total)
        )
    }
}

#[function_component(OrderSummaryPage)]
pub fn order_summary_page(props: &PageProps) -> Html {
    let ctx = &props.ctx;
    let checkout = use_state(|| Checkout::Review);
    let cart = &ctx.cart;

    let place = {
        let ctx = ctx.clone();
        let checkout = checkout.clone();
        Callback::from(move |_: MouseEvent| {
            if ctx.user().is_none() {
                ctx.go(Page::Auth);
                return;
            }
            let items = ctx.cart.items().to_vec();
            let api = ctx.api.clone();
            let cart_actions = ctx.cart_actions.clone();
            let checkout = checkout.clone();

            checkout.set(Checkout::Placing);
            spawn_local(async move {
                let outcome = place_order(&*api, items, |item| {
                    cart_actions.emit(CartAction::Remove(item.id));
                })
                .await;
                match outcome {
                    Ok(receipt) => checkout.set(Checkout::Placed {
                        total: receipt.total,
                        items: receipt.items.len(),
                    }),
                    Err(failure) => checkout.set(Checkout::Failed(failure_message(&failure))),
                }
            });
        })
    };

    let content = match &*checkout {
        Checkout::Placed { total, items } => html! {
            <div class="order-placed">
                <h2>{"🎉 Order placed!"}</h2>
                <p>{format!("{} item(s) for {}", items, format_inr(*total))}</p>
                <button class="btn-primary" onclick={ctx.link(Page::Artworks)}>{"Keep browsing"}</button>
            </div>
        },
        Checkout::Placing => html! { <LoadingSpinner message="Placing your order..." /> },
        Checkout::Review | Checkout::Failed(_) if cart.is_empty() => html! {
            <div class="empty">
                <p>{"Nothing to check out."}</p>
                <button class="btn-secondary" onclick={ctx.link(Page::Artworks)}>{"Browse artworks"}</button>
            </div>
        },
        state => html! {
            <>
                if let Checkout::Failed(message) = state {
                    <ErrorBanner message={message.clone()} />
                }
                <table class="order-table">
                    <tbody>
                        { for cart.items().iter().map(|item| html! {
                            <tr key={item.id}>
                                <td>{&item.title}</td>
                                <td>{&item.seller_name}</td>
                                <td class="num">{format_inr(item.price)}</td>
                            </tr>
                        }) }
                    </tbody>
                    <tfoot>
                        <tr>
                            <td colspan="2">{"Total"}</td>
                            <td class="num">{format_inr(cart.total())}</td>
                        </tr>
                    </tfoot>
                </table>
                <button class="btn-primary" onclick={place}>
                    { if ctx.user().is_some() { "Place order" } else { "Sign in to order" } }
                </button>
            </>
        },
    };

    html! {
        <div class="order-summary-page">
            <div class="page-header">
                <button class="btn-link" onclick={ctx.back_link()} disabled={!ctx.can_go_back}>{"←"}</button>
                <h1>{"Order summary"}</h1>
            </div>
            {content}
        </div>
    }
}
