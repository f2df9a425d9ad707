use yew::prelude::*;
use crate::components::pages::PageProps;
use crate::hooks::CartAction;
use crate::state::Page;
use crate::utils::format_inr;

#[function_component(CartPage)]
pub fn cart_page(props: &PageProps) -> Html {
    let ctx = &props.ctx;
    let cart = &ctx.cart;

    let remove = |id| ctx.cart_actions.reform(move |_: MouseEvent| CartAction::Remove(id));

    html! {
        <div class="cart-page">
            <div class="page-header">
                <button class="btn-link" onclick={ctx.back_link()} disabled={!ctx.can_go_back}>{"←"}</button>
                <h1>{"Your cart"}</h1>
            </div>

            if cart.is_empty() {
                <div class="empty">
                    <p>{"Your cart is empty."}</p>
                    <button class="btn-secondary" onclick={ctx.link(Page::Artworks)}>{"Browse artworks"}</button>
                </div>
            } else {
                <ul class="cart-lines">
                    { for cart.items().iter().map(|item| html! {
                        <li class="cart-line" key={item.id}>
                            <span class="item-emoji">{item.thumbnail()}</span>
                            <div class="cart-line-info">
                                <span class="title">{&item.title}</span>
                                <span class="seller">{&item.seller_name}</span>
                            </div>
                            <span class="subtotal">{format_inr(item.price)}</span>
                            <button class="btn-remove" onclick={remove(item.id)}>{"✕"}</button>
                        </li>
                    }) }
                </ul>
                <div class="cart-total">
                    <span>{"Total"}</span>
                    <strong>{format_inr(cart.total())}</strong>
                </div>
                <button class="btn-primary" onclick={ctx.link(Page::OrderSummary)}>{"Proceed to checkout"}</button>
            }
        </div>
    }
}
