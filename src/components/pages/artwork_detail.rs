// ============================================================================
// ARTWORK DETAIL - Ficha de una obra; comprar / añadir al carrito
// ============================================================================

use yew::prelude::*;
use crate::components::app::AppContext;
use crate::components::{ErrorBanner, LoadingSpinner};
use crate::error::ApiError;
use crate::hooks::{use_fetch, CartAction, FetchOptions};
use crate::models::{ItemId, ItemStatus};
use crate::state::Page;
use crate::utils::format_inr;

#[derive(Properties, PartialEq)]
pub struct ArtworkDetailProps {
    pub ctx: AppContext,
    pub artwork_id: Option<ItemId>,
}

#[function_component(ArtworkDetailPage)]
pub fn artwork_detail_page(props: &ArtworkDetailProps) -> Html {
    let ctx = &props.ctx;

    let artwork = {
        let api = ctx.api.clone();
        let artwork_id = props.artwork_id;
        use_fetch(
            move || {
                let api = api.clone();
                async move {
                    match artwork_id {
                        Some(id) => api.get_item(id).await,
                        None => Err(ApiError::NotFound("Artwork".to_string())),
                    }
                }
            },
            artwork_id,
            FetchOptions::default(),
        )
    };

    // Sin sesión, comprar lleva a la pantalla de auth
    let purchase = |then: Page| {
        let ctx = ctx.clone();
        let item = artwork.data.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(item) = item.clone() else {
                return;
            };
            if ctx.user().is_none() {
                ctx.go(Page::Auth);
                return;
            }
            ctx.cart_actions.emit(CartAction::Add(item));
            ctx.go(then.clone());
        })
    };

    let body = match (&artwork.data, &artwork.error) {
        (_, Some(message)) => html! {
            <ErrorBanner message={message.clone()} on_retry={artwork.refetch.clone()} />
        },
        (None, None) => html! { <LoadingSpinner message="Loading artwork..." /> },
        (Some(item), None) => {
            let available = item.status == ItemStatus::Active;
            let in_cart = ctx.cart.contains(item.id);
            html! {
                <div class="artwork-detail">
                    <div class="artwork-image">
                        if let Some(url) = &item.image_url {
                            <img src={url.clone()} alt={item.title.clone()} />
                        } else {
                            <span class="item-emoji large">{item.thumbnail()}</span>
                        }
                    </div>
                    <div class="artwork-info">
                        <h1>{&item.title}</h1>
                        <p class="artist">{format!("by {}", item.seller_name)}</p>
                        <p class="price">{format_inr(item.price)}</p>
                        if let Some(medium) = &item.medium {
                            <p class="medium">{format!("Medium: {}", medium)}</p>
                        }
                        if let Some(kg) = item.waste_used_kg {
                            <p class="impact">{format!("♻️ {:.1} kg of scrap upcycled", kg)}</p>
                        }
                        <p class="views">{format!("👁️ {} views", item.views)}</p>

                        if available {
                            <div class="detail-actions">
                                <button class="btn-primary" onclick={purchase(Page::OrderSummary)}>
                                    {"Buy now"}
                                </button>
                                if in_cart {
                                    <button class="btn-secondary" onclick={ctx.link(Page::Cart)}>
                                        {"In your cart →"}
                                    </button>
                                } else {
                                    <button class="btn-secondary" onclick={purchase(Page::Cart)}>
                                        {"Add to cart"}
                                    </button>
                                }
                            </div>
                        } else {
                            <p class="unavailable">{format!("This artwork has been {}", item.status.as_str())}</p>
                        }
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class="artwork-detail-page">
            <button class="btn-link" onclick={ctx.back_link()} disabled={!ctx.can_go_back}>{"← Back"}</button>
            {body}
        </div>
    }
}
