use yew::prelude::*;
use crate::models::{Item, ItemStatus};
use crate::utils::format_inr;

#[derive(Properties, PartialEq)]
pub struct ItemCardProps {
    pub item: Item,
    #[prop_or_default]
    pub on_select: Option<Callback<Item>>,
    /// Botones extra (comprar, donar...) debajo del precio
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ItemCard)]
pub fn item_card(props: &ItemCardProps) -> Html {
    let item = &props.item;

    let onclick = props.on_select.clone().map(|on_select| {
        let item = item.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(item.clone()))
    });

    let status_class = match item.status {
        ItemStatus::Active => "badge badge-active",
        ItemStatus::Sold => "badge badge-sold",
        ItemStatus::Donated => "badge badge-donated",
    };

    html! {
        <div class="item-card" {onclick}>
            <div class="item-thumb">
                if let Some(url) = &item.image_url {
                    <img src={url.clone()} alt={item.title.clone()} />
                } else {
                    <span class="item-emoji">{item.thumbnail()}</span>
                }
            </div>
            <div class="item-body">
                <h3 class="item-title">{&item.title}</h3>
                <p class="item-meta">
                    {&item.category}
                    if !item.seller_name.is_empty() {
                        {" · "}{&item.seller_name}
                    }
                </p>
                <div class="item-footer">
                    <span class="item-price">{format_inr(item.price)}</span>
                    <span class={status_class}>{item.status.as_str()}</span>
                </div>
                if item.green_coins_reward > 0 {
                    <p class="item-coins">{format!("🪙 +{} Green Coins", item.green_coins_reward)}</p>
                }
                {props.children.clone()}
            </div>
        </div>
    }
}
