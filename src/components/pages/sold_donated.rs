// ============================================================================
// SOLD & DONATED - Historial de listados vendidos y donados
// ============================================================================

use yew::prelude::*;
use crate::components::app::AppContext;
use crate::components::{ErrorBanner, LoadingSpinner};
use crate::hooks::{use_fetch, FetchOptions, UseFetchHandle};
use crate::models::{Item, ItemFilter, ItemPage, ItemStatus, User};
use crate::utils::format_inr;

#[derive(Properties, PartialEq)]
pub struct SoldDonatedProps {
    pub ctx: AppContext,
    pub user: User,
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Sold,
    Donated,
}

impl Tab {
    fn status(self) -> ItemStatus {
        match self {
            Tab::Sold => ItemStatus::Sold,
            Tab::Donated => ItemStatus::Donated,
        }
    }
}

#[function_component(SoldDonatedPage)]
pub fn sold_donated_page(props: &SoldDonatedProps) -> Html {
    let ctx = &props.ctx;
    let tab = use_state(|| Tab::Sold);

    let history: UseFetchHandle<ItemPage> = {
        let api = ctx.api.clone();
        let status = tab.status();
        use_fetch(
            move || {
                let api = api.clone();
                let filter = ItemFilter::default().status(status);
                async move { api.list_items(&filter).await }
            },
            status,
            FetchOptions::default(),
        )
    };

    let tab_button = |target: Tab, label: &'static str| {
        let handle = tab.clone();
        html! {
            <button
                class={classes!("tab", (*tab == target).then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| handle.set(target))}
            >
                {label}
            </button>
        }
    };

    let row = |item: &Item| {
        let counterpart = match *tab {
            Tab::Sold => item.buyer_name.clone().unwrap_or_else(|| "—".to_string()),
            Tab::Donated => "Donated".to_string(),
        };
        html! {
            <tr key={item.id}>
                <td>{item.thumbnail()}</td>
                <td>{&item.title}</td>
                <td>{counterpart}</td>
                <td>{item.sold_at.clone().unwrap_or_default()}</td>
                <td class="num">{format_inr(item.price)}</td>
            </tr>
        }
    };

    let total: u64 = history
        .data
        .as_ref()
        .map(|page| page.items.iter().map(|item| item.price).sum())
        .unwrap_or(0);

    html! {
        <div class="sold-donated-page">
            <div class="page-header">
                <button class="btn-link" onclick={ctx.back_link()} disabled={!ctx.can_go_back}>{"←"}</button>
                <h1>{"Sold & donated"}</h1>
                <span class="owner">{&props.user.name}</span>
            </div>
            <div class="tabs">
                {tab_button(Tab::Sold, "Sold")}
                {tab_button(Tab::Donated, "Donated")}
            </div>
            {
                match (&history.data, &history.error) {
                    (_, Some(message)) => html! {
                        <ErrorBanner message={message.clone()} on_retry={history.refetch.clone()} />
                    },
                    (None, None) => html! { <LoadingSpinner /> },
                    (Some(page), None) if page.items.is_empty() => html! {
                        <p class="empty">{"Nothing here yet."}</p>
                    },
                    (Some(page), None) => html! {
                        <table class="history-table">
                            <tbody>{ for page.items.iter().map(row) }</tbody>
                            if *tab == Tab::Sold {
                                <tfoot>
                                    <tr>
                                        <td colspan="4">{"Total earned"}</td>
                                        <td class="num">{format_inr(total)}</td>
                                    </tr>
                                </tfoot>
                            }
                        </table>
                    },
                }
            }
        </div>
    }
}
