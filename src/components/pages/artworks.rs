// ============================================================================
// ARTWORKS - Galería paginada de obras de arte
// ============================================================================

use yew::prelude::*;
use crate::components::pages::PageProps;
use crate::components::{ErrorBanner, ItemCard, LoadingSpinner};
use crate::hooks::{use_fetch, FetchOptions};
use crate::models::{Item, ItemFilter, ItemStatus};
use crate::state::Page;
use crate::utils::ARTWORKS_PAGE_SIZE;

#[function_component(ArtworksPage)]
pub fn artworks_page(props: &PageProps) -> Html {
    let ctx = &props.ctx;
    let page = use_state(|| 1u32);

    let artworks = {
        let api = ctx.api.clone();
        let current_page = *page;
        use_fetch(
            move || {
                let api = api.clone();
                let filter = ItemFilter::default()
                    .category("artwork")
                    .status(ItemStatus::Active)
                    .limit(ARTWORKS_PAGE_SIZE)
                    .page(current_page);
                async move { api.list_items(&filter).await }
            },
            current_page,
            FetchOptions::default(),
        )
    };

    let on_select = {
        let navigate = ctx.navigate.clone();
        Callback::from(move |item: Item| {
            navigate.emit(Page::artwork(item.id).into());
        })
    };

    let pages = artworks.data.as_ref().map(|result| result.pages).unwrap_or(1);
    let go_to = |target: u32| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(target))
    };

    let body = match (&artworks.data, &artworks.error) {
        (_, Some(message)) => html! {
            <ErrorBanner message={message.clone()} on_retry={artworks.refetch.clone()} />
        },
        (None, None) => html! { <LoadingSpinner message="Loading artworks..." /> },
        (Some(result), None) if result.items.is_empty() => html! {
            <p class="empty">{"No artworks yet. Check back soon!"}</p>
        },
        (Some(result), None) => html! {
            <div class="item-grid">
                { for result.items.iter().map(|item| html! {
                    <ItemCard key={item.id} item={item.clone()} on_select={on_select.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <div class="artworks-page">
            <div class="page-header">
                <button class="btn-link" onclick={ctx.back_link()} disabled={!ctx.can_go_back}>{"←"}</button>
                <h1>{"Upcycled Artworks"}</h1>
                if artworks.loading && artworks.data.is_some() {
                    <span class="refreshing">{"⟳"}</span>
                }
            </div>

            {body}

            if pages > 1 {
                <div class="pagination">
                    <button onclick={go_to(page.saturating_sub(1).max(1))} disabled={*page <= 1}>
                        {"‹ Prev"}
                    </button>
                    <span>{format!("Page {} of {}", *page, pages)}</span>
                    <button onclick={go_to((*page + 1).min(pages))} disabled={*page >= pages}>
                        {"Next ›"}
                    </button>
                </div>
            }
        </div>
    }
}
