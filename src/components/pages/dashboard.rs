// ============================================================================
// DASHBOARD - Una vista por rol (artista, vendedor, helper, organización)
// ============================================================================

use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use crate::components::app::AppContext;
use crate::components::{ErrorBanner, ItemCard, LoadingSpinner};
use crate::error::ApiResult;
use crate::hooks::{use_fetch, FetchOptions};
use crate::models::{Item, ItemDraft, ItemFilter, ItemStatus, Role, Task, TaskScope, TaskStatus, User};
use crate::state::Page;
use crate::utils::format_inr;

/// Categorías de chatarra que ofrece el filtro de la organización
const SCRAP_CATEGORIES: [&str; 8] = ["all", "metal", "plastic", "e-waste", "wood", "glass", "paper", "textile"];

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub ctx: AppContext,
    pub role: Role,
    pub user: User,
}

#[derive(Properties, PartialEq)]
struct RoleDashboardProps {
    ctx: AppContext,
    user: User,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardProps) -> Html {
    let ctx = &props.ctx;
    let user = &props.user;

    if props.role != user.role {
        log::warn!(
            "⚠️ [DASHBOARD] Dashboard de {} abierto por un {}",
            props.role,
            user.role
        );
    }

    let body = match props.role {
        Role::Artist | Role::User => html! {
            <ListingsDashboard ctx={ctx.clone()} user={user.clone()} />
        },
        Role::Helper => html! { <HelperDashboard ctx={ctx.clone()} user={user.clone()} /> },
        Role::Organisation => html! {
            <OrganisationDashboard ctx={ctx.clone()} user={user.clone()} />
        },
    };

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <div>
                    <h1>{format!("Hi, {}", user.name)}</h1>
                    <p class="role">
                        {props.role.label()}
                        if user.is_verified {
                            <span class="verified">{" ✔"}</span>
                        }
                    </p>
                </div>
                <div class="coins">{format!("🪙 {}", user.green_coins)}</div>
            </div>
            <nav class="dashboard-nav">
                <button onclick={ctx.link(Page::SoldDonated)}>{"Sold & donated"}</button>
                <button onclick={ctx.link(Page::Collaborations)}>{"Collaborations"}</button>
                <button class="btn-logout" onclick={ctx.logout.reform(|_: MouseEvent| ())}>{"Log out"}</button>
            </nav>
            {body}
        </div>
    }
}

/// Ejecuta una mutación y, si va bien, vuelve a pedir la lista
fn mutate_then_refetch<T, Fut>(action: Fut, error: UseStateHandle<Option<String>>, refetch: Callback<()>)
where
    T: 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    error.set(None);
    spawn_local(async move {
        match action.await {
            Ok(_) => refetch.emit(()),
            Err(e) => {
                log::error!("❌ [DASHBOARD] {}", e);
                error.set(Some(e.to_string()));
            }
        }
    });
}

// ============================================================================
// ARTISTA / VENDEDOR - Mis listados + estadísticas + nuevo listado
// ============================================================================

#[function_component(ListingsDashboard)]
fn listings_dashboard(props: &RoleDashboardProps) -> Html {
    let ctx = &props.ctx;
    let action_error = use_state(|| None::<String>);

    let listings = {
        let api = ctx.api.clone();
        use_fetch(
            move || {
                let api = api.clone();
                async move { api.my_items().await }
            },
            (),
            FetchOptions::default(),
        )
    };

    let stats = {
        let api = ctx.api.clone();
        let user_id = props.user.id;
        use_fetch(
            move || {
                let api = api.clone();
                async move { api.user_stats(user_id).await }
            },
            user_id,
            FetchOptions::default(),
        )
    };

    let refresh_all = {
        let listings = listings.refetch.clone();
        let stats = stats.refetch.clone();
        Callback::from(move |_: ()| {
            listings.emit(());
            stats.emit(());
        })
    };

    let title_ref = use_node_ref();
    let category_ref = use_node_ref();
    let price_ref = use_node_ref();

    let default_category = if props.user.role == Role::Artist { "artwork" } else { "metal" };

    let on_create = {
        let api = ctx.api.clone();
        let action_error = action_error.clone();
        let refresh_all = refresh_all.clone();
        let title_ref = title_ref.clone();
        let category_ref = category_ref.clone();
        let price_ref = price_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let title = title_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let category = category_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_else(|| default_category.to_string());
            let price = match price_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default()
                .trim()
                .parse::<u64>()
            {
                Ok(price) => price,
                Err(_) => {
                    action_error.set(Some("Price must be a whole number of rupees".to_string()));
                    return;
                }
            };

            if let Some(input) = title_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }

            let draft = ItemDraft {
                title,
                category,
                price,
                medium: None,
                waste_used_kg: None,
            };
            let api = api.clone();
            mutate_then_refetch(
                async move { api.create_item(&draft).await },
                action_error.clone(),
                refresh_all.clone(),
            );
        })
    };

    let donate = |item: &Item| {
        let api = ctx.api.clone();
        let action_error = action_error.clone();
        let refresh_all = refresh_all.clone();
        let id = item.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let api = api.clone();
            mutate_then_refetch(
                async move { api.donate_item(id).await },
                action_error.clone(),
                refresh_all.clone(),
            );
        })
    };

    let on_select = ctx.navigate.reform(|item: Item| Page::artwork(item.id).into());

    html! {
        <section class="listings-dashboard">
            if let Some(stats) = &stats.data {
                <div class="stats">
                    <div class="stat"><strong>{stats.total_listings}</strong><span>{"Listings"}</span></div>
                    <div class="stat"><strong>{stats.total_sold}</strong><span>{"Sold"}</span></div>
                    <div class="stat"><strong>{stats.total_donated}</strong><span>{"Donated"}</span></div>
                    <div class="stat">
                        <strong>{format!("{:.1}", stats.rating)}</strong>
                        <span>{format!("{} ratings", stats.rating_count)}</span>
                    </div>
                </div>
            }

            if let Some(message) = (*action_error).clone() {
                <ErrorBanner {message} />
            }

            <form class="new-listing" onsubmit={on_create}>
                <input type="text" ref={title_ref} placeholder="What are you listing?" />
                <select ref={category_ref}>
                    <option value={default_category} selected=true>{default_category}</option>
                    { for SCRAP_CATEGORIES.iter().skip(1).filter(|c| **c != default_category).map(|category| html! {
                        <option value={*category}>{*category}</option>
                    }) }
                </select>
                <input type="number" min="0" ref={price_ref} placeholder="Price (₹)" />
                <button type="submit" class="btn-primary">{"List it"}</button>
            </form>

            <h2>{"My listings"}</h2>
            {
                match (&listings.data, &listings.error) {
                    (_, Some(message)) => html! {
                        <ErrorBanner message={message.clone()} on_retry={listings.refetch.clone()} />
                    },
                    (None, None) => html! { <LoadingSpinner message="Loading your listings..." /> },
                    (Some(items), None) if items.is_empty() => html! {
                        <p class="empty">{"You haven't listed anything yet."}</p>
                    },
                    (Some(items), None) => html! {
                        <div class="item-grid">
                            { for items.iter().map(|item| html! {
                                <ItemCard key={item.id} item={item.clone()} on_select={on_select.clone()}>
                                    if item.status == ItemStatus::Active {
                                        <button class="btn-secondary" onclick={donate(item)}>{"Donate"}</button>
                                    }
                                </ItemCard>
                            }) }
                        </div>
                    },
                }
            }
        </section>
    }
}

// ============================================================================
// HELPER - Recogidas asignadas y abiertas
// ============================================================================

#[function_component(HelperDashboard)]
fn helper_dashboard(props: &RoleDashboardProps) -> Html {
    let ctx = &props.ctx;
    let scope = use_state(|| TaskScope::Mine);
    let action_error = use_state(|| None::<String>);

    let tasks = {
        let api = ctx.api.clone();
        let current_scope = *scope;
        use_fetch(
            move || {
                let api = api.clone();
                async move { api.list_tasks(current_scope).await }
            },
            current_scope,
            FetchOptions::default(),
        )
    };

    let task_action = |task: &Task| -> Option<(&'static str, Callback<MouseEvent>)> {
        let api = ctx.api.clone();
        let action_error = action_error.clone();
        let refetch = tasks.refetch.clone();
        let id = task.id;
        let label = match task.status {
            TaskStatus::Pending => "Accept pickup",
            TaskStatus::Assigned => "Mark collected",
            TaskStatus::Collected => "Mark delivered",
            TaskStatus::Delivered | TaskStatus::Cancelled => return None,
        };
        let status = task.status;
        let callback = Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            mutate_then_refetch(
                async move {
                    if status == TaskStatus::Pending {
                        api.assign_task(id).await
                    } else {
                        api.progress_task(id).await
                    }
                },
                action_error.clone(),
                refetch.clone(),
            );
        });
        Some((label, callback))
    };

    let cancel = |task: &Task| {
        let api = ctx.api.clone();
        let action_error = action_error.clone();
        let refetch = tasks.refetch.clone();
        let id = task.id;
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            mutate_then_refetch(async move { api.cancel_task(id).await }, action_error.clone(), refetch.clone());
        })
    };

    let scope_tab = |target: TaskScope, label: &'static str| {
        let scope_handle = scope.clone();
        let class = if *scope == target { "tab active" } else { "tab" };
        html! {
            <button {class} onclick={Callback::from(move |_: MouseEvent| scope_handle.set(target))}>
                {label}
            </button>
        }
    };

    html! {
        <section class="helper-dashboard">
            <div class="tabs">
                {scope_tab(TaskScope::Mine, "My pickups")}
                {scope_tab(TaskScope::Open, "Open requests")}
            </div>

            if let Some(message) = (*action_error).clone() {
                <ErrorBanner {message} />
            }

            {
                match (&tasks.data, &tasks.error) {
                    (_, Some(message)) => html! {
                        <ErrorBanner message={message.clone()} on_retry={tasks.refetch.clone()} />
                    },
                    (None, None) => html! { <LoadingSpinner message="Loading pickups..." /> },
                    (Some(list), None) if list.is_empty() => html! {
                        <p class="empty">{"No pickups here right now."}</p>
                    },
                    (Some(list), None) => html! {
                        <ul class="task-list">
                            { for list.iter().map(|task| html! {
                                <li key={task.id} class={classes!("task", task.is_urgent.then_some("urgent"))}>
                                    <div class="task-head">
                                        <strong>{&task.item_description}</strong>
                                        <span class="badge">{task.status.label()}</span>
                                    </div>
                                    <p class="task-route">{format!("{} → {}", task.pickup_address, task.dropoff_address)}</p>
                                    <p class="task-meta">
                                        {format!("for {}", task.requester_name)}
                                        if let Some(weight) = &task.weight {
                                            {format!(" · {}", weight)}
                                        }
                                        {format!(" · 🪙 {}", task.green_coins_reward)}
                                    </p>
                                    <div class="task-actions">
                                        if let Some((label, onclick)) = task_action(task) {
                                            <button class="btn-primary" {onclick}>{label}</button>
                                        }
                                        if matches!(task.status, TaskStatus::Assigned | TaskStatus::Collected) {
                                            <button class="btn-secondary" onclick={cancel(task)}>{"Cancel"}</button>
                                        }
                                    </div>
                                </li>
                            }) }
                        </ul>
                    },
                }
            }
        </section>
    }
}

// ============================================================================
// ORGANIZACIÓN - Explorar chatarra por categoría y comprarla
// ============================================================================

#[function_component(OrganisationDashboard)]
fn organisation_dashboard(props: &RoleDashboardProps) -> Html {
    let ctx = &props.ctx;
    let category = use_state(|| "all".to_string());
    let action_error = use_state(|| None::<String>);

    // Cambiar de categoría rápido: solo cuenta la última respuesta
    let scrap = {
        let api = ctx.api.clone();
        let current = (*category).clone();
        let filter_category = current.clone();
        use_fetch(
            move || {
                let api = api.clone();
                let filter = ItemFilter::default()
                    .category(filter_category.clone())
                    .status(ItemStatus::Active);
                async move { api.list_items(&filter).await }
            },
            current,
            FetchOptions::default(),
        )
    };

    let buy = |item: &Item| {
        let api = ctx.api.clone();
        let action_error = action_error.clone();
        let refetch = scrap.refetch.clone();
        let id = item.id;
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            mutate_then_refetch(async move { api.buy_item(id).await }, action_error.clone(), refetch.clone());
        })
    };

    html! {
        <section class="organisation-dashboard">
            <div class="category-filter">
                { for SCRAP_CATEGORIES.iter().map(|name| {
                    let handle = category.clone();
                    let selected = *category == *name;
                    let name = *name;
                    html! {
                        <button
                            class={classes!("chip", selected.then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| handle.set(name.to_string()))}
                        >
                            {name}
                        </button>
                    }
                }) }
            </div>

            if let Some(message) = (*action_error).clone() {
                <ErrorBanner {message} />
            }

            {
                match (&scrap.data, &scrap.error) {
                    (_, Some(message)) => html! {
                        <ErrorBanner message={message.clone()} on_retry={scrap.refetch.clone()} />
                    },
                    (None, None) => html! { <LoadingSpinner message="Loading scrap..." /> },
                    (Some(result), None) if result.items.is_empty() => html! {
                        <p class="empty">{"No scrap in this category."}</p>
                    },
                    (Some(result), None) => html! {
                        <>
                            <p class="result-count">{format!("{} listings", result.total)}</p>
                            <div class="item-grid">
                                { for result.items.iter().map(|item| html! {
                                    <ItemCard key={item.id} item={item.clone()}>
                                        <button class="btn-primary" onclick={buy(item)}>
                                            {format!("Buy for {}", format_inr(item.price))}
                                        </button>
                                    </ItemCard>
                                }) }
                            </div>
                        </>
                    },
                }
            }
        </section>
    }
}
