// ============================================================================
// USE FETCH - Hook genérico de lectura asíncrona {data, loading, error, refetch}
// ============================================================================
// Uso:
//   let items = use_fetch(move || { ... async move { api.my_items().await } },
//                         deps, FetchOptions::default());
// Se vuelve a ejecutar cuando `deps` cambia (comparación con PartialEq).
// ============================================================================

use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::error::ApiResult;
use crate::state::fetch_state::{self, AutoRun, FetchController, SharedFetch};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOptions<T> {
    /// Ejecutar al montar y en cada cambio de deps
    pub immediate: bool,
    pub initial_data: Option<T>,
}

impl<T> Default for FetchOptions<T> {
    fn default() -> Self {
        Self {
            immediate: true,
            initial_data: None,
        }
    }
}

impl<T> FetchOptions<T> {
    /// Solo se ejecuta con `refetch`
    pub fn manual() -> Self {
        Self {
            immediate: false,
            initial_data: None,
        }
    }
}

#[derive(Clone)]
pub struct UseFetchHandle<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

#[hook]
pub fn use_fetch<T, F, Fut, D>(operation: F, deps: D, options: FetchOptions<T>) -> UseFetchHandle<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
    D: PartialEq + 'static,
{
    let FetchOptions { immediate, initial_data } = options;

    let controller: SharedFetch<T> =
        use_mut_ref(move || FetchController::for_mode(initial_data, immediate));
    let auto_run = use_mut_ref(move || AutoRun::<D>::new(immediate));

    // Siempre la última closure, sin re-ejecutar por cambiar de identidad
    let operation_ref = use_mut_ref(|| None::<Rc<F>>);
    *operation_ref.borrow_mut() = Some(Rc::new(operation));

    let rerender = use_force_update();

    let refetch = {
        let controller = controller.clone();
        let operation_ref = operation_ref.clone();
        Callback::from(move |_: ()| {
            let operation = operation_ref.borrow().clone();
            let Some(operation) = operation else {
                return;
            };

            let pending = fetch_state::execute(controller.clone(), (*operation)());
            rerender.force_update();

            let rerender = rerender.clone();
            spawn_local(async move {
                pending.await;
                rerender.force_update();
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect(move || {
            if auto_run.borrow_mut().observe(deps) {
                refetch.emit(());
            }
            || ()
        });
    }

    let state = controller.borrow().state().clone();
    UseFetchHandle {
        data: state.data,
        loading: state.loading,
        error: state.error,
        refetch,
    }
}
