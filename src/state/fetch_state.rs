// ============================================================================
// FETCH STATE - {data, loading, error} para una lectura asíncrona
// ============================================================================
// Cada ejecución recibe un ticket con número de generación; solo el resultado
// de la última generación emitida se aplica al estado. Los resultados viejos
// se descartan en silencio (cambio rápido de filtros, refetch repetido).
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> FetchState<T> {
    pub fn new(initial_data: Option<T>) -> Self {
        Self {
            data: initial_data,
            loading: false,
            error: None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Identifica una ejecución concreta
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// Existe una ejecución más reciente; el resultado no toca el estado
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchController<T> {
    state: FetchState<T>,
    latest: u64,
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> FetchController<T> {
    pub fn new(initial_data: Option<T>) -> Self {
        Self {
            state: FetchState::new(initial_data),
            latest: 0,
        }
    }

    /// Para controladores que se ejecutan al montar: loading=true desde el
    /// primer render, antes de que corra el efecto
    pub fn awaiting_first_run(mut self) -> Self {
        self.state.loading = true;
        self
    }

    /// Estado inicial del hook: en modo manual no hay nada en curso
    pub fn for_mode(initial_data: Option<T>, immediate: bool) -> Self {
        let controller = Self::new(initial_data);
        if immediate {
            controller.awaiting_first_run()
        } else {
            controller
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Empezar una ejecución: loading=true, error=None
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state.loading = true;
        self.state.error = None;
        log::debug!("⏳ [FETCH] Ejecución #{} iniciada", self.latest);
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Aplicar el resultado de `ticket`. En error `data` conserva su valor.
    pub fn settle(&mut self, ticket: RequestTicket, outcome: Result<T, String>) -> Settlement {
        if !self.is_current(ticket) {
            log::debug!(
                "🗑️ [FETCH] Resultado #{} descartado (última: #{})",
                ticket.0,
                self.latest
            );
            return Settlement::Stale;
        }

        match outcome {
            Ok(data) => {
                self.state.data = Some(data);
                self.state.error = None;
            }
            Err(message) => {
                log::debug!("❌ [FETCH] Ejecución #{} falló: {}", ticket.0, message);
                self.state.error = Some(message);
            }
        }
        self.state.loading = false;
        Settlement::Applied
    }
}

/// Controlador compartido entre el hook y las tareas async
pub type SharedFetch<T> = Rc<RefCell<FetchController<T>>>;

/// Cuándo se lanza sola la ejecución: al montar y cada vez que las
/// dependencias cambian (PartialEq), y solo en modo `immediate`
#[derive(Debug)]
pub struct AutoRun<D> {
    immediate: bool,
    last_deps: Option<D>,
}

impl<D: PartialEq> AutoRun<D> {
    pub fn new(immediate: bool) -> Self {
        Self {
            immediate,
            last_deps: None,
        }
    }

    /// Registrar las dependencias de este render; `true` = ejecutar ahora
    pub fn observe(&mut self, deps: D) -> bool {
        if self.last_deps.as_ref() == Some(&deps) {
            return false;
        }
        self.last_deps = Some(deps);
        self.immediate
    }
}

/// Inicia la ejecución de forma síncrona (loading=true ya al volver) y
/// devuelve el futuro que la completa. El resultado se devuelve al que llama
/// aunque haya quedado obsoleto para el estado; `None` si falló.
pub fn execute<T, Fut>(controller: SharedFetch<T>, operation: Fut) -> impl Future<Output = Option<T>>
where
    T: Clone,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let ticket = controller.borrow_mut().begin();
    async move {
        let outcome = operation.await;
        let value = outcome.as_ref().ok().cloned();
        controller
            .borrow_mut()
            .settle(ticket, outcome.map_err(|e| e.to_string()));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    fn shared<T>(initial: Option<T>) -> SharedFetch<T> {
        Rc::new(RefCell::new(FetchController::new(initial)))
    }

    #[test]
    fn execute_sets_loading_synchronously_and_populates_data() {
        let controller = shared::<Vec<u32>>(None);
        let (tx, rx) = oneshot::channel::<Result<Vec<u32>, ApiError>>();

        let pending = execute(controller.clone(), async move {
            rx.await.unwrap_or_else(|_| Err(ApiError::Network("dropped".into())))
        });
        assert!(controller.borrow().state().loading);
        assert_eq!(controller.borrow().state().error, None);

        tx.send(Ok(vec![1, 2, 3])).unwrap();
        let result = block_on(pending);

        assert_eq!(result, Some(vec![1, 2, 3]));
        let state = controller.borrow().state().clone();
        assert!(!state.loading);
        assert_eq!(state.data, Some(vec![1, 2, 3]));
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_keeps_previous_data_and_reports_message() {
        let controller = shared(Some("cached".to_string()));
        let result = block_on(execute(controller.clone(), async {
            Err::<String, _>(ApiError::NotFound("Item".into()))
        }));

        assert_eq!(result, None);
        let state = controller.borrow().state().clone();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Item not found"));
        assert_eq!(state.data.as_deref(), Some("cached"));
    }

    #[test]
    fn success_after_failure_clears_error() {
        let controller = shared::<u32>(None);
        block_on(execute(controller.clone(), async { Err(ApiError::Unauthenticated) }));
        assert!(controller.borrow().state().error.is_some());

        let ticket = controller.borrow_mut().begin();
        assert_eq!(controller.borrow().state().error, None);
        controller.borrow_mut().settle(ticket, Ok(5));
        assert_eq!(controller.borrow().state().data, Some(5));
    }

    #[test]
    fn latest_issued_request_wins_even_if_it_settles_first() {
        let controller = shared::<&'static str>(None);
        let (slow_tx, slow_rx) = oneshot::channel::<&'static str>();
        let (fast_tx, fast_rx) = oneshot::channel::<&'static str>();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let first = execute(controller.clone(), async move {
            slow_rx.await.map_err(|_| ApiError::Network("dropped".into()))
        });
        let second = execute(controller.clone(), async move {
            fast_rx.await.map_err(|_| ApiError::Network("dropped".into()))
        });
        spawner.spawn_local(async move { first.await; }).unwrap();
        spawner.spawn_local(async move { second.await; }).unwrap();

        // La segunda (más reciente) termina primero
        fast_tx.send("metal").unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.borrow().state().data, Some("metal"));
        assert!(!controller.borrow().state().loading);

        // La primera llega tarde y se descarta
        slow_tx.send("all").unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.borrow().state().data, Some("metal"));
        assert!(!controller.borrow().state().loading);
    }

    #[test]
    fn loading_stays_true_while_latest_request_is_in_flight() {
        let mut controller = FetchController::<u32>::new(None);
        let first = controller.begin();
        let second = controller.begin();

        assert_eq!(controller.settle(first, Ok(1)), Settlement::Stale);
        assert!(controller.state().loading);
        assert_eq!(controller.state().data, None);

        assert_eq!(controller.settle(second, Ok(2)), Settlement::Applied);
        assert!(!controller.state().loading);
        assert_eq!(controller.state().data, Some(2));
    }

    #[test]
    fn stale_failure_does_not_surface_an_error() {
        let mut controller = FetchController::<u32>::new(None);
        let first = controller.begin();
        let second = controller.begin();
        controller.settle(second, Ok(9));
        assert_eq!(controller.settle(first, Err("timeout".into())), Settlement::Stale);
        assert_eq!(controller.state().error, None);
        assert_eq!(controller.state().data, Some(9));
    }

    #[test]
    fn stale_result_is_still_returned_to_its_caller() {
        let controller = shared::<u32>(None);
        let stale = execute(controller.clone(), async { Ok(1) });
        let fresh = execute(controller.clone(), async { Ok(2) });
        assert_eq!(block_on(stale), Some(1));
        assert_eq!(block_on(fresh), Some(2));
        assert_eq!(controller.borrow().state().data, Some(2));
    }

    #[test]
    fn manual_mode_starts_idle_and_never_runs_by_itself() {
        let controller = FetchController::for_mode(Some(vec![1u32]), false);
        assert!(!controller.state().loading);
        assert_eq!(controller.state().data, Some(vec![1]));

        let mut auto = AutoRun::new(false);
        assert!(!auto.observe("metal"));
        assert!(!auto.observe("metal"));
        assert!(!auto.observe("plastic"));
    }

    #[test]
    fn immediate_mode_runs_on_mount_and_on_each_deps_change() {
        let controller = FetchController::<u32>::for_mode(None, true);
        assert!(controller.state().loading);

        let mut auto = AutoRun::new(true);
        assert!(auto.observe(1u32), "first render runs");
        assert!(!auto.observe(1), "re-render with same deps does not");
        assert!(auto.observe(2), "changed deps run again");
        assert!(!auto.observe(2));
        assert!(auto.observe(1), "going back to old deps is a change too");
    }

    #[test]
    fn awaiting_first_run_reports_loading_before_any_request() {
        let mut controller = FetchController::<u32>::new(None).awaiting_first_run();
        assert!(controller.state().loading);
        let ticket = controller.begin();
        assert_eq!(ticket.generation(), 1);
        controller.settle(ticket, Ok(3));
        assert!(!controller.state().loading);
    }

    #[test]
    fn initial_state_holds_initial_data() {
        let controller = FetchController::new(Some(vec!["seed"]));
        assert_eq!(controller.state().data, Some(vec!["seed"]));
        assert!(!controller.state().loading);
        assert_eq!(controller.state().error, None);
    }
}
