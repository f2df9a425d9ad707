use web_sys::{ScrollBehavior, ScrollToOptions};

/// Llevar el viewport arriba del todo (tras cada navegación)
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Instant);
    window.scroll_to_with_scroll_to_options(&options);
}
