use dioxus::prelude::*;

use crate::pages::{Dashboard, Hosts};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Dashboard with the overview cards
/// - `/hosts?status=...` - Host listing, optionally filtered by status
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/hosts?:status")]
    Hosts { status: String },
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
