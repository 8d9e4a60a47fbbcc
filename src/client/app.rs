use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: "https://cdn.jsdelivr.net/npm/daisyui@5" }
        document::Script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        Router::<Route> {}
    }
}
