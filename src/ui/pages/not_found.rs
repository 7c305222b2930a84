//! Not found page component
//!
//! A 404 page displayed when a route is not found, styled like the rest
//! of the terminal theme.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="404 | Grim-Repor" />

        <main class="page page-centered">
            <div class="not-found">
                <p class="not-found-code glitch-text">"404"</p>
                <h1 class="not-found-title">"> repository not found"</h1>
                <p class="not-found-tagline">
                    "The page you're looking for is dead, and we only resurrect repos."
                </p>
                <A href="/" attr:class="btn-outline">
                    <Icon name=icons::ARROW_LEFT class="icon-btn" />
                    "cd /"
                </A>
            </div>
        </main>
    }
}
