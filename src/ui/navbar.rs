//! Navigation bar component
//!
//! Fixed, translucent header shown on every route: a terminal-prompt brand
//! mark linking home and a single call-to-action button linking to the
//! waitlist. Pure navigation, no inputs and no other side effects.

use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed site-wide navigation bar
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                // Brand mark: terminal prompt with a blinking cursor
                <A href="/" attr:class="navbar-brand">
                    <span class="glitch-text">
                        "grim-repor:$"
                        <span class="cursor-blink">"_"</span>
                    </span>
                </A>

                // Call to action
                <A href="/waitlist" attr:class="btn-primary shadow-neon">
                    "./fix-my-repo"
                </A>
            </div>
        </nav>
    }
}
