use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::Navbar;
use crate::ui::pages::{HomePage, NotFoundPage, WaitlistPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-black">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/grim-repor.css"/>

        // default title, overridden per page
        <Title text="Grim-Repor | Reviving Dead Repositories"/>

        <Router>
            // Global chrome wraps every route: terminal-green theme, grid
            // backdrop, scanline overlay and the fixed navbar
            <div class="site-chrome">
                <div class="grid-backdrop" aria-hidden="true"></div>
                <div class="scanline" aria-hidden="true"></div>
                <Navbar />
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/waitlist") view=WaitlistPage />
                </Routes>
            </div>
        </Router>
    }
}
