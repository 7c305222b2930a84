//! Waitlist page component
//!
//! The email-capture form and the only dynamic behavior on the site. The
//! submission draft is owned by this page's reactive scope and driven
//! through the explicit transitions in [`crate::core::WaitlistDraft`]:
//! every keystroke updates the typed value, submit validates it locally
//! and flips the message state. Nothing is sent over the network.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::WaitlistDraft;
use crate::ui::common::{ErrorMessage, SuccessMessage};
use crate::ui::icon::{Icon, icons};

/// Waitlist email-capture page
#[component]
pub fn WaitlistPage() -> impl IntoView {
    // The draft never leaves the browser; it lives and dies with this page
    let draft = RwSignal::new(WaitlistDraft::new());

    // One message slot, split by submit outcome for distinct styling
    let success_message = Signal::derive(move || {
        draft.with(|d| d.submitted.then(|| d.message.clone()).flatten())
    });
    let error_message = Signal::derive(move || {
        draft.with(|d| (!d.submitted).then(|| d.message.clone()).flatten())
    });

    // Submit transition; runs synchronously to completion
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        draft.update(|d| {
            d.submit();
        });
    };

    view! {
        <Title text="Join the Waitlist | Grim-Repor" />

        <main class="page page-centered">
            <div class="radial-glow" aria-hidden="true"></div>

            <div class="waitlist-panel">
                <div class="waitlist-card">
                    <h1 class="waitlist-title">
                        "Join the "
                        <span class="waitlist-title-accent glitch-text">"Resurrection"</span>
                    </h1>
                    <p class="waitlist-tagline">
                        "> Be the first to breathe new life into dead repos"
                    </p>

                    <form on:submit=on_submit>
                        <div class="form-field">
                            <label for="email" class="form-label">
                                "> Enter your email:"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                class="form-input"
                                placeholder="developer@example.com"
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.set_email(event_target_value(&ev)));
                                }
                            />
                        </div>

                        <SuccessMessage message=success_message />
                        <ErrorMessage error=error_message />

                        <button type="submit" class="btn-primary btn-lg btn-block shadow-neon">
                            <Icon name=icons::TERMINAL class="icon-btn" />
                            "./join-waitlist"
                        </button>
                    </form>
                </div>

                // Ghost link back to the landing page
                <A href="/" attr:class="btn-ghost back-link">
                    <Icon name=icons::ARROW_LEFT class="icon-text" />
                    "cd .."
                </A>
            </div>
        </main>
    }
}
