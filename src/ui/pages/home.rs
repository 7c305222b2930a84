//! Home page component
//!
//! The marketing landing page for Grim-Repor featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with the install badge and headline
//! - Features section with three benefit cards
//! - Call-to-action section linking to the waitlist
//!
//! All content is fixed at render time; the page has no inputs and no
//! branching logic.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Landing page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        // SEO Meta Tags
        <SeoMeta />

        <main class="page">
            <div class="radial-glow" aria-hidden="true"></div>

            // Hero Section
            <section class="hero">
                <div class="hero-inner">
                    <div class="install-badge">"pip install grim-repor"</div>
                    <h1 class="hero-title">
                        "Your Code's"
                        <span class="hero-title-accent glitch-text">"Second Chance"</span>
                    </h1>
                    <p class="hero-tagline">
                        "> We resurrect research repositories by fixing broken Python dependencies. \
                         Our AI vigilante roams the internet, finding and fixing outdated dependencies \
                         so your code runs smoothly again."
                    </p>
                    <div class="hero-actions">
                        <A href="/waitlist" attr:class="btn-outline">
                            <Icon name=icons::GIT_BRANCH class="icon-btn" />
                            "Submit Repository"
                        </A>
                    </div>
                </div>
            </section>

            // Features Section
            <section class="features">
                <h2 class="features-title">
                    "> Bringing Your Code "
                    <span class="features-title-accent glitch-text">"Back to Life"</span>
                </h2>
                <div class="features-grid">
                    <FeatureCard
                        icon=icons::TERMINAL
                        title="Smart Scanning"
                        description="> Our AI vigilante automatically identifies broken or outdated Python dependencies in research repositories."
                    />
                    <FeatureCard
                        icon=icons::WRENCH
                        title="Auto-Fix Magic"
                        description="> Intelligent version resolution and compatibility fixes for requirements.txt, environment.yml, and setup.py."
                    />
                    <FeatureCard
                        icon=icons::SPARKLES
                        title="Research First"
                        description="> Specialized in keeping research code alive, ensuring your valuable work remains accessible and reproducible."
                    />
                </div>
            </section>

            // CTA Section
            <section class="cta">
                <div class="cta-panel">
                    <h2 class="cta-title">"Found a Dead Repository?"</h2>
                    <p class="cta-tagline">"Let our AI necromancer bring it back to life."</p>
                    <A href="/waitlist" attr:class="btn-primary btn-lg shadow-neon">
                        <Icon name=icons::ZAP class="icon-btn" />
                        "Resurrect Now"
                    </A>
                </div>
            </section>
        </main>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card-icon">
                <Icon name=icon class="w-8 h-8" />
            </div>
            <h3 class="feature-card-title">{title}</h3>
            <p class="feature-card-description">{description}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="Grim-Repor | Reviving Dead Repositories" />

        // Basic meta tags
        <Meta name="description" content="AI-powered tool that brings your broken dependencies back to life" />
        <Meta name="keywords" content="python dependencies, requirements.txt, dependency repair, research code, reproducibility" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Grim-Repor | Reviving Dead Repositories" />
        <Meta property="og:description" content="AI-powered tool that brings your broken dependencies back to life" />
    }
}
