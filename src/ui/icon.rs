use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names for convenience
#[allow(dead_code)]
pub mod icons {
    pub const TERMINAL: &str = "terminal";
    pub const GIT_BRANCH: &str = "git-branch";
    pub const WRENCH: &str = "wrench";
    pub const SPARKLES: &str = "sparkles";
    pub const ZAP: &str = "zap";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
}
