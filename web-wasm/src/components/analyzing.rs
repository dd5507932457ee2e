//! Analysis overlay component

use leptos::prelude::*;

/// Full-screen overlay shown while the simulated analysis runs.
#[component]
pub fn AnalyzingOverlay() -> impl IntoView {
    view! {
        <div class="analyzing-overlay">
            <div class="analyzing-box">
                <div class="analyzing-pulse"></div>
                <p class="analyzing-title">"Analyzing your plant..."</p>
                <p class="text-muted">"This may take a moment"</p>
            </div>
        </div>
    }
}
