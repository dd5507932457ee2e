//! Header component

use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 3] = [
    ("How it Works", "#how-it-works"),
    ("Features", "#features"),
    ("About", "#about"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (is_menu_open, set_is_menu_open) = signal(false);

    view! {
        <header class="header">
            <div class="container header-inner">
                <div class="brand">
                    <span class="brand-icon">"🌿"</span>
                    <span class="brand-name">"PlantGuard"</span>
                </div>

                <nav class="nav">
                    {NAV_LINKS
                        .iter()
                        .map(|&(label, href)| view! { <a href=href>{label}</a> })
                        .collect_view()}
                </nav>

                <div class="header-actions">
                    <button class="btn btn-primary btn-small">"Get Started"</button>
                    <button
                        class="btn btn-ghost menu-toggle"
                        on:click=move |_| set_is_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <Show when=move || is_menu_open.get()>
                <div class="mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .map(|&(label, href)| {
                            view! {
                                <a href=href on:click=move |_| set_is_menu_open.set(false)>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn-primary">"Get Started"</button>
                </div>
            </Show>
        </header>
    }
}
