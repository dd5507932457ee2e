//! Footer component

use leptos::prelude::*;

const LINK_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Features", "How it Works", "Pricing", "API"]),
    ("Resources", ["Documentation", "Plant Guide", "Disease Library", "Blog"]),
    ("Company", ["About", "Contact", "Privacy", "Terms"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="about" class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <span class="brand-icon">"🌿"</span>
                            <span class="brand-name">"PlantGuard"</span>
                        </div>
                        <p class="text-muted">
                            "AI-powered plant disease detection for healthier gardens and greener futures."
                        </p>
                    </div>

                    {LINK_COLUMNS
                        .iter()
                        .map(|&(heading, links)| {
                            view! {
                                <div class="footer-column">
                                    <h4>{heading}</h4>
                                    <ul>
                                        {links
                                            .iter()
                                            .map(|&link| view! { <li><a href="#">{link}</a></li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-bottom">
                    <p class="text-muted">"© 2024 PlantGuard. All rights reserved."</p>
                    <p class="text-muted">"Made with 🌱 for plant lovers everywhere"</p>
                </div>
            </div>
        </footer>
    }
}
