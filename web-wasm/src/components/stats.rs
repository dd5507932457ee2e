//! Stats band

use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("50+", "Diseases Detected"),
    ("94%", "Accuracy Rate"),
    ("100K+", "Plants Analyzed"),
    ("24/7", "Available"),
];

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container stats-grid">
                {STATS
                    .iter()
                    .map(|&(value, label)| {
                        view! {
                            <div class="stat">
                                <p class="stat-number">{value}</p>
                                <p class="stat-label">{label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
