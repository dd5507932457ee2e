//! Feature cards section

use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "📷",
        "Instant Photo Analysis",
        "Simply snap a photo of your plant and get results in seconds. No technical knowledge required.",
    ),
    (
        "⚡",
        "AI-Powered Detection",
        "Our advanced machine learning models can identify over 50 common plant diseases with high accuracy.",
    ),
    (
        "📖",
        "Treatment Guides",
        "Receive detailed, step-by-step treatment recommendations tailored to your specific plant condition.",
    ),
    (
        "🛡️",
        "Prevention Tips",
        "Learn how to prevent future outbreaks and keep your garden healthy year-round.",
    ),
    (
        "🌿",
        "Plant Care Library",
        "Access our comprehensive database of plant care guides, watering schedules, and growing tips.",
    ),
    (
        "📊",
        "Health Tracking",
        "Monitor your plant's health over time and track improvements after treatment.",
    ),
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-heading">
                    <span class="section-badge">"🌿 Features"</span>
                    <h2>
                        "Everything You Need to "
                        <span class="accent">"Protect"</span>
                        " Your Plants"
                    </h2>
                    <p class="text-muted">
                        "Our comprehensive toolkit helps you identify, treat, and prevent plant "
                        "diseases with professional-grade accuracy."
                    </p>
                </div>

                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, description)| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p class="text-muted">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
