//! How-it-works section

use leptos::prelude::*;

const STEPS: [(&str, &str, &str, &str); 4] = [
    (
        "📷",
        "01",
        "Capture",
        "Take a clear photo of the affected area of your plant. Good lighting helps improve accuracy.",
    ),
    (
        "🔍",
        "02",
        "Analyze",
        "Our AI instantly processes your image, comparing it against thousands of plant disease patterns.",
    ),
    (
        "📋",
        "03",
        "Diagnose",
        "Receive a detailed diagnosis with disease identification, severity level, and confidence score.",
    ),
    (
        "✨",
        "04",
        "Treat",
        "Follow our personalized treatment plan to nurse your plant back to health.",
    ),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-heading">
                    <h2>"How It "<span class="accent">"Works"</span></h2>
                    <p class="text-muted">"Get your plant diagnosed in four simple steps"</p>
                </div>

                <div class="steps-grid">
                    {STEPS
                        .iter()
                        .map(|&(icon, number, title, description)| {
                            view! {
                                <div class="step-card">
                                    <div class="step-icon">
                                        {icon}
                                        <span class="step-number">{number}</span>
                                    </div>
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
