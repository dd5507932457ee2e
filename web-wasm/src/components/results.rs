//! Diagnosis results section

use leptos::prelude::*;
use plantguard_common::{AnalysisResult, UploadedImage};

const QUICK_STATS: [(&str, &str, &str); 4] = [
    ("💧", "Humidity", "Moderate"),
    ("☀️", "Light", "Full Sun"),
    ("🌡", "Temp", "18-24°C"),
    ("🌿", "Type", "Vegetable"),
];

/// Renders the canned diagnosis next to the uploaded photo. Everything here is
/// static apart from the image itself.
#[component]
pub fn ResultsSection<F>(image: Signal<Option<UploadedImage>>, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let analysis = AnalysisResult::early_blight();
    let severity = analysis.severity;

    view! {
        <section class="results">
            <div class="container">
                <div class="results-header">
                    <div>
                        <h2>"Analysis Results"</h2>
                        <p class="text-muted">"AI-powered diagnosis complete"</p>
                    </div>
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        "Analyze Another Plant"
                    </button>
                </div>

                <div class="results-grid">
                    <div class="results-side">
                        <div class="analyzed-photo">
                            {move || {
                                image
                                    .get()
                                    .map(|img| view! { <img src=img.data_url alt=img.file_name /> })
                            }}
                        </div>

                        <div class="quick-stats">
                            {QUICK_STATS
                                .iter()
                                .map(|&(icon, label, value)| {
                                    view! {
                                        <div class="stat-card">
                                            <span class="stat-icon">{icon}</span>
                                            <p class="text-muted">{label}</p>
                                            <p class="stat-value">{value}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="results-main">
                        <div class="card disease-card">
                            <div class="disease-card-top">
                                <div>
                                    <p class="text-muted">"Identified Plant"</p>
                                    <h3>{analysis.plant_name.clone()}</h3>
                                </div>
                                <span class=format!("severity-pill {}", severity.as_str())>
                                    {severity.label()}
                                </span>
                            </div>

                            <div class="confidence">
                                <div class="confidence-row">
                                    <p class="disease-name">{analysis.disease.clone()}</p>
                                    <span class="text-muted">
                                        {format!("{}% confidence", analysis.confidence)}
                                    </span>
                                </div>
                                <div class="confidence-bar">
                                    <div
                                        class="confidence-fill"
                                        style=format!("width: {}%", analysis.confidence)
                                    ></div>
                                </div>
                            </div>

                            <p class="text-muted">{analysis.description.clone()}</p>
                        </div>

                        <div class="card">
                            <h4>"ℹ️ Symptoms"</h4>
                            <ul class="symptom-list">
                                {analysis
                                    .symptoms
                                    .iter()
                                    .map(|symptom| view! { <li>{symptom.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="card treatment-card">
                            <h4>"✅ Recommended Treatment"</h4>
                            <ol class="treatment-list">
                                {analysis
                                    .treatments
                                    .iter()
                                    .enumerate()
                                    .map(|(i, treatment)| {
                                        view! {
                                            <li>
                                                <span class="treatment-step">{i + 1}</span>
                                                {treatment.clone()}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ol>
                        </div>

                        <div class="card">
                            <h4>"🌿 Prevention Tips"</h4>
                            <div class="prevention-grid">
                                {analysis
                                    .prevention
                                    .iter()
                                    .map(|tip| view! { <div class="prevention-tip">{tip.clone()}</div> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
