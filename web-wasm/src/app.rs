//! Page container component

use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use plantguard_common::{Flow, UploadedImage, ViewState};

use crate::components::{
    analyzing::AnalyzingOverlay,
    features::FeaturesSection,
    footer::Footer,
    header::Header,
    hero::HeroSection,
    how_it_works::HowItWorks,
    results::ResultsSection,
    stats::StatsSection,
};

/// Simulated analysis time.
const ANALYSIS_DELAY_MS: u32 = 2_000;

/// Main application component. Owns the view-state flow; everything below it
/// is presentational.
#[component]
pub fn App() -> impl IntoView {
    let flow = RwSignal::new(Flow::new());

    // Accepted-image handler: enter Analyzing, reveal results after the delay.
    // The ticket keeps a timer that outlives a reset from flipping the view.
    let on_image = move |image: UploadedImage| {
        console::debug!("image accepted:", image.file_name.clone());
        let ticket = flow.write().begin_analysis(image);
        Timeout::new(ANALYSIS_DELAY_MS, move || {
            let applied = flow
                .try_update(|f| f.finish_analysis(ticket))
                .unwrap_or(false);
            if !applied {
                console::debug!("stale analysis timer ignored");
            }
        })
        .forget();
    };

    // Reset handler
    let on_reset = move |_: ()| {
        flow.update(|f| f.reset());
    };

    let uploaded_image = Signal::derive(move || flow.with(|f| f.image().cloned()));
    let showing_results =
        move || flow.with(|f| f.view() == ViewState::ShowingResults && f.image().is_some());
    let is_analyzing = move || flow.with(|f| f.view() == ViewState::Analyzing);

    view! {
        <div class="page">
            <Header />

            <Show
                when=showing_results
                fallback=move || view! {
                    <HeroSection on_image=on_image />

                    <Show when=is_analyzing>
                        <AnalyzingOverlay />
                    </Show>

                    <HowItWorks />
                    <StatsSection />
                    <FeaturesSection />
                }
            >
                <ResultsSection image=uploaded_image on_reset=on_reset />
            </Show>

            <Footer />
        </div>
    }
}
