//! Home Page

use leptos::prelude::*;

use estate_core::{Forecaster, PredictionBoard, PropertyAttributes, DEFAULT_PREDICTION_DELAY};

use crate::components::{FeaturesSection, Footer, HeroSection, PropertyForm, ResultsDisplay};
use crate::noise::BrowserNoise;

#[component]
pub fn HomePage() -> impl IntoView {
    let forecaster = Forecaster::for_current_year();
    let board = RwSignal::new(PredictionBoard::new());

    // Each submission restarts the wait; a timer from an earlier submission
    // still fires, but the board only accepts the newest ticket.
    let on_submit = Callback::new(move |attributes: PropertyAttributes| {
        let Some(ticket) = board.try_update(|b| b.submit(attributes.clone())) else {
            return;
        };

        set_timeout(
            move || {
                let prediction = forecaster.predict(attributes, &mut BrowserNoise);
                if board.try_update(|b| b.settle(ticket, prediction)) == Some(false) {
                    tracing::debug!(ticket = ticket.generation(), "Ignored superseded prediction");
                }
            },
            DEFAULT_PREDICTION_DELAY,
        );
    });

    let loading = Signal::derive(move || board.with(PredictionBoard::is_pending));
    let state = Signal::derive(move || board.with(|b| b.state().clone()));

    view! {
        <div class="home">
            <HeroSection />

            <div class="container workspace">
                <div class="column">
                    <PropertyForm
                        on_submit=on_submit
                        loading=loading
                        current_year=forecaster.current_year
                    />
                </div>
                <div class="column">
                    <ResultsDisplay state=state />
                </div>
            </div>

            <FeaturesSection />
            <Footer year=forecaster.current_year />
        </div>
    }
}

