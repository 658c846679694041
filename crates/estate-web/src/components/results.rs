//! Valuation results panel

use leptos::prelude::*;

use estate_core::{format_quantity, format_usd, DisplayState, Prediction};

use super::TrendChart;

#[component]
pub fn ResultsDisplay(#[prop(into)] state: Signal<DisplayState>) -> impl IntoView {
    move || match state.get() {
        DisplayState::NoPrediction => view! {
            <div class="card results results-empty">
                <div class="results-icon">"📊"</div>
                <h3>"No Prediction Yet"</h3>
                <p>"Fill in the property details form to get a price prediction for your property."</p>
            </div>
        }
        .into_any(),

        DisplayState::Pending { .. } => view! {
            <div class="card results results-pending">
                <div class="spinner"></div>
                <h3>"Processing Data"</h3>
                <p>"Our AI model is analyzing property details to generate a prediction..."</p>
            </div>
        }
        .into_any(),

        DisplayState::Ready(prediction) => view! { <ValuationCard prediction=prediction /> }.into_any(),
    }
}

#[component]
fn ValuationCard(prediction: Prediction) -> impl IntoView {
    let attrs = &prediction.attributes;
    let details = [
        ("Square Footage", format!("{} sq ft", attrs.square_footage)),
        ("Bedrooms", attrs.bedrooms.to_string()),
        ("Bathrooms", format_quantity(attrs.bathrooms)),
        ("Year Built", attrs.year_built.to_string()),
        ("Location", attrs.location.to_string()),
        ("Lot Size", format!("{} acres", format_quantity(attrs.lot_size))),
    ];

    view! {
        <div class="card results">
            <div class="card-header">
                <h2>"Property Valuation Results"</h2>
            </div>

            <div class="card-body">
                <div class="estimate">
                    <h3>"Estimated Value"</h3>
                    <div class="estimate-value">{format_usd(prediction.estimated_value)}</div>
                </div>

                <div class="details">
                    {details
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div>
                                    <span class="detail-label">{format!("{label}:")}</span>
                                    <p class="detail-value">{value}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="trend">
                    <h3>"Price Trend"</h3>
                    <TrendChart points=prediction.trend.clone() />
                </div>

                <p class="disclaimer">
                    "This prediction is based on our AI model analysis of property details, market trends, and comparable properties in the area. Actual selling prices may vary based on market conditions and unique property features."
                </p>
            </div>
        </div>
    }
}
