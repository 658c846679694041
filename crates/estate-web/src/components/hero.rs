//! Landing hero with address search and headline stats

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Marketing figures shown under the search box
const STATS: [(&str, &str); 3] = [
    ("93%", "Accuracy Rate"),
    ("10k+", "Properties Analyzed"),
    ("50+", "Data Points Used"),
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let (address, set_address) = signal(String::new());

    // The search box does not look anything up; it just takes the visitor to the form
    let search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("property-form"));
        if let Some(form) = form {
            form.scroll_into_view();
        }
    };

    view! {
        <header class="hero">
            <div class="container hero-content">
                <h1>"Smart Estate Forecaster"</h1>
                <p class="tagline">
                    "Discover the true value of any property with our advanced AI-powered price prediction model"
                </p>

                <form class="hero-search" on:submit=search>
                    <input
                        type="text"
                        placeholder="Enter property address..."
                        prop:value=move || address.get()
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Search"</button>
                </form>

                <div class="hero-stats">
                    {STATS
                        .iter()
                        .map(|(figure, caption)| {
                            view! {
                                <div class="hero-stat">
                                    <div class="hero-stat-figure">{*figure}</div>
                                    <div class="hero-stat-caption">{*caption}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </header>
    }
}
