use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🧠",
        title: "Advanced AI Model",
        description: "Our proprietary machine learning model analyzes over 50 data points to deliver highly accurate property valuations",
    },
    Feature {
        icon: "📊",
        title: "Real-Time Data",
        description: "Constantly updated with the latest market trends and property sales to ensure up-to-date predictions",
    },
    Feature {
        icon: "📍",
        title: "Location Intelligence",
        description: "Factors in neighborhood quality, school districts, amenities, and other location-specific variables",
    },
    Feature {
        icon: "📈",
        title: "Comprehensive Analysis",
        description: "Takes into account property features, market conditions, economic indicators, and seasonal trends",
    },
];

const DATA_SCIENCE_POINTS: [&str; 4] = [
    "Historical sales data analysis",
    "Comparable property matching",
    "Neighborhood trend identification",
    "Market fluctuation adjustments",
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="section-intro">
                    <h2>"How Our AI Works"</h2>
                    <p>
                        "Smart Estate Forecaster uses cutting-edge artificial intelligence to predict property values with up to 93% accuracy."
                    </p>
                </div>

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card feature">
                                    <div class="feature-icon">{feature.icon}</div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="data-science">
                    <img
                        src="https://images.unsplash.com/photo-1552960394-c81add8de6b8?auto=format&fit=crop&q=80&w=500&ixlib=rb-4.0.3"
                        alt="Data analysis"
                    />
                    <div>
                        <h3>"Powered by Data Science"</h3>
                        <p>
                            "Our model leverages millions of property transactions, public records, and market data points to provide accurate predictions. By continuously learning from new data, our AI improves over time."
                        </p>
                        <ul class="checklist">
                            {DATA_SCIENCE_POINTS
                                .iter()
                                .map(|item| view! { <li><span class="check">"✓"</span>{*item}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
