use leptos::prelude::*;

const QUICK_LINKS: [&str; 4] = ["Home", "About Us", "How It Works", "Contact"];
const RESOURCES: [&str; 4] = ["Market Reports", "Real Estate Blog", "API Documentation", "Help Center"];
const SOCIAL: [&str; 3] = ["Facebook", "Twitter", "GitHub"];

fn link_list(labels: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="footer-links">
            {labels
                .iter()
                .map(|label| view! { <li><a href="#">{*label}</a></li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <h3>"Smart Estate Forecaster"</h3>
                    <p>"Accurate property valuations powered by cutting-edge artificial intelligence."</p>
                    <div class="social">
                        {SOCIAL
                            .iter()
                            .map(|name| view! { <a href="#" class="social-link">{*name}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div>
                    <h4>"Quick Links"</h4>
                    {link_list(&QUICK_LINKS)}
                </div>

                <div>
                    <h4>"Resources"</h4>
                    {link_list(&RESOURCES)}
                </div>

                <div>
                    <h4>"Subscribe"</h4>
                    <p>"Get the latest updates and news"</p>
                    // Newsletter signup is decorative
                    <form class="subscribe" on:submit=|ev| ev.prevent_default()>
                        <input type="email" placeholder="Your email" />
                        <button type="submit" class="btn btn-primary">"Subscribe"</button>
                    </form>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{format!("© {year} Smart Estate Forecaster. All rights reserved.")}</p>
                <div>
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
