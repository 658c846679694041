//! UI Components

mod chart;
mod features;
mod footer;
mod hero;
mod property_form;
mod results;

pub use chart::TrendChart;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use property_form::PropertyForm;
pub use results::ResultsDisplay;
