//! Browser noise source

use estate_core::NoiseSource;

/// `Math.random()`, uniform in [0, 1)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNoise;

impl NoiseSource for BrowserNoise {
    fn sample(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
