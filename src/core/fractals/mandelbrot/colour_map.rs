use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Score at which the red channel saturates.
const SATURATION_SCORE: f64 = 6.0;

/// Maps an escape score to a warm ramp: red at full intensity, green at half,
/// blue at a third. A score of `0` is black.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmberColourMap;

impl ColourMap<f64> for EmberColourMap {
    fn map(&self, score: f64) -> Colour {
        let intensity = (score / SATURATION_SCORE * 255.0).clamp(0.0, 255.0);

        Colour {
            r: intensity as u8,
            g: (intensity / 2.0) as u8,
            b: (intensity / 3.0) as u8,
        }
    }

    fn display_name(&self) -> &str {
        "Ember"
    }
}
