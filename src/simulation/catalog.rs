//! The canonical solar system: the sun plus eight planets
//!
//! Every body starts on the x-axis with a purely tangential velocity.
//! Earth and Mars start on the negative side and orbit counter-clockwise in
//! screen space; the rest start on the positive side.

use super::states::{Body, NVec2, Rgb};

const YELLOW: Rgb = [255, 255, 0];
const BLUE: Rgb = [0, 0, 255];
const RED: Rgb = [188, 39, 50];
const GRAY: Rgb = [71, 71, 71];
const WHITE: Rgb = [255, 255, 255];
const ORANGE: Rgb = [201, 100, 62];
const YELLOW_ORANGE: Rgb = [186, 154, 80];
const LIGHT_BLUE: Rgb = [102, 201, 204];
const DARK_LIGHT_BLUE: Rgb = [51, 143, 145];

/// Build the nine bodies, sun first; `au` is meters per AU
pub fn solar_system(au: f64) -> Vec<Body> {
    let planet = |name: &str, x_au: f64, vy: f64, m: f64, radius: f64, color: Rgb| {
        Body::new(name, NVec2::new(x_au * au, 0.0), m, radius, color).with_velocity(NVec2::new(0.0, vy))
    };

    vec![
        Body::new("sun", NVec2::zeros(), 1.98892e30, 20.0, YELLOW).as_anchor(),
        planet("mercury", 0.387, -47.4e3, 3.30e23, 4.0, GRAY),
        planet("venus", 0.723, -35.02e3, 4.8685e24, 10.0, WHITE),
        planet("earth", -1.0, 29.783e3, 5.9742e24, 10.0, BLUE),
        planet("mars", -1.524, 24.077e3, 6.39e23, 6.0, RED),
        planet("jupiter", 5.20238, -13.06e3, 1.8982e27, 8.0, ORANGE),
        planet("saturn", 9.58202, -9.69e3, 5.683e26, 7.0, YELLOW_ORANGE).with_ring(),
        planet("uranus", 19.19126, -6.8e3, 8.681e25, 10.0, LIGHT_BLUE),
        planet("neptune", 30.13, -2.43e3, 1.024e26, 10.0, DARK_LIGHT_BLUE),
    ]
}
