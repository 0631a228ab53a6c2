use std::f64::consts::{FRAC_PI_4, PI};

use crate::geo::{CountryFeature, for_each_position};

/// Latitude where Mercator `y` reaches `±π`, which makes the world square.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Spherical Mercator with a uniform scale and a screen-space translation.
/// Screen `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    pub scale: f64,
    pub translate: (f64, f64),
}

impl Default for Mercator {
    fn default() -> Self {
        Self {
            scale: 961.0 / (2.0 * PI),
            translate: (480.0, 250.0),
        }
    }
}

/// Unscaled Mercator in radians, `y` flipped to screen orientation.
fn raw(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    (lon.to_radians(), -(FRAC_PI_4 + lat / 2.0).tan().ln())
}

impl Mercator {
    /// Fit the features into a `width` x `height` box: the largest scale at
    /// which the projected bounds fit, centered on both axes.
    pub fn fit_size(width: f64, height: f64, features: &[CountryFeature]) -> Self {
        let mut bounds = Bounds::empty();
        for geometry in features.iter().filter_map(|f| f.geometry.as_ref()) {
            for_each_position(geometry, &mut |lon, lat| {
                let (x, y) = raw(lon, lat);
                bounds.extend(x, y);
            });
        }
        Self::fit_bounds(width, height, &bounds)
    }

    fn fit_bounds(width: f64, height: f64, bounds: &Bounds) -> Self {
        if bounds.is_empty() {
            return Self::default();
        }
        let (dx, dy) = (bounds.x1 - bounds.x0, bounds.y1 - bounds.y0);
        let k = match (dx > 0.0, dy > 0.0) {
            (true, true) => (width / dx).min(height / dy),
            (true, false) => width / dx,
            (false, true) => height / dy,
            (false, false) => return Self::default(),
        };
        Self {
            scale: k,
            translate: (
                (width - k * (bounds.x0 + bounds.x1)) / 2.0,
                (height - k * (bounds.y0 + bounds.y1)) / 2.0,
            ),
        }
    }

    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = raw(lon, lat);
        (
            self.scale * x + self.translate.0,
            self.scale * y + self.translate.1,
        )
    }
}

struct Bounds {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            x0: f64::INFINITY,
            y0: f64::INFINITY,
            x1: f64::NEG_INFINITY,
            y1: f64::NEG_INFINITY,
        }
    }

    fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }

    fn extend(&mut self, x: f64, y: f64) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x);
        self.y1 = self.y1.max(y);
    }
}
