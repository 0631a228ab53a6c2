use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from HSL with `h` in degrees and `s`/`l` in 0..1.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self::new(r, g, b)
    }

    pub fn css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Convert HSL to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s.abs() < f64::EPSILON {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Uniform cubic B-spline segment through four control values.
fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// B-spline through `values`, evaluated at `t` in 0..1. The curve passes
/// exactly through the first and last values; interior values act as
/// control points, which keeps the transition smooth.
fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len().saturating_sub(1);
    match n {
        0 => return values.first().copied().unwrap_or(0.0),
        _ if t.is_nan() => return values[0],
        _ => {}
    }
    let (t, i) = if t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, ((t * n as f64).floor() as usize).min(n - 1))
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i + 2 <= n { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Sequential color scale over a numeric domain, interpolating a list of
/// color stops with a per-channel RGB B-spline.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialScale {
    domain: (f64, f64),
    reds: Vec<f64>,
    greens: Vec<f64>,
    blues: Vec<f64>,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), stops: &[Rgb]) -> Self {
        Self {
            domain,
            reds: stops.iter().map(|c| c.r as f64).collect(),
            greens: stops.iter().map(|c| c.g as f64).collect(),
            blues: stops.iter().map(|c| c.b as f64).collect(),
        }
    }

    /// Color at `value`. Values outside the domain clamp to the end stops.
    pub fn color(&self, value: f64) -> Rgb {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let t = if span.abs() < f64::EPSILON {
            0.5
        } else {
            (value - d0) / span
        };
        Rgb::new(
            to_channel(basis_spline(&self.reds, t)),
            to_channel(basis_spline(&self.greens, t)),
            to_channel(basis_spline(&self.blues, t)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Rgb, SequentialScale, hsl_to_rgb};

    fn red_white_blue() -> SequentialScale {
        let stops = [
            Rgb::new(0xd6, 0x60, 0x4d),
            Rgb::new(0xf7, 0xf7, 0xf7),
            Rgb::new(0x43, 0x93, 0xc3),
        ];
        SequentialScale::new((0.0, 100.0), &stops)
    }

    fn distance_sq(a: Rgb, b: Rgb) -> u32 {
        let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2) as u32;
        d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b)
    }

    #[test]
    fn hsl_to_rgb_pure_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
    }

    #[test]
    fn hsl_to_rgb_gray_ignores_hue() {
        assert_eq!(hsl_to_rgb(210.0, 0.0, 0.5), (128, 128, 128));
    }

    #[test]
    fn display_is_css_rgb() {
        assert_eq!(Rgb::new(1, 22, 255).to_string(), "rgb(1, 22, 255)");
    }

    #[test]
    fn scale_hits_end_stops() {
        let scale = red_white_blue();
        assert_eq!(scale.color(0.0), Rgb::new(0xd6, 0x60, 0x4d));
        assert_eq!(scale.color(100.0), Rgb::new(0x43, 0x93, 0xc3));
    }

    #[test]
    fn scale_midpoint_is_nearest_the_mid_stop() {
        let scale = red_white_blue();
        let mid = scale.color(50.0);
        assert_eq!(mid, Rgb::new(212, 205, 210));

        let low = Rgb::new(0xd6, 0x60, 0x4d);
        let white = Rgb::new(0xf7, 0xf7, 0xf7);
        let high = Rgb::new(0x43, 0x93, 0xc3);
        assert!(distance_sq(mid, white) < distance_sq(mid, low));
        assert!(distance_sq(mid, white) < distance_sq(mid, high));
    }

    #[test]
    fn scale_clamps_out_of_domain_values() {
        let scale = red_white_blue();
        assert_eq!(scale.color(-20.0), scale.color(0.0));
        assert_eq!(scale.color(140.0), scale.color(100.0));
    }
}
