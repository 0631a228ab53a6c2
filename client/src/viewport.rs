use crate::config::{DRAG_THRESHOLD, MAX_ZOOM, MIN_ZOOM, ZOOM_SENSITIVITY};

const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;
/// Pixel equivalents of one wheel line and one wheel page.
const LINE_PIXELS: f64 = 25.0;
const PAGE_PIXELS: f64 = 500.0;

/// Pan/zoom applied to the drawn map group as a single CSS transform.
/// Screen = shape * scale + offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

impl ZoomTransform {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Zoom toward a focus point (container coordinates). Positive `delta`
    /// zooms out, matching wheel `deltaY`.
    pub fn zoom_at(&mut self, delta: f64, x: f64, y: f64) {
        let factor = (-delta * ZOOM_SENSITIVITY).exp();
        let new_scale = (self.scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_scale / self.scale;

        self.offset_x = x - (x - self.offset_x) * ratio;
        self.offset_y = y - (y - self.offset_y) * ratio;
        self.scale = new_scale;
    }

    /// Pan by screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// SVG `transform` attribute value.
    pub fn svg(&self) -> String {
        format!(
            "translate({},{}) scale({})",
            self.offset_x, self.offset_y, self.scale
        )
    }
}

/// Wheel `deltaY` normalized to pixels according to `deltaMode`.
pub fn wheel_pixels(delta_y: f64, delta_mode: u32) -> f64 {
    match delta_mode {
        DOM_DELTA_LINE => delta_y * LINE_PIXELS,
        DOM_DELTA_PAGE => delta_y * PAGE_PIXELS,
        _ => delta_y,
    }
}

/// A press released within the drag threshold on both axes is a click.
pub fn is_click(start: (f64, f64), end: (f64, f64)) -> bool {
    (end.0 - start.0).abs() < DRAG_THRESHOLD && (end.1 - start.1).abs() < DRAG_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::{ZoomTransform, is_click, wheel_pixels};
    use crate::config::{MAX_ZOOM, MIN_ZOOM};

    fn to_screen(t: &ZoomTransform, x: f64, y: f64) -> (f64, f64) {
        (x * t.scale + t.offset_x, y * t.scale + t.offset_y)
    }

    #[test]
    fn zoom_keeps_focus_point_fixed() {
        let mut t = ZoomTransform::default();
        t.pan(30.0, -12.0);
        let focus = (200.0, 150.0);
        let before = ((focus.0 - t.offset_x) / t.scale, (focus.1 - t.offset_y) / t.scale);

        t.zoom_at(-300.0, focus.0, focus.1);
        let (sx, sy) = to_screen(&t, before.0, before.1);
        assert!((sx - focus.0).abs() < 1e-9);
        assert!((sy - focus.1).abs() < 1e-9);
        assert!(t.scale > 1.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut t = ZoomTransform::default();
        t.zoom_at(100_000.0, 0.0, 0.0);
        assert_eq!(t.scale, MIN_ZOOM);
        t.zoom_at(-100_000.0, 0.0, 0.0);
        assert_eq!(t.scale, MAX_ZOOM);
    }

    #[test]
    fn identity_has_no_offset() {
        let mut t = ZoomTransform::default();
        assert!(t.is_identity());
        assert_eq!(t.svg(), "translate(0,0) scale(1)");
        t.pan(5.0, 5.0);
        assert!(!t.is_identity());
    }

    #[test]
    fn line_mode_wheel_notch_zooms_like_a_pixel_notch() {
        assert_eq!(wheel_pixels(-100.0, 0), -100.0);
        assert_eq!(wheel_pixels(-3.0, 1), -75.0);
        assert_eq!(wheel_pixels(1.0, 2), 500.0);

        let mut t = ZoomTransform::default();
        t.zoom_at(wheel_pixels(-3.0, 1), 0.0, 0.0);
        assert!(t.scale > 1.15, "scale {}", t.scale);

        let mut notches = 0;
        let mut t = ZoomTransform::default();
        while t.scale < 2.0 {
            t.zoom_at(wheel_pixels(-3.0, 1), 0.0, 0.0);
            notches += 1;
        }
        assert!(notches <= 5, "{notches} notches to reach 2x");
    }

    #[test]
    fn moving_five_pixels_is_a_drag() {
        assert!(is_click((100.0, 100.0), (100.0, 100.0)));
        assert!(is_click((100.0, 100.0), (104.9, 95.1)));
        assert!(!is_click((100.0, 100.0), (105.0, 100.0)));
        assert!(!is_click((100.0, 100.0), (100.0, 94.0)));
    }
}
