//! The drawn map as data: one styled path per country.
//!
//! `MapScene::draw` is the expensive pass (project + build paths) and runs
//! on data load or resize. `recolor` and the pointer hooks only touch
//! styles, and each returns the indices whose style changed so the view
//! can patch exactly those elements.

use crate::colors::{Rgb, SequentialScale};
use crate::geo::CountryFeature;
use crate::path::svg_path;
use crate::projection::Mercator;
use crate::selection::Selection;

pub const LOW_COLOR: Rgb = Rgb::new(0xd6, 0x60, 0x4d);
pub const MID_COLOR: Rgb = Rgb::new(0xf7, 0xf7, 0xf7);
pub const HIGH_COLOR: Rgb = Rgb::new(0x43, 0x93, 0xc3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Rgb,
    pub stroke: Rgb,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub scale: SequentialScale,
    pub no_data: Rgb,
    pub border: Rgb,
    pub border_width: f64,
    pub highlight_fill: Rgb,
    pub highlight_stroke: Rgb,
    pub highlight_width: f64,
    pub hover_fill: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            scale: SequentialScale::new((0.0, 100.0), &[LOW_COLOR, MID_COLOR, HIGH_COLOR]),
            no_data: Rgb::from_hsl(210.0, 0.15, 0.40),
            border: Rgb::from_hsl(210.0, 0.20, 0.15),
            border_width: 0.5,
            highlight_fill: Rgb::from_hsl(45.0, 1.0, 0.50),
            highlight_stroke: Rgb::from_hsl(45.0, 1.0, 0.70),
            highlight_width: 1.5,
            hover_fill: Rgb::from_hsl(45.0, 1.0, 0.50),
        }
    }
}

impl Palette {
    pub fn data_style(&self, christian_percentage: Option<f64>) -> ShapeStyle {
        ShapeStyle {
            fill: christian_percentage.map_or(self.no_data, |pct| self.scale.color(pct)),
            stroke: self.border,
            stroke_width: self.border_width,
        }
    }

    pub fn selected_style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.highlight_fill,
            stroke: self.highlight_stroke,
            stroke_width: self.highlight_width,
        }
    }

    /// CSS background for the Low/High legend bar.
    pub fn legend_gradient(&self) -> String {
        format!("linear-gradient(to right, {LOW_COLOR}, {MID_COLOR}, {HIGH_COLOR})")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: String,
    pub path: String,
    /// Style implied by the data alone.
    pub base: ShapeStyle,
    /// Style currently applied to the element.
    pub style: ShapeStyle,
}

#[derive(Debug, Clone, Default)]
pub struct MapScene {
    palette: Palette,
    shapes: Vec<Shape>,
    size: (f64, f64),
    hovered: Option<usize>,
}

impl MapScene {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Full redraw: fit the projection to `width` x `height` and rebuild
    /// every shape with its data style. Hover is forgotten; selection is
    /// reapplied by a following `recolor`.
    pub fn draw(&mut self, features: &[CountryFeature], width: f64, height: f64) {
        self.size = (width, height);
        let projection = Mercator::fit_size(width, height, features);
        self.hovered = None;
        self.shapes = features
            .iter()
            .map(|feature| {
                let base = self.palette.data_style(feature.christian_percentage());
                Shape {
                    name: feature.name.clone(),
                    path: feature
                        .geometry
                        .as_ref()
                        .map(|g| svg_path(g, &projection))
                        .unwrap_or_default(),
                    base,
                    style: base,
                }
            })
            .collect();
    }

    fn target_style(&self, index: usize, selection: &Selection) -> Option<ShapeStyle> {
        let shape = self.shapes.get(index)?;
        if selection.is_selected(&shape.name) {
            return Some(self.palette.selected_style());
        }
        if self.hovered == Some(index) {
            return Some(ShapeStyle {
                fill: self.palette.hover_fill,
                ..shape.base
            });
        }
        Some(shape.base)
    }

    fn restyle(&mut self, index: usize, selection: &Selection, changed: &mut Vec<usize>) {
        let Some(target) = self.target_style(index, selection) else {
            return;
        };
        if let Some(shape) = self.shapes.get_mut(index)
            && shape.style != target
        {
            shape.style = target;
            changed.push(index);
        }
    }

    /// Bring every shape in line with `selection`. A hovered shape that
    /// loses the selection goes back to its data fill, not the hover fill.
    pub fn recolor(&mut self, selection: &Selection) -> Vec<usize> {
        if let Some(index) = self.hovered
            && let Some(shape) = self.shapes.get(index)
            && shape.style == self.palette.selected_style()
            && !selection.is_selected(&shape.name)
        {
            self.hovered = None;
        }
        let mut changed = Vec::new();
        for index in 0..self.shapes.len() {
            self.restyle(index, selection, &mut changed);
        }
        changed
    }

    pub fn pointer_enter(&mut self, index: usize, selection: &Selection) -> Vec<usize> {
        if index >= self.shapes.len() {
            return Vec::new();
        }
        let mut changed = Vec::new();
        if let Some(previous) = self.hovered.replace(index)
            && previous != index
        {
            self.restyle(previous, selection, &mut changed);
        }
        self.restyle(index, selection, &mut changed);
        changed
    }

    pub fn pointer_leave(&mut self, index: usize, selection: &Selection) -> Vec<usize> {
        if self.hovered != Some(index) {
            return Vec::new();
        }
        self.hovered = None;
        let mut changed = Vec::new();
        self.restyle(index, selection, &mut changed);
        changed
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn size(&self) -> (f64, f64) {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use geojson::Value;

    use super::{LOW_COLOR, MapScene, Palette};
    use crate::colors::Rgb;
    use crate::facts::CountryFacts;
    use crate::geo::CountryFeature;
    use crate::selection::Selection;

    fn country(name: &str, west: f64, pct: Option<f64>) -> CountryFeature {
        CountryFeature {
            id: None,
            name: name.to_string(),
            geometry: Some(Value::Polygon(vec![vec![
                vec![west, 0.0],
                vec![west + 10.0, 0.0],
                vec![west + 10.0, 10.0],
                vec![west, 10.0],
                vec![west, 0.0],
            ]])),
            facts: CountryFacts {
                christian_percentage: pct,
                ..CountryFacts::default()
            },
        }
    }

    fn drawn() -> MapScene {
        let mut scene = MapScene::new(Palette::default());
        scene.draw(
            &[
                country("Wonderland", 0.0, Some(50.0)),
                country("Erewhon", 20.0, None),
                country("Lowland", 40.0, Some(0.0)),
            ],
            800.0,
            600.0,
        );
        scene
    }

    fn fills(scene: &MapScene) -> Vec<Rgb> {
        scene.shapes().iter().map(|s| s.style.fill).collect()
    }

    #[test]
    fn null_percentage_gets_the_no_data_fill() {
        let scene = drawn();
        let palette = Palette::default();
        assert_eq!(scene.shapes()[1].style.fill, palette.no_data);
        assert_eq!(scene.shapes()[1].style.fill, Rgb::from_hsl(210.0, 0.15, 0.40));
        assert_eq!(scene.shapes()[2].style.fill, LOW_COLOR);
        assert_eq!(scene.shapes()[0].style.stroke_width, 0.5);
    }

    #[test]
    fn draw_builds_a_path_per_feature() {
        let scene = drawn();
        assert_eq!(scene.shapes().len(), 3);
        assert!(scene.shapes().iter().all(|s| s.path.starts_with('M')));
        assert_eq!(scene.shapes()[1].name, "Erewhon");
        assert_eq!(scene.size(), (800.0, 600.0));
    }

    #[test]
    fn selecting_highlights_only_the_selected_shape() {
        let mut scene = drawn();
        let before = fills(&scene);
        let selection = Selection::Idle.click_shape("Wonderland");

        assert_eq!(scene.recolor(&selection), vec![0]);
        assert_eq!(scene.shapes()[0].style, Palette::default().selected_style());
        assert_eq!(fills(&scene)[1..], before[1..]);
    }

    #[test]
    fn double_click_restores_the_data_color() {
        let mut scene = drawn();
        let original = scene.shapes()[0].style;

        let selection = Selection::Idle.click_shape("Wonderland");
        scene.recolor(&selection);
        let selection = selection.click_shape("Wonderland");

        assert_eq!(selection, Selection::Idle);
        assert_eq!(scene.recolor(&selection), vec![0]);
        assert_eq!(scene.shapes()[0].style, original);
    }

    #[test]
    fn switching_selection_touches_only_old_and_new() {
        let mut scene = drawn();
        let f = Selection::Idle.click_shape("Wonderland");
        scene.recolor(&f);

        let g = f.click_shape("Lowland");
        let changed = scene.recolor(&g);
        assert_eq!(changed, vec![0, 2]);
        assert_eq!(scene.shapes()[2].style, Palette::default().selected_style());
        assert_eq!(scene.shapes()[0].style, scene.shapes()[0].base);
    }

    #[test]
    fn redraw_then_recolor_keeps_the_highlight() {
        let mut scene = drawn();
        let selection = Selection::Idle.click_shape("Erewhon");
        scene.recolor(&selection);

        let features = [
            country("Wonderland", 0.0, Some(50.0)),
            country("Erewhon", 20.0, None),
            country("Lowland", 40.0, Some(0.0)),
        ];
        scene.draw(&features, 400.0, 300.0);
        assert_eq!(scene.recolor(&selection), vec![1]);
        assert_eq!(scene.shapes()[1].style, Palette::default().selected_style());
    }

    #[test]
    fn enter_then_leave_restores_resting_fill() {
        let mut scene = drawn();
        let resting = scene.shapes()[2].style;

        assert_eq!(scene.pointer_enter(2, &Selection::Idle), vec![2]);
        assert_eq!(scene.shapes()[2].style.fill, Palette::default().hover_fill);
        assert_eq!(scene.hovered(), Some(2));

        assert_eq!(scene.pointer_leave(2, &Selection::Idle), vec![2]);
        assert_eq!(scene.shapes()[2].style, resting);
        assert_eq!(scene.hovered(), None);
    }

    #[test]
    fn selected_shape_is_not_hover_swapped() {
        let mut scene = drawn();
        let selection = Selection::Idle.click_shape("Wonderland");
        scene.recolor(&selection);

        assert!(scene.pointer_enter(0, &selection).is_empty());
        assert!(scene.pointer_leave(0, &selection).is_empty());
        assert_eq!(scene.shapes()[0].style, Palette::default().selected_style());
    }

    #[test]
    fn deselecting_under_a_resting_pointer_restores_the_data_fill() {
        let mut scene = drawn();
        let selection = Selection::Idle.click_shape("Wonderland");
        scene.pointer_enter(0, &Selection::Idle);
        scene.recolor(&selection);

        let idle = selection.click_shape("Wonderland");
        assert_eq!(scene.recolor(&idle), vec![0]);
        assert_eq!(scene.shapes()[0].style, scene.shapes()[0].base);
        assert_eq!(scene.hovered(), None);

        // The pointer leaving afterwards changes nothing; re-entering hovers again.
        assert!(scene.pointer_leave(0, &idle).is_empty());
        assert_eq!(scene.pointer_enter(0, &idle), vec![0]);
        assert_eq!(scene.shapes()[0].style.fill, Palette::default().hover_fill);
    }

    #[test]
    fn legend_runs_low_to_high() {
        assert_eq!(
            Palette::default().legend_gradient(),
            "linear-gradient(to right, rgb(214, 96, 77), rgb(247, 247, 247), rgb(67, 147, 195))"
        );
    }
}
