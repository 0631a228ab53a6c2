use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use missions_map_shared::MapScene;

use crate::viewport::ZoomTransform;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub(crate) const INDEX_ATTR: &str = "data-index";

fn create_svg_element(document: &Document, tag: &str) -> Result<Element, JsValue> {
    document.create_element_ns(Some(SVG_NS), tag)
}

fn clear_children(parent: &Element) {
    while let Some(child) = parent.first_child() {
        let _ = parent.remove_child(&child);
    }
}

/// The `<svg>` root and its single zoomable `<g>`, plus one `<path>` per
/// scene shape in scene order.
pub(crate) struct MapSurface {
    svg: Element,
    group: Element,
    paths: Vec<Element>,
}

impl MapSurface {
    pub fn mount(container: &Element) -> Result<Self, JsValue> {
        let document = container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container is detached"))?;
        let svg = create_svg_element(&document, "svg")?;
        svg.set_attribute(
            "style",
            "display: block; width: 100%; height: 100%; background: #1f2937;",
        )?;
        let group = create_svg_element(&document, "g")?;
        svg.append_child(&group)?;
        container.append_child(&svg)?;
        Ok(Self {
            svg,
            group,
            paths: Vec::new(),
        })
    }

    /// Replace every path with the scene's current shapes. The zoom
    /// transform goes back to identity.
    pub fn redraw(&mut self, scene: &MapScene) -> Result<(), JsValue> {
        clear_children(&self.group);
        self.paths.clear();

        let (width, height) = scene.size();
        self.svg.set_attribute("width", &width.to_string())?;
        self.svg.set_attribute("height", &height.to_string())?;
        self.set_transform(&ZoomTransform::default());

        let Some(document) = self.svg.owner_document() else {
            return Ok(());
        };
        for (index, shape) in scene.shapes().iter().enumerate() {
            let path = create_svg_element(&document, "path")?;
            path.set_attribute("d", &shape.path)?;
            path.set_attribute(INDEX_ATTR, &index.to_string())?;
            path.set_attribute("style", "cursor: pointer; transition: fill 0.2s ease-in-out;")?;
            self.group.append_child(&path)?;
            self.paths.push(path);
        }
        self.apply(scene, 0..scene.shapes().len());
        Ok(())
    }

    /// Push the scene styles of `indices` onto their elements.
    pub fn apply(&self, scene: &MapScene, indices: impl IntoIterator<Item = usize>) {
        for index in indices {
            let (Some(path), Some(shape)) = (self.paths.get(index), scene.shape(index)) else {
                continue;
            };
            let _ = path.set_attribute("fill", &shape.style.fill.css());
            let _ = path.set_attribute("stroke", &shape.style.stroke.css());
            let _ = path.set_attribute("stroke-width", &shape.style.stroke_width.to_string());
        }
    }

    pub fn set_transform(&self, transform: &ZoomTransform) {
        if transform.is_identity() {
            let _ = self.group.remove_attribute("transform");
        } else {
            let _ = self.group.set_attribute("transform", &transform.svg());
        }
    }
}

/// Shape index carried by an event target, if it is one of our paths.
pub(crate) fn shape_index(target: Option<web_sys::EventTarget>) -> Option<usize> {
    use wasm_bindgen::JsCast;

    target?
        .dyn_into::<Element>()
        .ok()?
        .get_attribute(INDEX_ATTR)?
        .parse()
        .ok()
}
