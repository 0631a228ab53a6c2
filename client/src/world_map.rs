use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, PointerEvent, TouchEvent, WheelEvent};

use missions_map_shared::{CountryFeature, MapScene, Palette, QuickFacts};

use crate::app::{FactStore, Selected};
use crate::atlas::{cancel_atlas_load, load_atlas};
use crate::country_card::CountryCard;
use crate::svg::{MapSurface, shape_index};
use crate::tooltip::{HoveredCountry, MapTooltip, PointerPosition};
use crate::viewport::{ZoomTransform, is_click, wheel_pixels};

struct ResizeBinding {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

thread_local! {
    static RESIZE_BINDING: RefCell<Option<ResizeBinding>> = const { RefCell::new(None) };
}

fn disconnect_resize_observer() {
    RESIZE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.observer.disconnect();
        }
    });
}

/// Watch `target`'s content box. Only changed boxes reach `size`.
fn observe_resize(target: &web_sys::Element, size: RwSignal<(f64, f64)>) {
    disconnect_resize_observer();

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let Ok(entry) = entries.get(0).dyn_into::<web_sys::ResizeObserverEntry>() else {
            return;
        };
        let rect = entry.content_rect();
        let next = (rect.width(), rect.height());
        if size.get_untracked() != next {
            size.set(next);
        }
    });
    let Ok(observer) = web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    observer.observe(target);
    RESIZE_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(ResizeBinding {
            observer,
            _callback: callback,
        });
    });
}

/// Box to redraw at, if any: nothing is drawn before the data arrives or
/// while the container has no area.
fn redraw_size(size: (f64, f64), has_data: bool) -> Option<(f64, f64)> {
    (has_data && size.0 > 0.0 && size.1 > 0.0).then_some(size)
}

/// Position of a client-space point relative to `el`.
fn local_point(el: &web_sys::Element, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    (client_x - rect.left(), client_y - rect.top())
}

fn touch_span(e: &TouchEvent) -> Option<(f64, (f64, f64))> {
    let touches = e.touches();
    if touches.length() != 2 {
        return None;
    }
    let (t0, t1) = (touches.get(0)?, touches.get(1)?);
    let dx = (t1.client_x() - t0.client_x()) as f64;
    let dy = (t1.client_y() - t0.client_y()) as f64;
    let mid = (
        (t0.client_x() + t1.client_x()) as f64 / 2.0,
        (t0.client_y() + t1.client_y()) as f64 / 2.0,
    );
    Some(((dx * dx + dy * dy).sqrt(), mid))
}

/// Choropleth world map: loads the atlas, draws one SVG path per country,
/// and handles hover, selection and pan/zoom.
#[component]
pub fn WorldMap(on_view_profile: Callback<CountryFeature>) -> impl IntoView {
    let Selected(selected) = expect_context();
    let FactStore(facts) = expect_context();

    let countries: RwSignal<Option<Vec<CountryFeature>>> = RwSignal::new(None);
    let size: RwSignal<(f64, f64)> = RwSignal::new((0.0, 0.0));
    let hovered: RwSignal<Option<QuickFacts>> = RwSignal::new(None);
    let pointer: RwSignal<(f64, f64)> = RwSignal::new((0.0, 0.0));
    provide_context(HoveredCountry(hovered));
    provide_context(PointerPosition(pointer));

    let container_ref = NodeRef::<leptos::html::Div>::new();

    let scene = Rc::new(RefCell::new(MapScene::new(Palette::default())));
    let surface: Rc<RefCell<Option<MapSurface>>> = Rc::new(RefCell::new(None));
    let transform = Rc::new(Cell::new(ZoomTransform::default()));

    // Drag / pinch state
    let pressed = Rc::new(Cell::new(false));
    let press_start = Rc::new(Cell::new((0.0f64, 0.0f64)));
    let last_pointer = Rc::new(Cell::new((0.0f64, 0.0f64)));
    let pinch_dist = Rc::new(Cell::new(0.0f64));

    load_atlas(countries, facts);
    on_cleanup(|| {
        cancel_atlas_load();
        disconnect_resize_observer();
    });

    Effect::new(move || {
        if let Some(el) = container_ref.get() {
            observe_resize(el.as_ref(), size);
        }
    });

    // Full redraw on data or size change, then reapply the selection.
    let scene_draw = scene.clone();
    let surface_draw = surface.clone();
    let transform_draw = transform.clone();
    Effect::new(move || {
        let box_size = size.get();
        let Some(container) = container_ref.get() else {
            return;
        };
        countries.with(|countries| {
            let Some((width, height)) = redraw_size(box_size, countries.is_some()) else {
                return;
            };
            let Some(countries) = countries else {
                return;
            };

            let mut scene = scene_draw.borrow_mut();
            scene.draw(countries, width, height);
            scene.recolor(&selected.get_untracked());
            transform_draw.set(ZoomTransform::default());
            hovered.set(None);

            let mut surface = surface_draw.borrow_mut();
            if surface.is_none() {
                match MapSurface::mount(container.as_ref()) {
                    Ok(mounted) => *surface = Some(mounted),
                    Err(e) => {
                        web_sys::console::warn_1(&e);
                        return;
                    }
                }
            }
            if let Some(surface) = surface.as_mut()
                && let Err(e) = surface.redraw(&scene)
            {
                web_sys::console::warn_1(&e);
            }
        });
    });

    // Selection changes only restyle.
    let scene_recolor = scene.clone();
    let surface_recolor = surface.clone();
    Effect::new(move || {
        let selection = selected.get();
        let mut scene = scene_recolor.borrow_mut();
        let changed = scene.recolor(&selection);
        if let Some(surface) = surface_recolor.borrow().as_ref() {
            surface.apply(&scene, changed);
        }
    });

    // --- Input handlers ---

    let on_pointer_over = {
        let scene = scene.clone();
        let surface = surface.clone();
        move |e: PointerEvent| {
            let Some(index) = shape_index(e.target()) else {
                return;
            };
            let mut scene = scene.borrow_mut();
            let changed = scene.pointer_enter(index, &selected.get_untracked());
            if let Some(surface) = surface.borrow().as_ref() {
                surface.apply(&scene, changed);
            }
            let facts = countries.with_untracked(|countries| {
                countries
                    .as_ref()
                    .and_then(|countries| countries.get(index))
                    .map(CountryFeature::quick_facts)
            });
            pointer.set((e.client_x() as f64, e.client_y() as f64));
            hovered.set(facts);
        }
    };

    let on_pointer_out = {
        let scene = scene.clone();
        let surface = surface.clone();
        move |e: PointerEvent| {
            let Some(index) = shape_index(e.target()) else {
                return;
            };
            let mut scene = scene.borrow_mut();
            let changed = scene.pointer_leave(index, &selected.get_untracked());
            if let Some(surface) = surface.borrow().as_ref() {
                surface.apply(&scene, changed);
            }
            if scene.hovered().is_none() {
                hovered.set(None);
            }
        }
    };

    let on_pointer_down = {
        let pressed = pressed.clone();
        let press_start = press_start.clone();
        let last_pointer = last_pointer.clone();
        move |e: PointerEvent| {
            if !e.is_primary() {
                return;
            }
            let at = (e.client_x() as f64, e.client_y() as f64);
            pressed.set(true);
            press_start.set(at);
            last_pointer.set(at);
            if let Some(el) = container_ref.get_untracked() {
                web_sys::HtmlElement::style(&el).set_property("cursor", "grabbing").ok();
            }
        }
    };

    let on_pointer_move = {
        let pressed = pressed.clone();
        let last_pointer = last_pointer.clone();
        let pinch_dist = pinch_dist.clone();
        let surface = surface.clone();
        let transform = transform.clone();
        move |e: PointerEvent| {
            let at = (e.client_x() as f64, e.client_y() as f64);
            if pressed.get() && e.is_primary() && pinch_dist.get() <= 0.0 {
                let (lx, ly) = last_pointer.get();
                last_pointer.set(at);
                let mut t = transform.get();
                t.pan(at.0 - lx, at.1 - ly);
                transform.set(t);
                if let Some(surface) = surface.borrow().as_ref() {
                    surface.set_transform(&t);
                }
            }
            if hovered.get_untracked().is_some() {
                pointer.set(at);
            }
        }
    };

    let end_press = {
        let pressed = pressed.clone();
        move || {
            pressed.set(false);
            if let Some(el) = container_ref.get_untracked() {
                web_sys::HtmlElement::style(&el).set_property("cursor", "grab").ok();
            }
        }
    };
    let on_pointer_up = {
        let end_press = end_press.clone();
        move |_: PointerEvent| end_press()
    };
    let on_pointer_leave = move |_: PointerEvent| end_press();

    let on_click = {
        let scene = scene.clone();
        let press_start = press_start.clone();
        move |e: MouseEvent| {
            if !is_click(press_start.get(), (e.client_x() as f64, e.client_y() as f64)) {
                return;
            }
            let name = shape_index(e.target())
                .and_then(|index| scene.borrow().shape(index).map(|shape| shape.name.clone()));
            match name {
                Some(name) => selected.update(|s| *s = s.click_shape(&name)),
                None => {
                    if selected.with_untracked(|s| s.selected().is_some()) {
                        selected.update(|s| *s = s.click_background());
                    }
                }
            }
        }
    };

    let on_wheel = {
        let surface = surface.clone();
        let transform = transform.clone();
        move |e: WheelEvent| {
            e.prevent_default();
            let Some(el) = container_ref.get_untracked() else {
                return;
            };
            let (x, y) = local_point(el.as_ref(), e.client_x() as f64, e.client_y() as f64);
            let mut t = transform.get();
            t.zoom_at(wheel_pixels(e.delta_y(), e.delta_mode()), x, y);
            transform.set(t);
            if let Some(surface) = surface.borrow().as_ref() {
                surface.set_transform(&t);
            }
        }
    };

    let on_touch_start = {
        let pinch_dist = pinch_dist.clone();
        move |e: TouchEvent| {
            if let Some((dist, _)) = touch_span(&e) {
                e.prevent_default();
                pinch_dist.set(dist);
            }
        }
    };

    let on_touch_move = {
        let pinch_dist = pinch_dist.clone();
        let surface = surface.clone();
        let transform = transform.clone();
        move |e: TouchEvent| {
            let Some((new_dist, (mid_x, mid_y))) = touch_span(&e) else {
                return;
            };
            e.prevent_default();
            let old_dist = pinch_dist.get();
            if old_dist > 0.0
                && let Some(el) = container_ref.get_untracked()
            {
                let (x, y) = local_point(el.as_ref(), mid_x, mid_y);
                let delta = -(new_dist - old_dist) * 2.0;
                let mut t = transform.get();
                t.zoom_at(delta, x, y);
                transform.set(t);
                if let Some(surface) = surface.borrow().as_ref() {
                    surface.set_transform(&t);
                }
            }
            pinch_dist.set(new_dist);
        }
    };

    let on_touch_end = {
        let pinch_dist = pinch_dist.clone();
        move |e: TouchEvent| {
            if e.touches().length() < 2 {
                pinch_dist.set(0.0);
            }
        }
    };

    view! {
        <div style="position: relative; width: 100%; height: 100%; overflow: hidden;">
            <div
                node_ref=container_ref
                style="width: 100%; height: 100%; cursor: grab; touch-action: none;"
                on:pointerover=on_pointer_over
                on:pointerout=on_pointer_out
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:click=on_click
                on:wheel=on_wheel
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
            />
            <MapTooltip />
            <CountryCard countries=countries on_view_profile=on_view_profile />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::redraw_size;

    #[test]
    fn resize_before_data_draws_nothing() {
        assert_eq!(redraw_size((800.0, 600.0), false), None);
        assert_eq!(redraw_size((1024.0, 700.0), false), None);
    }

    #[test]
    fn data_arrival_draws_at_the_latest_size() {
        let resizes = [(800.0, 600.0), (1024.0, 700.0)];
        let mut draws: Vec<(f64, f64)> = resizes
            .iter()
            .filter_map(|&size| redraw_size(size, false))
            .collect();
        let latest = resizes[resizes.len() - 1];
        draws.extend(redraw_size(latest, true));
        assert_eq!(draws, vec![(1024.0, 700.0)]);
    }

    #[test]
    fn collapsed_container_draws_nothing() {
        assert_eq!(redraw_size((0.0, 600.0), true), None);
        assert_eq!(redraw_size((800.0, 0.0), true), None);
    }
}
