use leptos::prelude::*;

use std::cell::RefCell;

use missions_map_shared::{
    CountryFeature, Devotional, FactTable, Palette, Selection, builtin_devotionals,
};

use crate::pages::{DevotionalPage, GlobalHeartPage, VocabularyPage};
use crate::profile::CountryProfile;
use crate::world_map::WorldMap;

struct KeydownBinding {
    window: web_sys::Window,
    _handler: wasm_bindgen::closure::Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

thread_local! {
    static KEYDOWN_BINDING: RefCell<Option<KeydownBinding>> = const { RefCell::new(None) };
}

/// The map's current selection, shared by the map, its card and the shell.
#[derive(Clone, Copy)]
pub(crate) struct Selected(pub RwSignal<Selection>);

/// Compiled-in country facts, parsed once at startup.
#[derive(Clone, Copy)]
pub(crate) struct FactStore(pub StoredValue<FactTable>);

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Page {
    Map,
    Profile(CountryFeature),
    GlobalHeart,
    Devotional(Devotional),
    Vocabulary,
}

impl Page {
    /// Where the back arrow leads from this page.
    fn back(&self) -> Page {
        match self {
            Page::Devotional(_) => Page::GlobalHeart,
            _ => Page::Map,
        }
    }
}

fn load_fact_table() -> FactTable {
    FactTable::builtin().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Country facts failed to parse: {e}").into());
        FactTable::default()
    })
}

fn load_devotionals() -> Vec<Devotional> {
    builtin_devotionals().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Devotionals failed to parse: {e}").into());
        Vec::new()
    })
}

fn remove_keydown_binding() {
    use wasm_bindgen::JsCast;

    KEYDOWN_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "keydown",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });
}

/// Escape dismisses the detail card, unless focus is in a text field.
fn install_keydown(selected: RwSignal<Selection>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    let Some(window) = web_sys::window() else {
        return;
    };
    remove_keydown_binding();

    let handler =
        Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
            let target_tag = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| el.tag_name())
                .unwrap_or_default();
            if target_tag == "INPUT" || target_tag == "TEXTAREA" {
                return;
            }
            if e.key() == "Escape" && selected.with_untracked(|s| s.selected().is_some()) {
                let _ = selected.try_update(|s| *s = s.close());
            }
        });

    if window
        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        KEYDOWN_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(KeydownBinding {
                window: window.clone(),
                _handler: handler,
            });
        });
    }
}

#[component]
pub fn App() -> impl IntoView {
    let selected = RwSignal::new(Selection::Idle);
    let facts = StoredValue::new(load_fact_table());
    let devotionals = StoredValue::new(load_devotionals());
    let page = RwSignal::new(Page::Map);

    provide_context(Selected(selected));
    provide_context(FactStore(facts));

    install_keydown(selected);
    on_cleanup(remove_keydown_binding);

    let go_back = Callback::new(move |()| page.update(|p| *p = p.back()));
    let view_profile = Callback::new(move |country: CountryFeature| {
        // The map remounts on return, so leave it without a card open.
        selected.set(Selection::Idle);
        page.set(Page::Profile(country));
    });
    let open_devotional = Callback::new(move |devotional: Devotional| {
        page.set(Page::Devotional(devotional));
    });
    let open_page = Callback::new(move |next: Page| {
        selected.set(Selection::Idle);
        page.set(next);
    });

    view! {
        <div style="width: 100vw; height: 100vh; position: relative; overflow: hidden; background: #111827; color: white; font-family: system-ui, -apple-system, sans-serif;">
            {move || match page.get() {
                Page::Map => view! { <MapPage on_view_profile=view_profile on_open=open_page /> }.into_any(),
                Page::Profile(country) => {
                    view! { <CountryProfile country=country on_back=go_back /> }.into_any()
                }
                Page::GlobalHeart => view! {
                    <GlobalHeartPage
                        devotionals=devotionals.get_value()
                        on_back=go_back
                        on_select=open_devotional
                    />
                }
                .into_any(),
                Page::Devotional(devotional) => {
                    view! { <DevotionalPage devotional=devotional on_back=go_back /> }.into_any()
                }
                Page::Vocabulary => view! { <VocabularyPage on_back=go_back /> }.into_any(),
            }}
        </div>
    }
}

/// Map page chrome: menu, title and legend around the interactive map.
#[component]
fn MapPage(on_view_profile: Callback<CountryFeature>, on_open: Callback<Page>) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let legend = Palette::default().legend_gradient();

    let menu_item = move |label: &'static str, target: Page| {
        view! {
            <button
                style="display: block; width: 100%; text-align: left; padding: 8px 16px; font-size: 0.875rem; color: #d1d5db; background: none; border: none; cursor: pointer;"
                on:click=move |_| {
                    menu_open.set(false);
                    on_open.run(target.clone());
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div style="width: 100%; height: 100%; position: relative;">
            <WorldMap on_view_profile=on_view_profile />

            <div style="position: absolute; top: 16px; left: 16px; z-index: 20;">
                <button
                    aria-label="Open menu"
                    style="width: 40px; height: 40px; border-radius: 50%; background: rgba(31, 41, 55, 0.8); border: none; color: white; font-size: 1.5rem; cursor: pointer; box-shadow: 0 4px 6px rgba(0,0,0,0.3);"
                    on:click=move |_| menu_open.update(|v| *v = !*v)
                >
                    "\u{1F30D}"
                </button>
                <Show when=move || menu_open.get()>
                    <div
                        style="position: fixed; inset: 0; z-index: -1;"
                        on:click=move |_| menu_open.set(false)
                    />
                    <div style="position: absolute; top: 48px; left: 0; width: 256px; padding: 4px 0; background: #1f2937; border-radius: 6px; box-shadow: 0 10px 15px rgba(0,0,0,0.5);">
                        {menu_item("Grow Your Heart for the Nations", Page::GlobalHeart)}
                        {menu_item("What Dat Mean?", Page::Vocabulary)}
                    </div>
                </Show>
            </div>

            <header style="position: absolute; top: 0; left: 0; right: 0; padding: 16px; text-align: center; pointer-events: none; z-index: 10;">
                <h1 style="margin: 0; font-size: 2.25rem; font-weight: 700; letter-spacing: 0.05em; text-shadow: 0 2px 4px rgba(0,0,0,0.6);">
                    "Interactive Missions Map"
                </h1>
                <p style="margin: 4px 0 0; color: #9ca3af;">"Pan with your mouse and scroll to zoom"</p>
            </header>

            <div style="position: absolute; bottom: 16px; left: 16px; padding: 12px; background: rgba(31, 41, 55, 0.8); border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.3); pointer-events: none; z-index: 10;">
                <h4 style="margin: 0 0 8px; font-size: 0.875rem; font-weight: 700;">"Christian Population %"</h4>
                <div style=format!("width: 160px; height: 16px; border-radius: 4px; background: {legend};") />
                <div style="display: flex; justify-content: space-between; margin-top: 4px; font-size: 0.75rem;">
                    <span>"Low"</span>
                    <span>"High"</span>
                </div>
            </div>
        </div>
    }
}
