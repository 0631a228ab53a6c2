use leptos::prelude::*;

use missions_map_shared::QuickFacts;

use crate::config::TOOLTIP_OFFSET;

/// Facts of the country under the pointer. Written by the map's pointer
/// handlers; never touches the selection.
#[derive(Clone, Copy)]
pub(crate) struct HoveredCountry(pub RwSignal<Option<QuickFacts>>);

/// Last pointer position in viewport coordinates.
#[derive(Clone, Copy)]
pub(crate) struct PointerPosition(pub RwSignal<(f64, f64)>);

/// Floating fact panel that trails the pointer while a country is hovered.
#[component]
pub fn MapTooltip() -> impl IntoView {
    let HoveredCountry(hovered) = expect_context();
    let PointerPosition(pointer) = expect_context();

    view! {
        {move || {
            let Some(facts) = hovered.get() else {
                return view! { <div style="display:none;" /> }.into_any();
            };
            let (x, y) = pointer.get();
            let rows = facts
                .rows()
                .into_iter()
                .map(|(label, value)| {
                    let label = format!("{label}:");
                    let value = value.to_string();
                    view! {
                        <li style="display: flex; justify-content: space-between; align-items: center; gap: 12px;">
                            <span style="color: #d1d5db;">{label}</span>
                            <span style="font-weight: 600; text-align: right;">{value}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div
                    style:left=format!("{}px", x + TOOLTIP_OFFSET)
                    style:top=format!("{}px", y + TOOLTIP_OFFSET)
                    style="position: fixed; z-index: 20; pointer-events: none; min-width: 220px; background: rgba(17, 24, 39, 0.9); color: white; border: 1px solid hsl(210, 20%, 25%); border-radius: 6px; font-size: 14px; box-shadow: 0 4px 6px rgba(0,0,0,0.3);"
                >
                    <div style="font-weight: 700; font-size: 1rem; padding: 8px; background: hsl(210, 20%, 20%); border-radius: 5px 5px 0 0;">
                        {facts.name.clone()}
                    </div>
                    <ul style="list-style: none; margin: 0; padding: 8px; display: flex; flex-direction: column; gap: 4px; font-size: 0.875rem;">
                        {rows}
                    </ul>
                </div>
            }
            .into_any()
        }}
    }
}
