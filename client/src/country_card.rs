use leptos::prelude::*;

use missions_map_shared::CountryFeature;

use crate::app::Selected;

/// Quick-fact modal for the selected country. Closing it (button, backdrop
/// or Escape) returns the selection to idle.
#[component]
pub fn CountryCard(
    countries: RwSignal<Option<Vec<CountryFeature>>>,
    on_view_profile: Callback<CountryFeature>,
) -> impl IntoView {
    let Selected(selected) = expect_context();

    let selected_country = Memo::new(move |_| {
        let selection = selected.get();
        let name = selection.selected()?;
        countries.with(|countries| {
            countries
                .as_ref()?
                .iter()
                .find(|country| country.name == name)
                .cloned()
        })
    });

    let close = move || selected.update(|s| *s = s.close());

    view! {
        {move || {
            let Some(country) = selected_country.get() else {
                return ().into_any();
            };
            let facts = country.quick_facts();
            let rows = facts
                .rows()
                .into_iter()
                .map(|(label, value)| {
                    let value = value.to_string();
                    view! {
                        <li style="display: flex; justify-content: space-between; align-items: flex-start;">
                            <span style="color: #9ca3af; margin-right: 16px;">{label}</span>
                            <span style="font-weight: 600; text-align: right;">{value}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="country-fact-title"
                    style="position: fixed; inset: 0; z-index: 40; background: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; padding: 16px;"
                    on:click=move |_| close()
                >
                    <div
                        style="position: relative; width: 100%; max-width: 24rem; background: #1f2937; color: white; border-radius: 8px; padding: 24px; box-shadow: 0 25px 50px rgba(0,0,0,0.5);"
                        on:click=|e| e.stop_propagation()
                    >
                        <button
                            aria-label="Close modal"
                            style="position: absolute; top: 12px; right: 12px; background: none; border: none; color: #9ca3af; font-size: 1.875rem; font-weight: 300; line-height: 1; cursor: pointer;"
                            on:click=move |_| close()
                        >
                            "\u{00D7}"
                        </button>
                        <h2
                            id="country-fact-title"
                            style="font-size: 1.5rem; font-weight: 700; margin: 0 0 24px; padding-bottom: 8px; border-bottom: 2px solid #374151; overflow-wrap: anywhere;"
                        >
                            {facts.name.clone()}
                        </h2>
                        <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 16px; font-size: 1.125rem;">
                            {rows}
                        </ul>
                        <div style="margin-top: 32px;">
                            <button
                                style="width: 100%; background: #2563eb; color: white; font-weight: 700; padding: 12px 16px; border: none; border-radius: 8px; cursor: pointer;"
                                on:click=move |_| on_view_profile.run(country.clone())
                            >
                                "View Full Story"
                            </button>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}

