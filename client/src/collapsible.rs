use leptos::prelude::*;

use crate::config::COLLAPSED_HEIGHT;

/// Titled section clipped to a fixed height, with a Show More / Show Less
/// toggle once the content outgrows it. `revision` re-measures the content
/// when it changes after mount.
#[component]
pub fn Collapsible(
    #[prop(into)] title: String,
    #[prop(optional, into)] revision: Option<Signal<u32>>,
    children: Children,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let content_height = RwSignal::new(0.0f64);
    let content_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if let Some(revision) = revision {
            revision.track();
        }
        if let Some(el) = content_ref.get() {
            content_height.set(el.scroll_height() as f64);
        }
    });

    let overflowing = move || content_height.get() > COLLAPSED_HEIGHT;

    view! {
        <div>
            <h2 style="font-size: 1.5rem; font-weight: 600; margin: 0 0 12px; color: #d1d5db;">{title}</h2>
            <div style="background: rgba(17, 24, 39, 0.5); padding: 16px; border-radius: 6px;">
                <div
                    style="position: relative; overflow: hidden; color: #9ca3af; line-height: 1.7; transition: max-height 0.5s ease-in-out;"
                    style:max-height=move || {
                        let height = if expanded.get() { content_height.get() } else { COLLAPSED_HEIGHT };
                        format!("{height}px")
                    }
                >
                    <div node_ref=content_ref>{children()}</div>
                    {move || {
                        (!expanded.get() && overflowing()).then(|| view! {
                            <div style="position: absolute; left: 0; right: 0; bottom: 0; height: 48px; pointer-events: none; background: linear-gradient(to top, rgba(17, 24, 39, 0.5), transparent);" />
                        })
                    }}
                </div>
                {move || {
                    overflowing().then(|| view! {
                        <div style="margin-top: 8px;">
                            <button
                                style="background: none; border: none; padding: 0; color: #60a5fa; font-weight: 600; font-size: 0.875rem; cursor: pointer;"
                                on:click=move |_| expanded.update(|v| *v = !*v)
                            >
                                {move || if expanded.get() { "Show Less" } else { "Show More" }}
                            </button>
                        </div>
                    })
                }}
            </div>
        </div>
    }
}
