use leptos::prelude::*;

use missions_map_shared::CountryFeature;
use missions_map_shared::news::NO_NEWS_MESSAGE;

use crate::collapsible::Collapsible;
use crate::news::{NewsState, request_news};
use crate::pages::PageFrame;

/// Full profile for one country: headline facts, narrative sections and
/// the AI news digest.
#[component]
pub fn CountryProfile(country: CountryFeature, on_back: Callback<()>) -> impl IntoView {
    let facts = country.quick_facts();
    let rows = facts
        .rows()
        .into_iter()
        .map(|(label, value)| {
            let value = value.to_string();
            view! {
                <div style="display: flex; justify-content: space-between; align-items: flex-start; border-bottom: 1px solid #374151; padding: 8px 0;">
                    <span style="color: #9ca3af; margin-right: 16px;">{label}</span>
                    <span style="font-weight: 600; text-align: right;">{value}</span>
                </div>
            }
        })
        .collect_view();

    let text_section = |title: &'static str, text: Option<String>| {
        text.map(|text| {
            view! {
                <Collapsible title=title>
                    <p style="margin: 0;">{text}</p>
                </Collapsible>
            }
        })
    };

    let missions = text_section("Missions Overview", country.facts.missions_text.clone());
    let challenges = text_section(
        "Challenges for Christians",
        country.facts.christian_challenges.clone(),
    );
    let prayer = text_section("Prayer Ideas", country.facts.prayer_ideas.clone());
    let support = country.facts.support_link.clone().map(|link| {
        view! {
            <section style="margin-top: 40px; text-align: center;">
                <a
                    href=link
                    target="_blank"
                    rel="noopener noreferrer"
                    style="display: inline-block; background: #16a34a; color: white; font-weight: 700; padding: 12px 32px; border-radius: 8px; font-size: 1.125rem; text-decoration: none;"
                >
                    "Learn More & Get Involved"
                </a>
            </section>
        }
    });

    view! {
        <PageFrame title=country.name.clone() on_back=on_back back_label="Back to Map">
            <section style="display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); column-gap: 32px; row-gap: 16px; margin-bottom: 32px; font-size: 1.125rem;">
                {rows}
            </section>
            <section style="display: flex; flex-direction: column; gap: 32px;">
                {missions}
                <AiReporter country=country.name.clone() />
                {challenges}
                {prayer}
            </section>
            {support}
        </PageFrame>
    }
}

/// Recent-news digest for `country`, fetched once per mount.
#[component]
pub fn AiReporter(country: String) -> impl IntoView {
    let state = RwSignal::new(NewsState::Loading);
    let revision = RwSignal::new(0u32);
    request_news(country, state);

    Effect::new(move || {
        state.track();
        revision.update(|r| *r = r.wrapping_add(1));
    });

    let body = move || match state.get() {
        NewsState::Loading => view! {
            <div style="display: flex; align-items: center; gap: 12px; color: #9ca3af;">
                <div style="width: 20px; height: 20px; border: 2px dashed #9ca3af; border-radius: 50%; animation: spin 1s linear infinite;" />
                <span>"Fetching news..."</span>
            </div>
        }
        .into_any(),
        NewsState::Failed(message) => view! {
            <p style="color: #f87171; margin: 0;">{message}</p>
        }
        .into_any(),
        NewsState::Ready(summary) => {
            let lines = if summary.is_empty() {
                view! { <p style="margin: 0;">{NO_NEWS_MESSAGE}</p> }.into_any()
            } else {
                view! {
                    <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px;">
                        {summary.lines.iter().map(|line| view! { <li>{line.clone()}</li> }).collect_view()}
                    </ul>
                }
                .into_any()
            };
            let sources = (!summary.sources.is_empty()).then(|| {
                view! {
                    <div style="margin-top: 24px; border-top: 1px solid #374151; padding-top: 16px;">
                        <h4 style="margin: 0; font-size: 0.875rem; font-weight: 700; color: #6b7280; text-transform: uppercase; letter-spacing: 0.05em;">"Sources"</h4>
                        <ul style="list-style: none; margin: 8px 0 0; padding: 0; display: flex; flex-direction: column; gap: 4px;">
                            {summary.sources.iter().map(|source| view! {
                                <li style="font-size: 0.875rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                    <a
                                        href=source.uri.clone()
                                        title=source.title.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        style="color: #60a5fa; text-decoration: none;"
                                    >
                                        {source.label().to_string()}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }
            });
            view! { <div>{lines}{sources}</div> }.into_any()
        }
    };

    view! {
        <Collapsible title="AI Reporter: Recent News" revision=revision>
            {body}
        </Collapsible>
    }
}
