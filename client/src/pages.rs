use leptos::prelude::*;

use missions_map_shared::Devotional;

use crate::collapsible::Collapsible;

/// Centered card with a back arrow and title, shared by every non-map page.
#[component]
pub fn PageFrame(
    #[prop(into)] title: String,
    #[prop(into)] back_label: String,
    on_back: Callback<()>,
    #[prop(optional)] narrow: bool,
    children: Children,
) -> impl IntoView {
    let max_width = if narrow { "42rem" } else { "56rem" };
    view! {
        <div style="width: 100%; height: 100%; overflow-y: auto; background: #111827; color: white; animation: fade-in 0.4s ease-out forwards;">
            <div style=format!("width: 100%; max-width: {max_width}; margin: 0 auto; padding: 32px 16px; box-sizing: border-box;")>
                <div style="background: #1f2937; border-radius: 8px; box-shadow: 0 25px 50px rgba(0,0,0,0.5); padding: 32px;">
                    <header style="position: relative; border-bottom: 2px solid #374151; padding-bottom: 16px; margin-bottom: 24px;">
                        <button
                            aria-label=back_label
                            style="position: absolute; left: 0; top: 50%; transform: translateY(-50%); width: 32px; height: 32px; background: none; border: none; color: #9ca3af; font-size: 1.875rem; line-height: 1; cursor: pointer;"
                            on:click=move |_| on_back.run(())
                        >
                            "\u{2190}"
                        </button>
                        <h1 style="margin: 0; padding: 0 40px; font-size: 2.25rem; font-weight: 700; text-align: center; overflow-wrap: anywhere;">
                            {title}
                        </h1>
                    </header>
                    {children()}
                </div>
            </div>
        </div>
    }
}

const GLOBAL_PLAN: [&str; 5] = [
    "From the beginning, God has revealed that His purpose is not limited to one nation but extends to all peoples. When He called Abraham, He promised, \u{201C}in you all the families of the earth shall be blessed\u{201D} (Genesis 12:3). This blessing ultimately points to the gospel\u{2014}God\u{2019}s plan to redeem every nation through Christ.",
    "The Psalms echo this global vision: \u{201C}Declare His glory among the nations, His marvelous works among all peoples\u{201D} (Psalm 96:3). God\u{2019}s heart is that every nation would know Him, worship Him, and turn to Him.",
    "Jesus made this mission unmistakably clear. Before He ascended, He commanded, \u{201C}Go therefore and make disciples of all nations\u{201D} (Matthew 28:19) and \u{201C}Go into all the world and proclaim the gospel to the whole creation\u{201D} (Mark 16:15). The goal is global: every tribe, every language, every person.",
    "The New Testament shows that this is not a new plan but the fulfillment of what God always intended. Paul writes that God\u{2019}s desire is that \u{201C}all people be saved and come to the knowledge of the truth\u{201D} (1 Timothy 2:4). The message is for everyone, everywhere.",
    "And Scripture closes with the vision of the plan completed\u{2014}\u{201C}a great multitude\u{2026} from every nation, from all tribes and peoples and languages\u{201D} standing before the throne (Revelation 7:9). God\u{2019}s Word will reach the ends of the earth, and people from every corner of the world will respond in worship.",
];

const POWER_OF_PRAYER: [&str; 5] = [
    "Scripture shows that prayer is not optional in evangelism\u{2014}it is the power behind it. Jesus Himself taught that reaching people begins with prayer. He said, \u{201C}The harvest is plentiful, but the laborers are few; therefore pray earnestly to the Lord of the harvest to send out laborers into His harvest\u{201D} (Matthew 9:37\u{2013}38). Before anyone goes, God calls His people to pray.",
    "Paul modeled this dependence on prayer. He asked believers to pray that God would \u{201C}open to us a door for the word\u{201D} (Colossians 4:3) and that he would proclaim the gospel \u{201C}boldly\u{201D} (Ephesians 6:19). Effective evangelism requires God to open hearts and empower His messengers, and prayer is how we seek that power.",
    "Prayer also prepares the hearts of unbelievers. Paul reminds us that only God can \u{201C}shine in our hearts to give the light of the knowledge of the glory of God\u{201D} (2 Corinthians 4:6). Evangelism is spiritual work, and only God can give spiritual sight\u{2014}so we pray for Him to move.",
    "Even the early church advanced through prayer. Before the gospel spread past Jerusalem, they \u{201C}devoted themselves to prayer\u{201D} (Acts 1:14). After praying, \u{201C}they were all filled with the Holy Spirit and continued to speak the word of God with boldness\u{201D} (Acts 4:31). Prayer preceded power.",
    "Ultimately, prayer aligns our hearts with God\u{2019}s mission. When we pray, we join His heart for the lost and seek His strength, not our own. As Jesus promised, \u{201C}Apart from Me you can do nothing\u{201D} (John 15:5)\u{2014}but through prayer, God does what we never could.",
];

fn essay(heading: &'static str, paragraphs: &'static [&'static str]) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 16px;">
            <p style="margin: 0;"><strong>{heading}</strong></p>
            {paragraphs.iter().map(|p| view! { <p style="margin: 0;">{*p}</p> }).collect_view()}
        </div>
    }
}

/// "Grow Your Heart for the Nations": two essays and the devotional list.
#[component]
pub fn GlobalHeartPage(
    devotionals: Vec<Devotional>,
    on_back: Callback<()>,
    on_select: Callback<Devotional>,
) -> impl IntoView {
    let items = devotionals
        .into_iter()
        .map(|devotional| {
            let title = devotional.title.clone();
            view! {
                <li style="display: flex; justify-content: space-between; align-items: center; gap: 12px; background: rgba(31, 41, 55, 0.5); padding: 12px; border-radius: 6px;">
                    <span>{title}</span>
                    <button
                        style="background: #2563eb; color: white; font-size: 0.875rem; font-weight: 700; padding: 4px 12px; border: none; border-radius: 6px; cursor: pointer;"
                        on:click=move |_| on_select.run(devotional.clone())
                    >
                        "Read"
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <PageFrame title="A Heart for the Nations: Prayer and Discipleship" back_label="Back to Map" on_back=on_back>
            <div style="display: flex; flex-direction: column; gap: 32px;">
                <Collapsible title="God's Global Plan">
                    {essay("God\u{2019}s Global Plan for His Word to Reach the Whole World", &GLOBAL_PLAN)}
                </Collapsible>
                <Collapsible title="The Power of Prayer">
                    {essay("The Power of Prayer in God\u{2019}s Mission to Save the Lost", &POWER_OF_PRAYER)}
                </Collapsible>
                <div>
                    <h2 style="font-size: 1.5rem; font-weight: 600; margin: 0 0 12px; color: #d1d5db;">"Daily Devotionals"</h2>
                    <div style="background: rgba(17, 24, 39, 0.5); padding: 16px; border-radius: 6px;">
                        <p style="margin: 0; color: #9ca3af;">
                            "A collection of short readings designed to help grow your passion for global missions."
                        </p>
                        <ul style="list-style: none; margin: 16px 0 0; padding: 0; display: flex; flex-direction: column; gap: 12px;">
                            {items}
                        </ul>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn DevotionalPage(devotional: Devotional, on_back: Callback<()>) -> impl IntoView {
    let html = devotional.html();
    view! {
        <PageFrame title=devotional.title back_label="Back to Global Heart Page" on_back=on_back narrow=true>
            <div class="devotional-body" style="color: #d1d5db; line-height: 1.8;" inner_html=html />
        </PageFrame>
    }
}

const VOCABULARY: [(&str, &str); 5] = [
    (
        "People Group Count",
        "A people group is an ethnolinguistic group of people who share a common language, culture, and ethnicity. The count represents distinct groups within a country, many of whom may not have a self-sustaining Christian community.",
    ),
    (
        "Christian %",
        "This is the estimated percentage of the population that identifies as Christian (including all denominations). The map is color-coded based on this data: red indicates a lower percentage, and blue indicates a higher percentage.",
    ),
    (
        "Unreached %",
        "This figure represents the estimated percentage of the population that is considered \"unreached\"\u{2014}individuals who have likely never had a meaningful opportunity to hear the Gospel message in a way they can understand. These are often people in groups with no indigenous, self-sustaining Christian community.",
    ),
    (
        "Main Religion",
        "The largest religious group in the country by population.",
    ),
    (
        "Information Source",
        "The data for these cards has been compiled and fact-checked from a variety of respected missions and demographic research sources, including The Joshua Project, Open Doors, Operation World, and others.",
    ),
];

/// "What Dat Mean?": glossary of the terms used on the map and cards.
#[component]
pub fn VocabularyPage(on_back: Callback<()>) -> impl IntoView {
    view! {
        <PageFrame title="Mission Vocabulary and Terms" back_label="Back to Map" on_back=on_back>
            <div style="display: flex; flex-direction: column; gap: 24px; color: #d1d5db;">
                {VOCABULARY
                    .iter()
                    .map(|(term, meaning)| view! {
                        <div>
                            <h3 style="margin: 0 0 4px; font-size: 1.125rem; font-weight: 700; color: white;">{*term}</h3>
                            <p style="margin: 0;">{*meaning}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
