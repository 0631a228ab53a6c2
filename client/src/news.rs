use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use missions_map_shared::NewsSummary;
use missions_map_shared::news::{
    GenerateContentRequest, GenerateContentResponse, NEWS_ERROR_MESSAGE,
};

use crate::config::{gemini_api_key, gemini_url};
use crate::latest::LatestRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NewsState {
    Loading,
    Ready(NewsSummary),
    Failed(&'static str),
}

thread_local! {
    static NEWS_REQUESTS: LatestRequest = const { LatestRequest::new() };
}

/// Ask Gemini, grounded on Google Search, for recent news about `country`.
pub async fn fetch_news(country: &str) -> Result<NewsSummary, String> {
    let key = gemini_api_key().ok_or("GEMINI_API_KEY is not configured")?;

    let resp = gloo_net::http::Request::post(&gemini_url())
        .header("x-goog-api-key", key)
        .json(&GenerateContentRequest::news_for(country))
        .map_err(|e| format!("fetch error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let body = resp
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| format!("parse error: {e}"))?;
    Ok(NewsSummary::from_response(&body))
}

/// Start a news request into `state`. A later request supersedes this one:
/// its result is dropped if another request started in the meantime.
pub(crate) fn request_news(country: String, state: RwSignal<NewsState>) {
    let ticket = NEWS_REQUESTS.with(LatestRequest::begin);
    state.set(NewsState::Loading);

    spawn_local(async move {
        let result = fetch_news(&country).await;
        if !NEWS_REQUESTS.with(|requests| requests.is_current(ticket)) {
            return;
        }
        let next = match result {
            Ok(summary) => NewsState::Ready(summary),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("News summary for {country} failed: {e}").into(),
                );
                NewsState::Failed(NEWS_ERROR_MESSAGE)
            }
        };
        let _ = state.try_set(next);
    });
}
