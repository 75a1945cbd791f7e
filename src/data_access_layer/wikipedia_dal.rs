use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::error;

use crate::configs::app_state::AppState;
use crate::constants;

#[derive(Deserialize, Debug)]
struct WikipediaResponse {
    query: WikipediaQuery,
}

#[derive(Deserialize, Debug)]
struct WikipediaQuery {
    pages: HashMap<String, WikipediaPage>,
}

#[derive(Deserialize, Debug)]
struct WikipediaPage {
    extract: Option<String>,
}

/// Best-effort biography lookup for get-one. Failures never propagate: the
/// caller always gets displayable text back.
pub async fn fetch_player_extract(state: &Arc<AppState>, player_name: &str) -> String {
    let title = title_case(player_name);
    match query_extract(state, &title).await {
        Ok(Some(extract)) => extract,
        Ok(None) => constants::NO_INFORMATION_AVAILABLE.to_string(),
        Err(err) => {
            error!("error fetching wikipedia data for {} : {}", title, err);
            constants::ERROR_FETCHING_INFORMATION.to_string()
        }
    }
}

async fn query_extract(state: &Arc<AppState>, title: &str) -> Result<Option<String>, reqwest::Error> {
    let response = state
        .http
        .get(&state.config.wikipedia_api_url)
        .query(&[
            ("action", "query"),
            ("prop", "extracts"),
            ("format", "json"),
            ("exintro", ""),
            ("titles", title),
        ])
        .send()
        .await?
        .error_for_status()?;
    let payload: WikipediaResponse = response.json().await?;

    // a single page entry is expected for a single title
    Ok(payload
        .query
        .pages
        .into_values()
        .next()
        .and_then(|page| page.extract))
}

// "john doe" -> "John Doe"
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
