use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::configs::app_state::AppState;
use crate::constants;
use crate::custom_errors::store_errors::StoreError;
use crate::models::player::Player;

// Response of a push: the store answers with the key it generated.
#[derive(Deserialize, Debug)]
struct PushResponse {
    name: String,
}

fn record_path(id: &str) -> String {
    format!("{}/{}", constants::PLAYERS_PATH, id)
}

fn url_for(state: &AppState, path: &str) -> String {
    format!("{}/{}.json", state.config.database_url, path)
}

fn check_status(
    response: reqwest::Response,
    path: &str,
) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status {
            status: status.as_u16(),
            path: path.to_string(),
        })
    }
}

/// Fetches the whole collection and injects each record's store key as its
/// `id`. An empty collection comes back from the store as `null`.
pub async fn get_all_players(state: &Arc<AppState>) -> Result<Vec<Player>, StoreError> {
    let url = url_for(state, constants::PLAYERS_PATH);
    debug!("GET {}", url);
    let response = state
        .http
        .get(&url)
        .query(&[("auth", state.config.database_secret.as_str())])
        .send()
        .await?;
    let records: Option<BTreeMap<String, Player>> =
        check_status(response, constants::PLAYERS_PATH)?.json().await?;

    let mut players = vec![];
    for (key, mut player) in records.unwrap_or_default() {
        player.id = Some(key);
        players.push(player);
    }
    Ok(players)
}

pub async fn get_player_by_id(
    state: &Arc<AppState>,
    id: &str,
) -> Result<Option<Player>, StoreError> {
    let path = record_path(id);
    let url = url_for(state, &path);
    debug!("GET {}", url);
    let response = state
        .http
        .get(&url)
        .query(&[("auth", state.config.database_secret.as_str())])
        .send()
        .await?;
    let record: Option<Player> = check_status(response, &path)?.json().await?;

    Ok(record.map(|mut player| {
        player.id = Some(id.to_string());
        player
    }))
}

/// Appends a new record; the store generates and returns its key.
pub async fn push_player(
    state: &Arc<AppState>,
    record: &Map<String, Value>,
) -> Result<String, StoreError> {
    let url = url_for(state, constants::PLAYERS_PATH);
    debug!("POST {}", url);
    let response = state
        .http
        .post(&url)
        .query(&[("auth", state.config.database_secret.as_str())])
        .json(record)
        .send()
        .await?;
    let push: PushResponse = check_status(response, constants::PLAYERS_PATH)?.json().await?;

    Ok(push.name)
}

/// Merge-write: only the supplied fields change, the rest of the record
/// is left untouched by the store.
pub async fn update_player(
    state: &Arc<AppState>,
    id: &str,
    fields: &Map<String, Value>,
) -> Result<(), StoreError> {
    let path = record_path(id);
    let url = url_for(state, &path);
    debug!("PATCH {}", url);
    let response = state
        .http
        .patch(&url)
        .query(&[("auth", state.config.database_secret.as_str())])
        .json(fields)
        .send()
        .await?;
    check_status(response, &path)?;

    Ok(())
}

// The store's remove is idempotent: deleting an absent key succeeds.
pub async fn remove_player(state: &Arc<AppState>, id: &str) -> Result<(), StoreError> {
    let path = record_path(id);
    let url = url_for(state, &path);
    debug!("DELETE {}", url);
    let response = state
        .http
        .delete(&url)
        .query(&[("auth", state.config.database_secret.as_str())])
        .send()
        .await?;
    check_status(response, &path)?;

    Ok(())
}
