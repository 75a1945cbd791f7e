use crate::configs::app_state::AppState;
use crate::custom_errors::service_errors::ServiceError;
use crate::data_access_layer::{player_dal, wikipedia_dal};
use crate::models::player::Player;
use crate::requests::requests::ListPlayersQuery;
use crate::utilities::responses::{response_success, StatusResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

const TEXT_FIELDS: [&str; 3] = ["name", "team", "position"];

pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListPlayersQuery>,
) -> Result<(StatusCode, Json<Vec<Player>>), ServiceError> {
    info!("listing players");
    let mut players = player_dal::get_all_players(&state).await?;

    if let Some(search) = query.search.filter(|search| !search.is_empty()) {
        let needle = search.to_lowercase();
        players.retain(|player| player.matches_search(&needle));
    }

    Ok((StatusCode::OK, Json(players)))
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    info!("creating player");
    let mut fields = as_object(payload)?;
    normalize_new_player(&mut fields)?;

    let key = player_dal::push_player(&state, &fields).await?;
    fields.insert("id".to_string(), Value::String(key));

    Ok((StatusCode::CREATED, Json(Value::Object(fields))))
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Option<Player>>), ServiceError> {
    info!("fetching player {}", id);
    let Some(mut player) = player_dal::get_player_by_id(&state, &id).await? else {
        return Ok((StatusCode::OK, Json(None)));
    };

    player.wikipedia = Some(wikipedia_dal::fetch_player_extract(&state, &player.name).await);

    Ok((StatusCode::OK, Json(Some(player))))
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<StatusResponse>), ServiceError> {
    info!("updating player {}", id);
    let mut fields = as_object(payload)?;
    normalize_supplied_fields(&mut fields)?;

    player_dal::update_player(&state, &id, &fields).await?;

    Ok(response_success("Player updated successfully"))
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<StatusResponse>), ServiceError> {
    info!("deleting player {}", id);
    player_dal::remove_player(&state, &id).await?;

    Ok(response_success("Player deleted successfully"))
}

fn as_object(payload: Value) -> Result<Map<String, Value>, ServiceError> {
    match payload {
        Value::Object(fields) => Ok(fields),
        _ => Err(ServiceError::InvalidPayload),
    }
}

// Text fields are stored lowercased so substring search stays case
// insensitive regardless of how callers spell them.
fn normalize_new_player(fields: &mut Map<String, Value>) -> Result<(), ServiceError> {
    for field in TEXT_FIELDS {
        match fields.get_mut(field) {
            Some(Value::String(text)) => *text = text.to_lowercase(),
            Some(_) => return Err(ServiceError::InvalidField(field)),
            None => return Err(ServiceError::MissingField(field)),
        }
    }
    check_number(fields.get("number"), true)
}

// Updates are merges: only supplied fields are checked and normalized.
fn normalize_supplied_fields(fields: &mut Map<String, Value>) -> Result<(), ServiceError> {
    for field in TEXT_FIELDS {
        match fields.get_mut(field) {
            Some(Value::String(text)) => *text = text.to_lowercase(),
            Some(_) => return Err(ServiceError::InvalidField(field)),
            None => (),
        }
    }
    check_number(fields.get("number"), false)
}

fn check_number(number: Option<&Value>, required: bool) -> Result<(), ServiceError> {
    match number {
        Some(Value::Number(number)) if number.is_i64() || number.is_u64() => Ok(()),
        Some(_) => Err(ServiceError::InvalidField("number")),
        None if required => Err(ServiceError::MissingField("number")),
        None => Ok(()),
    }
}
