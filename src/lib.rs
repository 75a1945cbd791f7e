pub mod configs;
pub mod constants;
pub mod custom_errors;
pub mod data_access_layer;
pub mod models;
pub mod requests;
pub mod service_layer;
pub mod utilities;

use axum::{
    http::{self, HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::configs::app_state::AppState;
use crate::service_layer::player_service;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/players",
            get(player_service::list_players).post(player_service::create_player),
        )
        .route(
            "/players/:id",
            get(player_service::get_player)
                .put(player_service::update_player)
                .delete(player_service::delete_player),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(
                    state
                        .config
                        .web_domains
                        .iter()
                        .map(|domain| {
                            domain
                                .parse::<HeaderValue>()
                                .expect("parse web domains into HeaderValue failed")
                        })
                        .collect::<Vec<HeaderValue>>(),
                )
                .allow_headers(vec![http::header::CONTENT_TYPE])
                .allow_methods(vec![
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
