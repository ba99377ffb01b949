pub mod auth;
mod basic_schedules;
mod clients;
mod root;
mod service_users;
mod shifts;
mod staffs;

use crate::state::AppState;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, patch},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn app(state: AppState) -> Router {
    let origins = [
        "http://localhost:5173".parse().unwrap(),
        "https://care.kawa.homes".parse().unwrap(),
    ];

    Router::new()
        .route("/", get(root::index))
        .nest("/auth", auth::new())
        .nest("/shifts", shifts::new(state.clone()))
        .nest("/staffs", staffs::new(state.clone()))
        .nest("/service_users", service_users::new(state.clone()))
        .nest("/basic_schedules", basic_schedules::new(state.clone()))
        // 路徑沿用舊前端打的 API,auth 檢查在 handler 裡自己做
        .route("/api/clients/{id}/suspend", patch(clients::suspend))
        .fallback(root::handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(
            // see https://docs.rs/tower-http/latest/tower_http/cors/index.html
            // for more details
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_origin(origins)
                .allow_headers([CONTENT_TYPE, AUTHORIZATION]),
        )
        .with_state(state)
}
