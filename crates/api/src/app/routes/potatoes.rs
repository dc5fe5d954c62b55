use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::{debug, info};

use crate::app::{AppServices, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/potatoes", get(list_potatoes).post(create_potato))
        .route(
            "/potatoes/:id",
            get(get_potato).put(update_potato).delete(delete_potato),
        )
        .route("/potatoes/:id/freshness", get(check_freshness))
        .route("/inventory", get(get_inventory))
        .route("/analytics", get(get_analytics))
}

pub async fn list_potatoes(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::VarietyQuery>,
) -> axum::response::Response {
    let potatoes = match query.variety {
        Some(variety) => services.potatoes.by_variety(&variety),
        None => services.potatoes.all(),
    };
    (StatusCode::OK, Json(potatoes)).into_response()
}

pub async fn create_potato(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreatePotatoRequest>,
) -> axum::response::Response {
    debug!(variety = %body.variety, weight = body.weight, "creating new potato");

    match services.potatoes.create(body.into_potato()) {
        Ok(potato) => {
            info!(potato_id = %potato.id, "potato created");
            (StatusCode::CREATED, Json(potato)).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_potato(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.potatoes.get(&id) {
        Ok(potato) => (StatusCode::OK, Json(potato)).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_potato(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdatePotatoRequest>,
) -> axum::response::Response {
    match services.potatoes.update(&id, body.into_potato(&id)) {
        Ok(potato) => {
            info!(potato_id = %id, "potato updated");
            (StatusCode::OK, Json(potato)).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_potato(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.potatoes.delete(&id) {
        Ok(()) => {
            info!(potato_id = %id, "potato deleted");
            (StatusCode::OK, Json(json!({"result": "success"}))).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn check_freshness(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let potato = match services.potatoes.get(&id) {
        Ok(p) => p,
        Err(err) => return errors::domain_error_to_response(err),
    };

    let freshness = services.potatoes.freshness(&potato);
    (
        StatusCode::OK,
        Json(json!({
            "id": potato.id,
            "variety": potato.variety,
            "freshness": freshness.as_str(),
        })),
    )
        .into_response()
}

pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let summary = services.potatoes.inventory_summary();
    (StatusCode::OK, Json(summary)).into_response()
}

pub async fn get_analytics(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let analytics = services.potatoes.analytics();
    (StatusCode::OK, Json(analytics)).into_response()
}
