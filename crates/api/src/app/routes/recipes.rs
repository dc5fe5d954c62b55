use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use spudstock_core::Difficulty;

use crate::app::{AppServices, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/recommend", get(recommend_recipe))
        .route("/recipes/:id", get(get_recipe))
}

pub async fn list_recipes(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::VarietyQuery>,
) -> axum::response::Response {
    let recipes = match query.variety {
        Some(variety) => services.recipes.by_variety(&variety),
        None => services.recipes.all(),
    };
    (StatusCode::OK, Json(recipes)).into_response()
}

pub async fn create_recipe(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateRecipeRequest>,
) -> axum::response::Response {
    match services.recipes.create(body.into_recipe()) {
        Ok(recipe) => {
            info!(recipe_id = %recipe.id, "recipe created");
            (StatusCode::CREATED, Json(recipe)).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_recipe(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.recipes.get(&id) {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn recommend_recipe(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::RecommendQuery>,
) -> axum::response::Response {
    let Some(variety) = query.variety.filter(|v| !v.is_empty()) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_variety",
            "variety query parameter is required",
        );
    };

    let difficulty = match query.difficulty.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<Difficulty>() {
            Ok(d) => Some(d),
            Err(err) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_difficulty",
                    err.to_string(),
                );
            }
        },
    };

    match services.recipes.recommend(&variety, difficulty) {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
