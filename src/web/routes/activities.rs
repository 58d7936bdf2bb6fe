use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Form, Json,
};

use crate::error::SignupError;
use crate::models::ActivityCatalog;
use crate::services::activities_service::{self, SignupConfirmation};
use crate::state::AppState;

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(activities_service::list_activities(&state.registry))
}

type Params = Vec<(String, String)>;

/// `email` may arrive as a query parameter or in a urlencoded form body; the
/// query string wins when both are present. A repeated `email` key resolves
/// to its last value.
pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    query: Result<Query<Params>, QueryRejection>,
    form: Option<Form<Params>>,
) -> Result<Json<SignupConfirmation>, SignupError> {
    let Path(activity_name) = path.map_err(|e| SignupError::InvalidRequest(e.body_text()))?;
    let Query(query) = query.map_err(|e| SignupError::InvalidRequest(e.body_text()))?;

    let email = last_email(query)
        .or_else(|| form.and_then(|Form(f)| last_email(f)))
        .ok_or(SignupError::MissingEmail)?;

    activities_service::sign_up_for_activity(&state.registry, &activity_name, &email).map(Json)
}

fn last_email(params: Params) -> Option<String> {
    params
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
}
