//! Axum route handlers for the resume CRUD surface.

use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::errors::AppError;
use crate::models::resume::{Education, Experience, Project, Resource, Skill, User};
use crate::state::AppState;
use crate::store::{ResumeStore, SharedStore};
use crate::validation::check_phone_number;

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

fn read_store(store: &SharedStore) -> Result<RwLockReadGuard<'_, ResumeStore>, AppError> {
    store
        .read()
        .map_err(|_| AppError::Internal(anyhow!("resume store lock poisoned")))
}

fn write_store(store: &SharedStore) -> Result<RwLockWriteGuard<'_, ResumeStore>, AppError> {
    store
        .write()
        .map_err(|_| AppError::Internal(anyhow!("resume store lock poisoned")))
}

fn body_object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| AppError::Validation("Request body must be a JSON object".to_string()))
}

/// The experience/education/skill POST body comes in two shapes: a flat
/// record, or the record wrapped as `{"data": [record]}` (the shape the
/// list-reorder PUT uses). Both are accepted; the wrapper's first entry
/// wins.
fn create_fields(body: &Value) -> Result<&Map<String, Value>, AppError> {
    match body.get("data") {
        Some(data) => data
            .as_array()
            .and_then(|entries| entries.first())
            .ok_or_else(|| AppError::Validation("Missing fields: data".to_string()))?
            .as_object()
            .ok_or_else(|| {
                AppError::Validation("Request body must be a JSON object".to_string())
            }),
        None => body_object(body),
    }
}

/// Parses a bulk-replace body `{"data": [...]}`. Every entry is validated
/// before the collection is touched; a failing entry is reported with its
/// position, so a bad list leaves the store unchanged.
fn parse_replace_list<T: Resource>(body: &Value) -> Result<Vec<T>, AppError> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Validation("Missing fields: data".to_string()))?;

    data.iter()
        .enumerate()
        .map(|(i, entry)| {
            let fields = entry.as_object().ok_or_else(|| {
                AppError::Validation(format!("data[{i}]: expected an object"))
            })?;
            T::from_fields(fields).map_err(|e| match e {
                AppError::Validation(msg) => AppError::Validation(format!("data[{i}]: {msg}")),
                other => other,
            })
        })
        .collect()
}

/// Serializes a record with its positional id attached, as the project
/// routes return it.
fn with_id(record: &Project, id: &str) -> Result<Value, AppError> {
    let mut value = serde_json::to_value(record).map_err(|e| AppError::Internal(e.into()))?;
    if let Some(object) = value.as_object_mut() {
        object.insert("id".to_string(), json!(id));
    }
    Ok(value)
}

// ────────────────────────────────────────────────────────────────────────────
// /resume/user — identity by email address, not position
// ────────────────────────────────────────────────────────────────────────────

/// GET /resume/user
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(read_store(&state.store)?.user.list()))
}

/// POST /resume/user
///
/// Appends a new user. The phone number must carry an international
/// country code.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = User::from_fields(body_object(&body)?)?;
    if !check_phone_number(&user.phone_number) {
        return Err(AppError::Validation("Incorrect phone number !".to_string()));
    }

    write_store(&state.store)?.user.push(user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /resume/user
///
/// Replaces the user whose email address matches the body. Never creates:
/// an unknown email is a 404 and the collection is left untouched.
pub async fn update_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<User>, AppError> {
    let user = User::from_fields(body_object(&body)?)?;

    let mut store = write_store(&state.store)?;
    let index = store
        .user
        .find_by_email(&user.email_address)
        .ok_or_else(|| AppError::NotFound("User not found !".to_string()))?;

    if !check_phone_number(&user.phone_number) {
        return Err(AppError::Validation("Incorrect phone number !".to_string()));
    }

    Ok(Json(store.user.replace_at(index, user)))
}

// ────────────────────────────────────────────────────────────────────────────
// /resume/experience, /resume/education, /resume/skill — positional CRUD
// with whole-list replace for drag-and-drop reordering
// ────────────────────────────────────────────────────────────────────────────

/// GET /resume/experience
pub async fn get_experience(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let items = read_store(&state.store)?.experience.list();
    Ok(Json(json!({ "experience": items })))
}

/// POST /resume/experience
pub async fn create_experience(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (id, _) = write_store(&state.store)?
        .experience
        .create(create_fields(&body)?)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /resume/experience
pub async fn replace_experience(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<Experience>>, AppError> {
    let records = parse_replace_list::<Experience>(&body)?;
    let mut store = write_store(&state.store)?;
    store.experience.replace_all(records);
    Ok(Json(store.experience.list()))
}

/// GET /resume/education
pub async fn get_education(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let items = read_store(&state.store)?.education.list();
    Ok(Json(json!({ "education": items })))
}

/// POST /resume/education
pub async fn create_education(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (id, _) = write_store(&state.store)?
        .education
        .create(create_fields(&body)?)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /resume/education
pub async fn replace_education(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<Education>>, AppError> {
    let records = parse_replace_list::<Education>(&body)?;
    let mut store = write_store(&state.store)?;
    store.education.replace_all(records);
    Ok(Json(store.education.list()))
}

/// GET /resume/skill
pub async fn get_skills(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let items = read_store(&state.store)?.skill.list();
    Ok(Json(json!({ "skills": items })))
}

/// POST /resume/skill
pub async fn create_skill(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (id, _) = write_store(&state.store)?
        .skill
        .create(create_fields(&body)?)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /resume/skill
pub async fn replace_skills(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let records = parse_replace_list::<Skill>(&body)?;
    let mut store = write_store(&state.store)?;
    store.skill.replace_all(records);
    Ok(Json(store.skill.list()))
}

// ────────────────────────────────────────────────────────────────────────────
// /resume/project — id query parameter, field-by-field patch, delete
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProjectIdQuery {
    pub id: Option<String>,
}

/// GET /resume/project
///
/// Without `?id=`, the full ordered list. With it, the single record at
/// that position, id attached.
pub async fn get_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectIdQuery>,
) -> Result<Json<Value>, AppError> {
    let store = read_store(&state.store)?;
    match query.id.as_deref() {
        None => Ok(Json(json!(store.project.list()))),
        Some(id) => {
            let (_, record) = store.project.get(Some(id))?;
            Ok(Json(with_id(&record, id)?))
        }
    }
}

/// POST /resume/project
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (id, record) = write_store(&state.store)?
        .project
        .create(body_object(&body)?)?;
    Ok((StatusCode::CREATED, Json(with_id(&record, &id)?)))
}

/// PUT /resume/project?id=N
///
/// Partial update: each body key overwrites that field; the first key
/// outside the project field set fails the request, with earlier fields
/// left applied.
pub async fn edit_project(
    State(state): State<AppState>,
    Query(query): Query<ProjectIdQuery>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let updates = body_object(&body)?;
    let (_, record) = write_store(&state.store)?
        .project
        .patch(query.id.as_deref(), updates)?;
    // resolve_id succeeded, so the token is present; echo it back as given
    let id = query.id.as_deref().unwrap_or_default();
    Ok(Json(with_id(&record, id)?))
}

/// DELETE /resume/project?id=N
pub async fn delete_project(
    State(state): State<AppState>,
    Query(query): Query<ProjectIdQuery>,
) -> Result<StatusCode, AppError> {
    write_store(&state.store)?
        .project
        .delete(query.id.as_deref())?;
    Ok(StatusCode::NO_CONTENT)
}
