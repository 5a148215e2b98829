use std::{collections::HashMap, sync::Arc};

use axum::{
    body::{Body, Bytes},
    extract::{Multipart, Path, Query, RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePet {
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub tag: Option<String>,
    pub limit: Option<usize>,
}

/// What the server saw on `/echo`, returned as JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub query: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Pet>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/pets", get(list_pets).post(create_pet))
        .route("/pets/{id}", get(get_pet).delete(delete_pet))
        .route("/echo", any(echo))
        .route("/upload", post(upload))
        .route("/status/{code}", any(status))
        .route("/greeting", get(greeting))
        .route("/broken-json", get(broken_json))
        .route("/untyped", get(untyped))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_pets(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Pet>> {
    let pets = db.read().await;
    let mut matching: Vec<Pet> = pets
        .values()
        .filter(|pet| params.tag.is_none() || pet.tag == params.tag)
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.name.cmp(&b.name));
    if let Some(limit) = params.limit {
        matching.truncate(limit);
    }
    Json(matching)
}

async fn create_pet(State(db): State<Db>, Json(input): Json<CreatePet>) -> impl IntoResponse {
    let pet = Pet {
        id: Uuid::new_v4(),
        name: input.name,
        tag: input.tag,
    };
    db.write().await.insert(pet.id, pet.clone());
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/pets/{}", pet.id))],
        Json(pet),
    )
}

async fn get_pet(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Pet>, StatusCode> {
    let pets = db.read().await;
    pets.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_pet(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    let mut pets = db.write().await;
    pets.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn echo(method: Method, RawQuery(query): RawQuery, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string())))
        .collect();
    Json(Echo {
        method: method.to_string(),
        query,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn upload(mut multipart: Multipart) -> Result<Json<Map<String, Value>>, StatusCode> {
    let mut fields = Map::new();
    while let Some(field) = multipart.next_field().await.map_err(|_| StatusCode::BAD_REQUEST)? {
        let name = field.name().unwrap_or_default().to_string();
        let text = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        fields.insert(name, Value::String(text));
    }
    Ok(Json(fields))
}

async fn status(Path(code): Path<u16>) -> Result<Response, StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(json!({ "status": code }))).into_response())
}

async fn greeting() -> &'static str {
    "hello"
}

async fn broken_json() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{not json")
}

async fn untyped() -> Response {
    Body::from("no content type").into_response()
}
