//! Integration tests for the resource client against an in-process axum
//! stand-in for the backend. Each test spawns its own instance on an
//! ephemeral port.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};

use horta_api::models::{
    Crop, CropKey, CropStatus, CropUpdate, Garden, Plot, PlotCreate, PlotStatus, PlotUpdate,
};
use horta_client::{ApiClient, ApiError, Config, Session, SessionStore};

const VALID_TOKEN: &str = "tok-123";

#[derive(Clone, Default)]
struct Backend {
    plots: Arc<Mutex<Vec<Value>>>,
    crop_paths: Arc<Mutex<Vec<String>>>,
    hits: Arc<AtomicUsize>,
}

impl Backend {
    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(State(backend): State<Backend>, Form(form): Form<LoginForm>) -> Response {
    backend.hit();
    if form.username == "ana@horta.org" && form.password == "segredo" {
        Json(json!({
            "access_token": VALID_TOKEN,
            "token_type": "bearer",
            "nome_grupo": "ADMIN",
        }))
        .into_response()
    } else {
        (StatusCode::BAD_REQUEST, "Usuário ou senha incorretos").into_response()
    }
}

async fn list_plots(State(backend): State<Backend>) -> Json<Value> {
    backend.hit();
    Json(Value::Array(backend.plots.lock().unwrap().clone()))
}

async fn create_plot(
    State(backend): State<Backend>,
    Json(mut payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.hit();
    let mut plots = backend.plots.lock().unwrap();
    let record = payload.as_object_mut().unwrap();
    record.insert("id_parcela".to_string(), json!(plots.len() as i64 + 1));
    record.entry("status").or_insert(json!("Livre"));
    plots.push(payload.clone());
    (StatusCode::CREATED, Json(payload))
}

async fn update_plot(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Response {
    backend.hit();
    let mut plots = backend.plots.lock().unwrap();
    match plots.iter_mut().find(|p| p["id_parcela"] == json!(id)) {
        Some(record) => {
            let fields = record.as_object_mut().unwrap();
            for (key, value) in patch.as_object().unwrap() {
                fields.insert(key.clone(), value.clone());
            }
            Json(record.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Parcela não encontrada").into_response(),
    }
}

async fn delete_plot(State(backend): State<Backend>, Path(id): Path<i64>) -> Response {
    backend.hit();
    let mut plots = backend.plots.lock().unwrap();
    let before = plots.len();
    plots.retain(|p| p["id_parcela"] != json!(id));
    if plots.len() < before {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, "Parcela não encontrada").into_response()
    }
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h == format!("Bearer {VALID_TOKEN}"))
}

async fn list_gardens(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    backend.hit();
    if !bearer_ok(&headers) {
        return (StatusCode::UNAUTHORIZED, "Token inválido ou expirado").into_response();
    }
    Json(json!([{
        "id_horta": "0b0e9cbe-41b5-4f29-9701-9ad2f2b5f3a4",
        "nome": "Horta Central",
        "localizacao": "Centro",
        "data_criacao": "2024-01-10",
    }]))
    .into_response()
}

async fn update_crop(
    State(backend): State<Backend>,
    Path((product, plot, date)): Path<(i64, i64, String)>,
    Json(patch): Json<Value>,
) -> Json<Value> {
    backend.hit();
    backend
        .crop_paths
        .lock()
        .unwrap()
        .push(format!("{product}/{plot}/{date}"));
    Json(json!({
        "id_produto": product,
        "id_parcela": plot,
        "data_plantio": date,
        "status_cultivo": patch["status_cultivo"].as_str().unwrap_or("Plantado"),
    }))
}

async fn delete_crop(
    State(backend): State<Backend>,
    Path((product, plot, date)): Path<(i64, i64, String)>,
) -> StatusCode {
    backend.hit();
    backend
        .crop_paths
        .lock()
        .unwrap()
        .push(format!("{product}/{plot}/{date}"));
    StatusCode::NO_CONTENT
}

async fn me(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    backend.hit();
    if !bearer_ok(&headers) {
        return (StatusCode::UNAUTHORIZED, "Token inválido ou expirado").into_response();
    }
    Json(json!({
        "id_usuario": "5f2c0d8e-1111-4222-8333-9ad2f2b5f3a4",
        "nome": "Ana",
        "email": "ana@horta.org",
        "telefone": null,
        "id_grupo": 1,
    }))
    .into_response()
}

fn router(backend: Backend) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/parcelas", get(list_plots).post(create_plot))
        .route("/parcelas/{id}", put(update_plot).delete(delete_plot))
        .route("/hortas", get(list_gardens))
        .route("/cultivos/{product}/{plot}/{date}", put(update_crop).delete(delete_crop))
        .route("/usuarios/me", get(me))
        .with_state(backend)
}

async fn spawn_backend() -> (ApiClient, Backend) {
    let backend = Backend::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(backend.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = Config::new(format!("http://{addr}"), "unused.json");
    (ApiClient::new(&config), backend)
}

fn plot_payload(location: &str, size_m2: f64) -> PlotCreate {
    PlotCreate {
        location: location.to_string(),
        size_m2,
        status: None,
    }
}

#[tokio::test]
async fn create_then_list_includes_the_record() {
    let (client, _backend) = spawn_backend().await;

    let created: Plot = client
        .create(None, &plot_payload("Setor A", 10.0))
        .await
        .unwrap();
    assert_eq!(created.location, "Setor A");

    let plots: Vec<Plot> = client.list(None).await.unwrap();
    assert!(
        plots
            .iter()
            .any(|p| p.location == "Setor A" && p.size_m2 == 10.0)
    );
}

#[tokio::test]
async fn update_returns_and_persists_exact_fields() {
    let (client, _backend) = spawn_backend().await;
    for i in 1..=3 {
        let _: Plot = client
            .create(None, &plot_payload(&format!("Setor {i}"), 8.0))
            .await
            .unwrap();
    }

    let patch = PlotUpdate {
        location: Some("Setor B".to_string()),
        size_m2: Some(12.5),
        status: Some(PlotStatus::Free),
    };
    let updated: Plot = client.update(None, &3, &patch).await.unwrap();
    assert_eq!(updated.id, 3);
    assert_eq!(updated.location, "Setor B");
    assert_eq!(updated.size_m2, 12.5);
    assert_eq!(updated.status, Some(PlotStatus::Free));

    let plots: Vec<Plot> = client.list(None).await.unwrap();
    let third = plots.iter().find(|p| p.id == 3).unwrap();
    assert_eq!(third.location, "Setor B");
    assert_eq!(third.size_m2, 12.5);
    assert_eq!(third.status, Some(PlotStatus::Free));
}

#[tokio::test]
async fn delete_treats_204_as_success() {
    let (client, _backend) = spawn_backend().await;
    let _: Plot = client
        .create(None, &plot_payload("Setor A", 10.0))
        .await
        .unwrap();

    client.remove::<Plot>(None, &1).await.unwrap();
    let plots: Vec<Plot> = client.list(None).await.unwrap();
    assert!(plots.is_empty());
}

#[tokio::test]
async fn delete_missing_record_surfaces_the_body_text() {
    let (client, _backend) = spawn_backend().await;

    let err = client.remove::<Plot>(None, &42).await.unwrap_err();
    match err {
        ApiError::RequestFailed { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "Parcela não encontrada");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn protected_list_without_session_never_reaches_the_server() {
    let (client, backend) = spawn_backend().await;

    let err = client.list::<Garden>(None).await.unwrap_err();
    assert!(matches!(err, ApiError::AuthRequired));
    assert_eq!(backend.hit_count(), 0);
}

#[tokio::test]
async fn bearer_token_is_attached_for_protected_resources() {
    let (client, _backend) = spawn_backend().await;

    let session = client.login("ana@horta.org", "segredo").await.unwrap();
    let gardens: Vec<Garden> = client.list(Some(&session)).await.unwrap();
    assert_eq!(gardens.len(), 1);
    assert_eq!(gardens[0].name, "Horta Central");
}

#[tokio::test]
async fn login_success_persists_token_and_group() {
    let (client, _backend) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("session.json"));

    let session = client.login("ana@horta.org", "segredo").await.unwrap();
    assert_eq!(session.token, VALID_TOKEN);
    assert_eq!(session.group.as_deref(), Some("ADMIN"));

    store.save(&session).unwrap();
    assert_eq!(store.load().unwrap(), Some(session));
}

#[tokio::test]
async fn login_failure_stores_nothing() {
    let (client, _backend) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("session.json"));

    let err = client.login("ana@horta.org", "errada").await.unwrap_err();
    match err {
        ApiError::RequestFailed { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(body, "Usuário ou senha incorretos");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn composite_key_expands_to_route_segments() {
    let (client, backend) = spawn_backend().await;

    let key = CropKey {
        product_id: 2,
        plot_id: 7,
        planted_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    };
    let patch = CropUpdate {
        status: Some(CropStatus::Growing),
    };
    let updated: Crop = client.update(None, &key, &patch).await.unwrap();
    assert_eq!(updated.status, CropStatus::Growing);

    client.remove::<Crop>(None, &key).await.unwrap();

    let paths = backend.crop_paths.lock().unwrap().clone();
    assert_eq!(paths, vec!["2/7/2024-05-01", "2/7/2024-05-01"]);
}

#[tokio::test]
async fn me_returns_the_profile_behind_the_token() {
    let (client, _backend) = spawn_backend().await;

    let session = client.login("ana@horta.org", "segredo").await.unwrap();
    let profile = client.me(&session).await.unwrap();
    assert_eq!(profile.email, "ana@horta.org");

    let stale = Session::new("expirado", None);
    let err = client.me(&stale).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::RequestFailed { status, .. } if status.as_u16() == 401
    ));
}
