use horta_api::models::User;
use horta_api::{Resource, ResourceKey};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::session::Session;

/// Generic client over the backend's CRUD verbs.
///
/// Holds no record state: every successful mutation is expected to be
/// followed by a fresh `list` from the caller.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    // Not every backend build sends the group name.
    #[serde(default)]
    nome_grupo: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn record_url(&self, path: &str, key: &impl ResourceKey) -> String {
        format!("{}/{}/{}", self.base_url, path, key.as_path())
    }

    /// Attaches the bearer token. A missing session fails protected
    /// resources here, before any request is built or sent; unprotected
    /// resources still get the token when one is available, matching the
    /// original pages that forward it everywhere once logged in.
    fn authorize<R: Resource>(
        &self,
        request: RequestBuilder,
        session: Option<&Session>,
    ) -> Result<RequestBuilder, ApiError> {
        match session {
            Some(session) => Ok(request.bearer_auth(&session.token)),
            None if R::PROTECTED => {
                warn!("no session for protected resource {}", R::PATH);
                Err(ApiError::AuthRequired)
            }
            None => Ok(request),
        }
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    /// GET `{base}/{resource}`.
    pub async fn list<R: Resource>(&self, session: Option<&Session>) -> Result<Vec<R>, ApiError> {
        let url = self.collection_url(R::PATH);
        info!("GET {}", url);
        let request = self.authorize::<R>(self.http.get(&url), session)?;
        Self::read_json(request.send().await?).await
    }

    /// GET `{base}/{resource}/{key}`.
    pub async fn get<R: Resource>(
        &self,
        session: Option<&Session>,
        key: &R::Key,
    ) -> Result<R, ApiError> {
        let url = self.record_url(R::PATH, key);
        info!("GET {}", url);
        let request = self.authorize::<R>(self.http.get(&url), session)?;
        Self::read_json(request.send().await?).await
    }

    /// POST `{base}/{resource}` with a JSON body.
    pub async fn create<R: Resource>(
        &self,
        session: Option<&Session>,
        payload: &R::Create,
    ) -> Result<R, ApiError> {
        let url = self.collection_url(R::PATH);
        info!("POST {}", url);
        let request = self.authorize::<R>(self.http.post(&url).json(payload), session)?;
        Self::read_json(request.send().await?).await
    }

    /// PUT `{base}/{resource}/{key}` with a JSON body. Composite keys
    /// expand into one path segment per column.
    pub async fn update<R: Resource>(
        &self,
        session: Option<&Session>,
        key: &R::Key,
        payload: &R::Update,
    ) -> Result<R, ApiError> {
        let url = self.record_url(R::PATH, key);
        info!("PUT {}", url);
        let request = self.authorize::<R>(self.http.put(&url).json(payload), session)?;
        Self::read_json(request.send().await?).await
    }

    /// DELETE `{base}/{resource}/{key}`.
    ///
    /// 204 is success with no body to parse. Other 2xx codes may carry a
    /// body, which is drained and ignored.
    pub async fn remove<R: Resource>(
        &self,
        session: Option<&Session>,
        key: &R::Key,
    ) -> Result<(), ApiError> {
        let url = self.record_url(R::PATH, key);
        info!("DELETE {}", url);
        let request = self.authorize::<R>(self.http.delete(&url), session)?;
        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        if status.is_success() {
            response.text().await.ok();
            return Ok(());
        }
        Err(ApiError::from_response(response).await)
    }

    /// POST `/login` with form-encoded credentials (OAuth2 password form,
    /// not JSON). On success the returned session carries the bearer token
    /// and, when the backend sends it, the group name.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let url = self.collection_url("login");
        info!("POST {}", url);
        let params = [("username", username), ("password", password)];
        let response = self.http.post(&url).form(&params).send().await?;

        if !response.status().is_success() {
            warn!("login failed for user: {}", username);
            return Err(ApiError::from_response(response).await);
        }
        let body: LoginResponse = response.json().await?;
        Ok(Session::new(body.access_token, body.nome_grupo))
    }

    /// GET `/usuarios/me`: the profile behind the presented token.
    pub async fn me(&self, session: &Session) -> Result<User, ApiError> {
        let url = format!("{}/usuarios/me", self.base_url);
        info!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&session.token)
            .send()
            .await?;
        Self::read_json(response).await
    }
}
