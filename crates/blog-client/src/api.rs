//! HTTP port for the posts resource, and its reqwest adapter.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use blog_core::domain::Post;
use blog_shared::MessageResponse;
use blog_shared::dto::PostPayload;

use crate::error::ClientError;

/// The five calls the list client makes against the server.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>, ClientError>;

    async fn create(&self, payload: &PostPayload) -> Result<Post, ClientError>;

    async fn update(&self, id: i64, payload: &PostPayload) -> Result<Post, ClientError>;

    async fn delete(&self, id: i64) -> Result<MessageResponse, ClientError>;
}

#[async_trait]
impl<T: PostsApi + ?Sized> PostsApi for &T {
    async fn list(&self) -> Result<Vec<Post>, ClientError> {
        (**self).list().await
    }

    async fn create(&self, payload: &PostPayload) -> Result<Post, ClientError> {
        (**self).create(payload).await
    }

    async fn update(&self, id: i64, payload: &PostPayload) -> Result<Post, ClientError> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: i64) -> Result<MessageResponse, ClientError> {
        (**self).delete(id).await
    }
}

/// `PostsApi` over HTTP, rooted at the API prefix (e.g. `http://127.0.0.1:5000/api/`).
#[derive(Clone, Debug)]
pub struct HttpPostsApi {
    client: Client,
    base: Url,
}

impl HttpPostsApi {
    pub fn new(base: &str) -> Result<Self, ClientError> {
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Self::with_client(client, base)
    }

    pub fn with_client(client: Client, base: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base)?;
        // `join` drops the last segment unless the base ends in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("blog-client/", env!("CARGO_PKG_VERSION"))
    }

    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base.join(path).map_err(ClientError::Url)
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            // Both `{message}` and `{success, message}` bodies carry `message`.
            let message = serde_json::from_slice::<MessageResponse>(&bytes)
                .map(|body| body.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list(&self) -> Result<Vec<Post>, ClientError> {
        let resp = self.client.get(self.url("posts")?).send().await?;
        Self::handle(resp).await
    }

    async fn create(&self, payload: &PostPayload) -> Result<Post, ClientError> {
        let resp = self
            .client
            .post(self.url("posts")?)
            .json(payload)
            .send()
            .await?;
        Self::handle(resp).await
    }

    async fn update(&self, id: i64, payload: &PostPayload) -> Result<Post, ClientError> {
        let resp = self
            .client
            .put(self.url(&format!("posts/{id}"))?)
            .json(payload)
            .send()
            .await?;
        Self::handle(resp).await
    }

    async fn delete(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("posts/{id}"))?)
            .send()
            .await?;
        Self::handle(resp).await
    }
}
