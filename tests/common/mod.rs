#![allow(dead_code)]

use axum::extract::ConnectInfo;
use short_url::domain::IdGenerator;
use short_url::domain::repositories::UrlRepository;
use short_url::infrastructure::cache::NullCache;
use short_url::infrastructure::persistence::{InMemoryUrlRepository, PgUrlRepository};
use short_url::state::AppState;
use short_url::utils::id_generator::OsIdGenerator;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const TEST_MAX_ATTEMPTS: usize = 3;

/// State over an empty in-memory store with caching disabled.
pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(InMemoryUrlRepository::new()))
}

/// State over a migrated test database.
pub fn create_pg_test_state(pool: PgPool) -> AppState {
    create_state_with(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

pub fn create_state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    let id_generator: Arc<dyn IdGenerator> = Arc::new(OsIdGenerator);
    AppState::new(
        repository,
        id_generator,
        Arc::new(NullCache::new()),
        TEST_MAX_ATTEMPTS,
    )
}

pub async fn insert_test_url(pool: &PgPool, id: &str, url: &str) {
    sqlx::query("INSERT INTO url (id, original_url) VALUES ($1, $2)")
        .bind(id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a fixed peer address so the per-IP limiter has a key.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
