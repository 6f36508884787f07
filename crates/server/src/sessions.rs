//! In-memory per-browser checkout sessions, keyed by a cookie.

use std::{collections::HashMap, sync::Arc, time::Instant};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use checkout::{CheckoutFlow, Effect};
use shared::{domain::Language, protocol::OrderDraft};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "alphatv_session";

#[derive(Debug)]
pub struct Session {
    pub flow: CheckoutFlow,
    pub language: Language,
    /// Form values kept across a failed or rejected submit.
    pub draft: OrderDraft,
    /// Inline message raised by the server rather than the gateway.
    pub notice: Option<String>,
    /// Consumed by the next rendered page.
    pub pending_effect: Option<Effect>,
    last_seen: Instant,
}

impl Session {
    fn new(language: Language) -> Self {
        Self {
            flow: CheckoutFlow::new(),
            language,
            draft: OrderDraft::default(),
            notice: None,
            pending_effect: None,
            last_seen: Instant::now(),
        }
    }

    /// Inline error for the order form: a server notice wins over the last
    /// gateway failure.
    pub fn form_error(&self) -> Option<String> {
        self.notice
            .clone()
            .or_else(|| self.flow.last_error().map(str::to_string))
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    max_sessions: usize,
    default_language: Language,
}

impl SessionStore {
    pub fn new(max_sessions: usize, default_language: Language) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            default_language,
        }
    }

    /// Runs `f` against the session, creating it on first use. The lock is
    /// held only for the duration of `f`, which must not block.
    pub async fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.inner.write().await;
        if !sessions.contains_key(&id) && sessions.len() >= self.max_sessions {
            evict_least_recent(&mut sessions);
        }
        let session = sessions
            .entry(id)
            .or_insert_with(|| Session::new(self.default_language));
        session.last_seen = Instant::now();
        f(session)
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.inner.read().await.contains_key(&id)
    }
}

fn evict_least_recent(sessions: &mut HashMap<Uuid, Session>) {
    let oldest = sessions
        .iter()
        .min_by_key(|(_, session)| session.last_seen)
        .map(|(id, _)| *id);
    if let Some(id) = oldest {
        sessions.remove(&id);
        debug!(session = %id, "evicted least recently used session");
    }
}

/// Reads the session id from the cookie jar, issuing a new cookie when it is
/// missing or malformed.
pub fn session_from_jar(jar: CookieJar) -> (CookieJar, Uuid) {
    if let Some(id) = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    {
        return (jar, id);
    }

    let id = Uuid::new_v4();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), id)
}
