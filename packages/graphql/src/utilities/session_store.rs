use dashmap::DashMap;
use services::FormSession;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a session may sit untouched before it counts as abandoned
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    session: FormSession,
    last_touched: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            session: FormSession::new(),
            last_touched: Instant::now(),
        }
    }

    fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_touched) >= ttl
    }
}

/// In-memory store of live form sessions.
///
/// Each session is owned by its entry: [`FormSessions::with_session`] holds the
/// entry exclusively while an intent runs, so intents on one session never
/// interleave. A session no intent has touched for the store's ttl is
/// abandoned: lookups treat it as gone and `create` sweeps it out.
#[derive(Clone)]
pub struct FormSessions {
    sessions: Arc<DashMap<Uuid, SessionEntry>>,
    ttl: Duration,
}

impl FormSessions {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn create(&self) -> Uuid {
        self.sweep();

        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionEntry::new());
        tracing::debug!(session_id = %id, "form session created");
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<FormSession> {
        self.expire_if_idle(id);
        self.sessions.get(id).map(|entry| entry.session.clone())
    }

    /// Run `f` on the session and mark it as touched.
    pub fn with_session<T>(&self, id: &Uuid, f: impl FnOnce(&mut FormSession) -> T) -> Option<T> {
        self.expire_if_idle(id);
        self.sessions.get_mut(id).map(|mut entry| {
            entry.last_touched = Instant::now();
            f(&mut entry.session)
        })
    }

    pub fn discard(&self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::debug!(session_id = %id, "form session discarded");
        }
        removed
    }

    /// Drop every idle session and return how many were dropped.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !entry.is_idle(now, self.ttl));

        let swept = before.saturating_sub(self.sessions.len());
        if swept > 0 {
            tracing::info!(swept, "abandoned form sessions dropped");
        }
        swept
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn expire_if_idle(&self, id: &Uuid) {
        let now = Instant::now();
        if self
            .sessions
            .remove_if(id, |_, entry| entry.is_idle(now, self.ttl))
            .is_some()
        {
            tracing::debug!(session_id = %id, "form session expired");
        }
    }
}

impl Default for FormSessions {
    fn default() -> Self {
        Self::new()
    }
}
