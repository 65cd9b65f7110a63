use crate::customer::CustomerInput;
use crate::scoring::Probability;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Opaque identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

/// Latest score produced for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub probability: Probability,
    pub predicted_at: DateTime<Utc>,
}

/// Everything the dashboard remembers between two interactions of one operator.
#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    last_prediction: Option<PredictionResult>,
    widgets: CustomerInput,
}

impl DashboardSession {
    pub fn last_prediction(&self) -> Option<PredictionResult> {
        self.last_prediction
    }

    /// Replaces any earlier prediction.
    pub fn record_prediction(&mut self, result: PredictionResult) {
        self.last_prediction = Some(result);
    }

    pub fn widgets(&self) -> &CustomerInput {
        &self.widgets
    }

    pub fn set_widgets(&mut self, input: CustomerInput) {
        self.widgets = input;
    }
}

struct SessionEntry {
    session: DashboardSession,
    last_seen: DateTime<Utc>,
}

/// Per-operator session state; nothing here is shared between sessions.
pub struct SessionStore {
    entries: Mutex<HashMap<SessionId, SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Touches the requested session if it is still live. Never creates one,
    /// so read-only visitors leave no state behind.
    pub fn resume(&self, requested: Option<SessionId>) -> Option<SessionId> {
        self.resume_at(requested, Utc::now())
    }

    pub(crate) fn resume_at(
        &self,
        requested: Option<SessionId>,
        now: DateTime<Utc>,
    ) -> Option<SessionId> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        self.touch(&mut entries, requested, now)
    }

    /// Resumes the requested session or starts a fresh one. The flag is `true`
    /// when a new session was created.
    pub fn open(&self, requested: Option<SessionId>) -> (SessionId, bool) {
        self.open_at(requested, Utc::now())
    }

    pub(crate) fn open_at(
        &self,
        requested: Option<SessionId>,
        now: DateTime<Utc>,
    ) -> (SessionId, bool) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = self.touch(&mut entries, requested, now) {
            return (id, false);
        }

        let id = SessionId::generate();
        entries.insert(
            id,
            SessionEntry {
                session: DashboardSession::default(),
                last_seen: now,
            },
        );
        (id, true)
    }

    fn touch(
        &self,
        entries: &mut HashMap<SessionId, SessionEntry>,
        requested: Option<SessionId>,
        now: DateTime<Utc>,
    ) -> Option<SessionId> {
        let idle_timeout = self.idle_timeout;
        entries.retain(|_, entry| now - entry.last_seen <= idle_timeout);

        let id = requested?;
        let entry = entries.get_mut(&id)?;
        entry.last_seen = now;
        Some(id)
    }

    /// Runs `update` against the session, recreating it if it was purged
    /// between `open` and this call.
    pub fn update<T>(&self, id: SessionId, update: impl FnOnce(&mut DashboardSession) -> T) -> T {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(id).or_insert_with(|| SessionEntry {
            session: DashboardSession::default(),
            last_seen: Utc::now(),
        });
        update(&mut entry.session)
    }

    pub fn snapshot(&self, id: SessionId) -> DashboardSession {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&id)
            .map(|entry| entry.session.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probability(value: f64) -> Probability {
        Probability::new(value).expect("valid probability")
    }

    #[test]
    fn new_session_has_no_prediction() {
        let store = SessionStore::new(Duration::minutes(30));
        let (id, created) = store.open(None);

        assert!(created);
        assert!(store.snapshot(id).last_prediction().is_none());
    }

    #[test]
    fn prediction_is_overwritten_and_kept_per_session() {
        let store = SessionStore::new(Duration::minutes(30));
        let (first, _) = store.open(None);
        let (second, _) = store.open(None);
        let now = Utc::now();

        store.update(first, |session| {
            session.record_prediction(PredictionResult {
                probability: probability(0.2),
                predicted_at: now,
            })
        });
        store.update(first, |session| {
            session.record_prediction(PredictionResult {
                probability: probability(0.7),
                predicted_at: now,
            })
        });

        let latest = store
            .snapshot(first)
            .last_prediction()
            .expect("prediction stored");
        assert_eq!(latest.probability.value(), 0.7);
        assert!(store.snapshot(second).last_prediction().is_none());
    }

    #[test]
    fn unknown_session_id_starts_fresh() {
        let store = SessionStore::new(Duration::minutes(30));
        let (id, created) = store.open(Some(SessionId::generate()));
        assert!(created);
        let (again, created_again) = store.open(Some(id));
        assert_eq!(again, id);
        assert!(!created_again);
    }

    #[test]
    fn idle_sessions_are_purged() {
        let store = SessionStore::new(Duration::minutes(30));
        let start = Utc::now();
        let (id, _) = store.open_at(None, start);

        let (resumed, created) = store.open_at(Some(id), start + Duration::minutes(31));

        assert!(created);
        assert_ne!(resumed, id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resume_never_creates_sessions() {
        let store = SessionStore::new(Duration::minutes(30));
        assert_eq!(store.resume(None), None);
        assert_eq!(store.resume(Some(SessionId::generate())), None);
        assert!(store.is_empty());

        let (id, _) = store.open(None);
        assert_eq!(store.resume(Some(id)), Some(id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resume_drops_idle_sessions() {
        let store = SessionStore::new(Duration::minutes(30));
        let start = Utc::now();
        let (id, _) = store.open_at(None, start);

        assert_eq!(store.resume_at(Some(id), start + Duration::minutes(31)), None);
        assert!(store.is_empty());
    }

    #[test]
    fn session_id_round_trips_through_text() {
        let id = SessionId::generate();
        assert_eq!(SessionId::parse(&id.to_string()), Some(id));
        assert_eq!(SessionId::parse("not-a-session"), None);
    }
}
