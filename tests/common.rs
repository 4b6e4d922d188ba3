#![allow(dead_code)]
use chrono::NaiveDate;
use rplanner::core::validate::EntryDraft;
use rplanner::errors::{AppError, AppResult};
use rplanner::export::{ArtifactRef, DocumentPayload, DocumentRenderer};
use rplanner::{EntryRepository, Identity, Session, SqliteStore};

/// Repository over a fresh in-memory store, one per test.
pub fn mem_repo() -> EntryRepository<SqliteStore> {
    EntryRepository::new(SqliteStore::open_in_memory().expect("in-memory store"))
}

/// Identity collaborator stub: authenticated iff a user id is present.
pub struct TestIdentity(pub Option<String>);

impl Identity for TestIdentity {
    fn current_user(&self) -> Option<String> {
        self.0.clone()
    }
}

pub fn session(user_id: &str) -> Session {
    Session::open(&TestIdentity(Some(user_id.to_string()))).expect("session")
}

pub fn date(s: &str) -> NaiveDate {
    rplanner::utils::date::parse_date(s).expect("test date")
}

pub fn draft(names: &[&str], location: &str, start: &str, end: &str) -> EntryDraft {
    EntryDraft {
        names: names.iter().map(|n| n.to_string()).collect(),
        location: location.to_string(),
        start: Some(start.to_string()),
        end: Some(end.to_string()),
    }
}

/// Renderer collaborator stub: echoes the payload title as an artifact uri.
pub struct StubRenderer;

impl DocumentRenderer for StubRenderer {
    fn render(&self, payload: &DocumentPayload) -> AppResult<ArtifactRef> {
        Ok(ArtifactRef {
            uri: format!("stub://{}.{}", payload.title, payload.format.as_str()),
        })
    }
}

/// Renderer collaborator stub that always fails remotely.
pub struct FailingRenderer;

impl DocumentRenderer for FailingRenderer {
    fn render(&self, _payload: &DocumentPayload) -> AppResult<ArtifactRef> {
        Err(AppError::Remote("print service unavailable".to_string()))
    }
}
