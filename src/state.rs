use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{NormalizedPayload, ShareOptions};

/// Lifecycle of one share invocation: created pending, settled exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for the user to pick a target.
    Pending,
    /// A target was dispatched and its render result returned.
    Resolved,
    /// The user dismissed the sheet, or dispatch failed.
    Rejected,
}

#[derive(Debug)]
struct ShareSession {
    payload: NormalizedPayload,
    options: ShareOptions,
    status: SessionStatus,
}

/// In-flight share operations, keyed by the handle returned from
/// `begin_share`. Managed as plugin state; nothing survives the app run.
#[derive(Debug, Default)]
pub struct ShareSessions {
    sessions: Mutex<HashMap<String, ShareSession>>,
}

impl ShareSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a pending session and returns its handle.
    pub fn begin(&self, payload: NormalizedPayload, options: ShareOptions) -> String {
        let id = Uuid::new_v4().to_string();
        let mut sessions = self.lock();
        sessions.insert(
            id.clone(),
            ShareSession {
                payload,
                options,
                status: SessionStatus::Pending,
            },
        );
        id
    }

    /// The payload and options of a still-pending session. Settled or
    /// unknown handles surface the matching error.
    pub fn pending_snapshot(&self, id: &str) -> Result<(NormalizedPayload, ShareOptions)> {
        let sessions = self.lock();
        let session = sessions
            .get(id)
            .ok_or_else(|| Error::UnknownSession(id.to_string()))?;
        match session.status {
            SessionStatus::Pending => Ok((session.payload.clone(), session.options.clone())),
            SessionStatus::Rejected => Err(Error::Cancelled),
            SessionStatus::Resolved => Err(Error::SessionClosed(id.to_string())),
        }
    }

    /// Marks a session resolved after a successful dispatch.
    pub fn mark_resolved(&self, id: &str) {
        self.settle(id, SessionStatus::Resolved);
    }

    /// Marks a session rejected after a failed dispatch.
    pub fn mark_rejected(&self, id: &str) {
        self.settle(id, SessionStatus::Rejected);
    }

    /// User dismissal. Repeating a cancel is harmless; cancelling an already
    /// resolved session is an error the frontend should know about.
    pub fn cancel(&self, id: &str) -> Result<()> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| Error::UnknownSession(id.to_string()))?;
        match session.status {
            SessionStatus::Pending | SessionStatus::Rejected => {
                session.status = SessionStatus::Rejected;
                Ok(())
            }
            SessionStatus::Resolved => Err(Error::SessionClosed(id.to_string())),
        }
    }

    /// Drops every settled session, returning how many were removed.
    pub fn purge_settled(&self) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| session.status == SessionStatus::Pending);
        before - sessions.len()
    }

    fn settle(&self, id: &str, status: SessionStatus) {
        let mut sessions = self.lock();
        if let Some(session) = sessions.get_mut(id) {
            if session.status == SessionStatus::Pending {
                session.status = status;
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, ShareSession>> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
