use tauri::{command, AppHandle, Runtime};

use crate::locale::{self, LocaleBundle};
use crate::models::{
    BeginShareResponse, PageContext, RenderResult, SharePayload, ShareOptions, TargetInfo,
};
use crate::{error, WebShareExt};

/// Normalizes the payload, opens a pending share session and returns the
/// rows the frontend needs to render its picker. Rejects right away when the
/// payload has no usable title or text.
#[command]
pub async fn begin_share<R: Runtime>(
    app: AppHandle<R>,
    payload: SharePayload,
    page: PageContext,
    options: Option<ShareOptions>,
) -> Result<BeginShareResponse, error::Error> {
    let options = options.unwrap_or_default();
    let registry = app.share_targets();
    let normalized = registry.normalize(payload, &page)?;
    let targets = registry.list_available(&normalized, &options);
    let session = app.share_sessions().begin(normalized.clone(), options);
    Ok(BeginShareResponse {
        session,
        payload: normalized,
        targets,
    })
}

/// Re-queries the available targets for a pending session.
#[command]
pub async fn list_targets<R: Runtime>(
    app: AppHandle<R>,
    session: String,
) -> Result<Vec<TargetInfo>, error::Error> {
    let (payload, options) = app.share_sessions().pending_snapshot(&session)?;
    Ok(app.share_targets().list_available(&payload, &options))
}

/// The user picked a target: renders the session's payload through it and
/// settles the session. The frontend performs the returned navigation (or
/// consumes the custom value) itself.
#[command]
pub async fn dispatch<R: Runtime>(
    app: AppHandle<R>,
    session: String,
    target: String,
) -> Result<RenderResult, error::Error> {
    let sessions = app.share_sessions();
    let (payload, options) = sessions.pending_snapshot(&session)?;
    match app.share_targets().dispatch(&target, &payload, &options) {
        Ok(result) => {
            sessions.mark_resolved(&session);
            Ok(result)
        }
        Err(err) => {
            sessions.mark_rejected(&session);
            Err(err)
        }
    }
}

/// The user dismissed the share sheet without picking a target.
#[command]
pub async fn cancel_share<R: Runtime>(
    app: AppHandle<R>,
    session: String,
) -> Result<(), error::Error> {
    app.share_sessions().cancel(&session)
}

/// UI strings for the share sheet, resolved against the navigator locale.
#[command]
pub async fn locale_strings(
    requested: Option<String>,
    navigator: String,
) -> Result<LocaleBundle, error::Error> {
    Ok(locale::resolve(requested.as_deref(), &navigator))
}

/// Drops settled sessions; returns how many were removed.
#[command]
pub async fn cleanup<R: Runtime>(app: AppHandle<R>) -> Result<usize, error::Error> {
    Ok(app.share_sessions().purge_settled())
}
