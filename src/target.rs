use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::{NormalizedPayload, RenderResult, ShareField, ShareOptions, TargetInfo};

/// Decides whether a target should be offered for a given payload.
pub type CanShareFn = Arc<dyn Fn(&NormalizedPayload, &ShareOptions) -> bool + Send + Sync>;

/// Replaces URL rendering entirely; the returned value is forwarded to the
/// frontend verbatim as a `RenderResult::Custom`.
pub type CustomShareFn =
    Arc<dyn Fn(&NormalizedPayload, &ShareOptions) -> Result<serde_json::Value> + Send + Sync>;

/// Static configuration for a URL-template share target.
#[derive(Debug, Clone)]
pub struct ShareTargetConfig {
    /// Unique dispatch key.
    pub name: String,
    /// Display label; falls back to `name`.
    pub nice_name: Option<String>,
    /// Scheme and host, e.g. `https://t.me`.
    pub origin: String,
    /// Path after the origin, optionally with a pre-existing query,
    /// e.g. `share/url?` or `/mail/?view=cm&`.
    pub action: String,
    /// Opaque display markup for the picker; not interpreted here.
    pub icon: String,
    /// Abstract payload fields mapped to this destination's parameter names,
    /// emitted in declaration order.
    pub field_map: Vec<(ShareField, String)>,
}

enum TargetKind {
    Url {
        base_url: String,
        field_map: Vec<(ShareField, String)>,
    },
    Custom(CustomShareFn),
}

/// One external sharing destination. Immutable once constructed.
pub struct ShareTarget {
    name: String,
    nice_name: String,
    icon: String,
    can_share: Option<CanShareFn>,
    kind: TargetKind,
}

impl ShareTarget {
    /// Builds a URL-template target. Fails fast with [`Error::Config`] when a
    /// required field is missing; a broken entry in a static table is a
    /// programmer error, not a runtime condition.
    pub fn new(config: ShareTargetConfig) -> Result<Self> {
        if config.name.is_empty() {
            return Err(Error::Config("target name must not be empty".into()));
        }
        if config.origin.is_empty() || config.action.is_empty() {
            return Err(Error::Config(format!(
                "target {} needs both an origin and an action",
                config.name
            )));
        }
        if config.icon.is_empty() {
            return Err(Error::Config(format!("target {} has no icon", config.name)));
        }
        if config.field_map.is_empty() {
            return Err(Error::Config(format!(
                "target {} maps no payload fields",
                config.name
            )));
        }
        let nice_name = config.nice_name.unwrap_or_else(|| config.name.clone());
        Ok(Self {
            name: config.name,
            nice_name,
            icon: config.icon,
            can_share: None,
            kind: TargetKind::Url {
                base_url: join_base_url(&config.origin, &config.action),
                field_map: config.field_map,
            },
        })
    }

    /// Builds a target whose render is delegated to `handler` instead of a
    /// URL template.
    pub fn custom(
        name: impl Into<String>,
        nice_name: impl Into<String>,
        icon: impl Into<String>,
        handler: CustomShareFn,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Config("target name must not be empty".into()));
        }
        let icon = icon.into();
        if icon.is_empty() {
            return Err(Error::Config(format!("target {name} has no icon")));
        }
        Ok(Self {
            name,
            nice_name: nice_name.into(),
            icon,
            can_share: None,
            kind: TargetKind::Custom(handler),
        })
    }

    /// Attaches a predicate consulted when listing available targets.
    pub fn with_can_share(mut self, predicate: CanShareFn) -> Self {
        self.can_share = Some(predicate);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nice_name(&self) -> &str {
        &self.nice_name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The assembled URL prefix, always ending in `?` or `&` so `key=value`
    /// pairs can be appended directly. `None` for custom-handler targets.
    pub fn base_url(&self) -> Option<&str> {
        match &self.kind {
            TargetKind::Url { base_url, .. } => Some(base_url),
            TargetKind::Custom(_) => None,
        }
    }

    pub fn info(&self) -> TargetInfo {
        TargetInfo {
            name: self.name.clone(),
            nice_name: self.nice_name.clone(),
            icon: self.icon.clone(),
        }
    }

    pub fn is_available(&self, payload: &NormalizedPayload, options: &ShareOptions) -> bool {
        match &self.can_share {
            Some(predicate) => predicate(payload, options),
            None => true,
        }
    }

    /// Renders a normalized payload into this destination's action.
    ///
    /// Custom targets forward to their handler and return its result
    /// unchanged. URL targets emit one `param=value` pair per mapped field —
    /// empty values included, so destinations with fixed parameter lists see
    /// every parameter they declared — percent-encoded in the strict form
    /// (`!'()*` and space never survive bare). The `Files` field never
    /// reaches the query string: a present list is handed off as multipart
    /// data elsewhere, a missing one is logged and dropped.
    pub fn render(
        &self,
        payload: &NormalizedPayload,
        options: &ShareOptions,
    ) -> Result<RenderResult> {
        let (base_url, field_map) = match &self.kind {
            TargetKind::Custom(handler) => {
                log::debug!("share target {}: delegating to custom handler", self.name);
                let value = handler(payload, options)?;
                return Ok(RenderResult::Custom { value });
            }
            TargetKind::Url {
                base_url,
                field_map,
            } => (base_url, field_map),
        };

        let mut params = Vec::with_capacity(field_map.len());
        for (field, param) in field_map {
            if *field == ShareField::Files {
                match payload.files.as_deref() {
                    Some(files) => log::debug!(
                        "share target {}: {} file(s) go out as multipart data, not query parameters",
                        self.name,
                        files.len()
                    ),
                    None => log::warn!(
                        "share target {} maps a files parameter ({param}) but the payload has no file list; dropping it",
                        self.name
                    ),
                }
                continue;
            }
            params.push(format!(
                "{}={}",
                param,
                urlencoding::encode(payload.field(*field))
            ));
        }

        let url = format!("{}{}", base_url, params.join("&"));
        log::debug!("share target {}: rendered {url}", self.name);
        Ok(RenderResult::Navigate { url })
    }
}

impl fmt::Debug for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ShareTarget");
        s.field("name", &self.name).field("nice_name", &self.nice_name);
        match &self.kind {
            TargetKind::Url { base_url, field_map } => {
                s.field("base_url", base_url)
                    .field("mapped_fields", &field_map.len());
            }
            TargetKind::Custom(_) => {
                s.field("kind", &"custom");
            }
        }
        s.finish()
    }
}

/// Joins origin and action into a prefix that `param=value` pairs can be
/// appended to with `&`:
/// exactly one `/` separates origin and action, and the result always ends
/// in `?` (no query yet) or `&` (query already present).
fn join_base_url(origin: &str, action: &str) -> String {
    let mut base = String::with_capacity(origin.len() + action.len() + 2);
    base.push_str(origin);
    if !origin.ends_with('/') && !action.starts_with('/') {
        base.push('/');
    }
    base.push_str(action);
    if !action.contains('?') {
        base.push('?');
    } else if !base.ends_with('&') && !base.ends_with('?') {
        base.push('&');
    }
    base
}
