use serde::{Deserialize, Serialize};

/// The closed vocabulary of abstract payload fields a share target may map
/// onto its own query-parameter names.
///
/// `Files` is reserved: it signals multipart semantics and is never rendered
/// into a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShareField {
    Title,
    Text,
    Url,
    Desc,
    Image,
    AppId,
    RedirectUrl,
    Via,
    Hashtags,
    Provider,
    Language,
    UserId,
    Category,
    PhoneNumber,
    EmailAddress,
    CcEmailAddress,
    BccEmailAddress,
    Payload,
    Files,
}

/// A file attached to a share. The `data` field carries Base64 content; the
/// plugin never decodes it, it only passes the list through untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFile {
    pub data: String,
    pub name: String,
    pub mime_type: String,
}

/// Caller-supplied share data, before normalization. Every field is optional;
/// empty strings count as absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharePayload {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub desc: Option<String>,
    pub image: Option<String>,
    pub app_id: Option<String>,
    pub redirect_url: Option<String>,
    pub via: Option<String>,
    pub hashtags: Option<String>,
    pub provider: Option<String>,
    pub language: Option<String>,
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    pub cc_email_address: Option<String>,
    pub bcc_email_address: Option<String>,
    /// Precomputed human-readable composite, e.g. for copy-to-clipboard.
    pub payload: Option<String>,
    pub files: Option<Vec<SharedFile>>,
}

/// Ambient document values the frontend reads once per share and hands to
/// normalization: they back-fill `title`, `url`, `provider` and `via`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageContext {
    pub title: Option<String>,
    pub url: Option<String>,
    pub host: Option<String>,
}

/// Per-invocation options.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareOptions {
    /// Forces the UI locale instead of the navigator one.
    pub language: Option<String>,
    /// Target names to hide from the picker for this share.
    pub disabled: Vec<String>,
}

impl ShareOptions {
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|n| n == name)
    }
}

/// A payload after the defaulting chain ran: every vocabulary field is
/// present (possibly empty), so rendering never looks up a missing field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizedPayload {
    pub title: String,
    pub text: String,
    pub url: String,
    pub desc: String,
    pub image: String,
    pub app_id: String,
    pub redirect_url: String,
    pub via: String,
    pub hashtags: String,
    pub provider: String,
    pub language: String,
    pub user_id: String,
    pub category: String,
    pub phone_number: String,
    pub email_address: String,
    pub cc_email_address: String,
    pub bcc_email_address: String,
    pub payload: String,
    pub files: Option<Vec<SharedFile>>,
}

impl NormalizedPayload {
    /// Value of one vocabulary field. `Files` has no string form and reads
    /// as empty; rendering special-cases it before ever calling this.
    pub fn field(&self, field: ShareField) -> &str {
        match field {
            ShareField::Title => &self.title,
            ShareField::Text => &self.text,
            ShareField::Url => &self.url,
            ShareField::Desc => &self.desc,
            ShareField::Image => &self.image,
            ShareField::AppId => &self.app_id,
            ShareField::RedirectUrl => &self.redirect_url,
            ShareField::Via => &self.via,
            ShareField::Hashtags => &self.hashtags,
            ShareField::Provider => &self.provider,
            ShareField::Language => &self.language,
            ShareField::UserId => &self.user_id,
            ShareField::Category => &self.category,
            ShareField::PhoneNumber => &self.phone_number,
            ShareField::EmailAddress => &self.email_address,
            ShareField::CcEmailAddress => &self.cc_email_address,
            ShareField::BccEmailAddress => &self.bcc_email_address,
            ShareField::Payload => &self.payload,
            ShareField::Files => "",
        }
    }
}

/// What a dispatched share resolves to. Navigation itself is the frontend's
/// job; the plugin only constructs the URL.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderResult {
    Navigate { url: String },
    Custom { value: serde_json::Value },
}

/// One row of the frontend's picker list.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfo {
    pub name: String,
    pub nice_name: String,
    pub icon: String,
}

/// Response of `begin_share`: the session handle plus everything the
/// frontend needs to render the picker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginShareResponse {
    pub session: String,
    pub payload: NormalizedPayload,
    pub targets: Vec<TargetInfo>,
}
