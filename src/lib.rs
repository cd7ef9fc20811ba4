//! # tauri-plugin-web-share
//!
//! A Tauri plugin that polyfills web-style sharing for apps whose webview has
//! no native share capability. The frontend renders the share sheet and
//! performs the final navigation; the plugin owns everything in between:
//! share-target descriptors, payload normalization, destination-URL
//! rendering, locale resolution and the pending-share session lifecycle.
//!
//! A share runs as a two-phase protocol. `begin_share` normalizes the
//! caller's payload against the ambient page context and opens a pending
//! session; once the user picks a destination the frontend calls `dispatch`,
//! which renders the destination URL (or runs the target's custom handler)
//! and settles the session. Dismissing the sheet maps to `cancel_share`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tauri_plugin_web_share::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Extra destinations register through the plugin builder:
//!
//! ```rust,ignore
//! use tauri_plugin_web_share::{ShareField, ShareTarget, ShareTargetConfig};
//!
//! let hn = ShareTarget::new(ShareTargetConfig {
//!     name: "hackernews".into(),
//!     nice_name: Some("Hacker News".into()),
//!     origin: "https://news.ycombinator.com".into(),
//!     action: "/submitlink".into(),
//!     icon: "<svg class=\"the-icon\">...</svg>".into(),
//!     field_map: vec![
//!         (ShareField::Url, "u".into()),
//!         (ShareField::Title, "t".into()),
//!     ],
//! })?;
//!
//! tauri::Builder::default()
//!     .plugin(tauri_plugin_web_share::Builder::new().target(hn).build())
//! # ;
//! ```
//!
//! ### Frontend (JavaScript/TypeScript)
//!
//! ```js
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const { session, targets } = await invoke('plugin:web-share|begin_share', {
//!   payload: { title: 'Check this out!', url: 'https://tauri.app' },
//!   page: { title: document.title, url: location.href, host: location.host },
//! });
//!
//! // ...render the sheet from `targets`, then on click:
//! const result = await invoke('plugin:web-share|dispatch', {
//!   session,
//!   target: 'telegram',
//! });
//! if (result.kind === 'navigate') window.open(result.url, '_blank');
//! ```

use tauri::{
    plugin::{Builder as PluginBuilder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

mod commands;
mod defaults;
mod error;
mod locale;
mod models;
mod registry;
mod state;
mod target;

pub use defaults::default_targets;
pub use error::{Error, Result};
pub use locale::{resolve as resolve_locale, LocaleBundle, LocaleTable};
pub use registry::ShareTargetRegistry;
pub use state::ShareSessions;
pub use target::{CanShareFn, CustomShareFn, ShareTarget, ShareTargetConfig};

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`]
/// to access the plugin's registry and sessions.
pub trait WebShareExt<R: Runtime> {
    fn share_targets(&self) -> &ShareTargetRegistry;
    fn share_sessions(&self) -> &ShareSessions;
}

impl<R: Runtime, T: Manager<R>> WebShareExt<R> for T {
    fn share_targets(&self) -> &ShareTargetRegistry {
        self.state::<ShareTargetRegistry>().inner()
    }

    fn share_sessions(&self) -> &ShareSessions {
        self.state::<ShareSessions>().inner()
    }
}

/// Configures the registry the plugin installs: whether the built-in
/// destination table is included, and any targets the embedding application
/// adds on top. The registry is built once during setup and never mutated
/// afterwards.
#[derive(Default)]
pub struct Builder {
    skip_default_targets: bool,
    extra_targets: Vec<ShareTarget>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves the built-in destination table out of the registry.
    pub fn without_default_targets(mut self) -> Self {
        self.skip_default_targets = true;
        self
    }

    /// Registers an additional share target, after the built-in ones.
    pub fn target(mut self, target: ShareTarget) -> Self {
        self.extra_targets.push(target);
        self
    }

    pub fn build<R: Runtime>(self) -> TauriPlugin<R> {
        PluginBuilder::new("web-share")
            .invoke_handler(tauri::generate_handler![
                commands::begin_share,
                commands::list_targets,
                commands::dispatch,
                commands::cancel_share,
                commands::locale_strings,
                commands::cleanup,
            ])
            .setup(move |app, _api| {
                let mut registry = ShareTargetRegistry::new();
                if !self.skip_default_targets {
                    for target in defaults::default_targets()? {
                        registry.register(target);
                    }
                }
                for target in self.extra_targets {
                    registry.register(target);
                }
                app.manage(registry);
                app.manage(ShareSessions::new());
                Ok(())
            })
            .build()
    }
}

/// Initializes the plugin with the built-in destination table.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new().build()
}
