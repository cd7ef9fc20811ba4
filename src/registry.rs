use crate::error::{Error, Result};
use crate::models::{
    NormalizedPayload, PageContext, RenderResult, SharePayload, ShareOptions, TargetInfo,
};
use crate::target::ShareTarget;

/// Holds the registered share targets and applies the payload rules shared
/// by all of them. Built once during plugin setup and only read afterwards;
/// registration must finish before the first dispatch.
#[derive(Debug, Default)]
pub struct ShareTargetRegistry {
    targets: Vec<ShareTarget>,
}

impl ShareTargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a target. Names are not deduplicated; with a duplicate name
    /// the earlier registration keeps winning lookups.
    pub fn register(&mut self, target: ShareTarget) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Applies the defaulting chain and validates the result.
    ///
    /// Order matters: `title`, `url`, `provider` and `via` back-fill from the
    /// ambient page first, then `text` derives from `title`/`desc`, `desc`
    /// from `text`, and the composite `payload` from all three. A payload
    /// that still has no title or text afterwards is rejected.
    pub fn normalize(
        &self,
        payload: SharePayload,
        page: &PageContext,
    ) -> Result<NormalizedPayload> {
        let title = first_non_empty(payload.title, page.title.as_deref());
        let url = first_non_empty(payload.url, page.url.as_deref());
        let provider = first_non_empty(payload.provider, page.host.as_deref());
        let via = first_non_empty(payload.via, page.url.as_deref());

        let mut text = non_empty(payload.text);
        let mut desc = non_empty(payload.desc);
        if text.is_empty() {
            text = if desc.is_empty() {
                title.clone()
            } else {
                format!("{title} : {desc}")
            };
        } else if desc.is_empty() {
            desc = text.clone();
        }

        let mut composite = non_empty(payload.payload);
        if composite.is_empty() {
            composite = format!("{title} : {url}\n{desc}");
        }

        if title.is_empty() || text.is_empty() {
            return Err(Error::InvalidPayload);
        }

        Ok(NormalizedPayload {
            title,
            text,
            url,
            desc,
            image: non_empty(payload.image),
            app_id: non_empty(payload.app_id),
            redirect_url: non_empty(payload.redirect_url),
            via,
            hashtags: non_empty(payload.hashtags),
            provider,
            language: non_empty(payload.language),
            user_id: non_empty(payload.user_id),
            category: non_empty(payload.category),
            phone_number: non_empty(payload.phone_number),
            email_address: non_empty(payload.email_address),
            cc_email_address: non_empty(payload.cc_email_address),
            bcc_email_address: non_empty(payload.bcc_email_address),
            payload: composite,
            files: payload.files,
        })
    }

    /// The targets to offer for this payload, in registration order, minus
    /// explicit opt-outs and targets whose predicate declines. Pure query.
    pub fn list_available(
        &self,
        payload: &NormalizedPayload,
        options: &ShareOptions,
    ) -> Vec<TargetInfo> {
        self.targets
            .iter()
            .filter(|target| {
                if options.is_disabled(target.name()) {
                    return false;
                }
                if !target.is_available(payload, options) {
                    log::debug!(
                        "share target {} declined this payload; hiding it",
                        target.name()
                    );
                    return false;
                }
                true
            })
            .map(ShareTarget::info)
            .collect()
    }

    /// Renders through the first registered target with this name.
    pub fn dispatch(
        &self,
        name: &str,
        payload: &NormalizedPayload,
        options: &ShareOptions,
    ) -> Result<RenderResult> {
        let target = self
            .targets
            .iter()
            .find(|target| target.name() == name)
            .ok_or_else(|| Error::UnknownTarget(name.to_string()))?;
        target.render(payload, options)
    }
}

fn non_empty(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_default()
}

fn first_non_empty(value: Option<String>, fallback: Option<&str>) -> String {
    let value = non_empty(value);
    if value.is_empty() {
        fallback.unwrap_or_default().to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::ShareTargetRegistry;
    use crate::error::Error;
    use crate::models::{PageContext, RenderResult, SharePayload, ShareField, ShareOptions};
    use crate::target::{ShareTarget, ShareTargetConfig};

    fn page() -> PageContext {
        PageContext {
            title: Some("Fallback Title".into()),
            url: Some("https://host.example/page".into()),
            host: Some("host.example".into()),
        }
    }

    fn tweeter() -> ShareTarget {
        ShareTarget::new(ShareTargetConfig {
            name: "twitter".into(),
            nice_name: Some("Twitter".into()),
            origin: "https://twitter.com".into(),
            action: "/intent/tweet".into(),
            icon: "<svg/>".into(),
            field_map: vec![
                (ShareField::Url, "url".into()),
                (ShareField::Text, "text".into()),
                (ShareField::Via, "via".into()),
                (ShareField::Hashtags, "hashtags".into()),
            ],
        })
        .unwrap()
    }

    fn named(name: &str, param: &str) -> ShareTarget {
        ShareTarget::new(ShareTargetConfig {
            name: name.into(),
            nice_name: None,
            origin: "https://dest.example".into(),
            action: format!("/{param}"),
            icon: "<svg/>".into(),
            field_map: vec![(ShareField::Url, param.into())],
        })
        .unwrap()
    }

    #[test]
    fn normalize_derives_text_from_title_and_desc() {
        let registry = ShareTargetRegistry::new();
        let normalized = registry
            .normalize(
                SharePayload {
                    title: Some("T".into()),
                    desc: Some("D".into()),
                    ..Default::default()
                },
                &page(),
            )
            .unwrap();
        assert_eq!(normalized.text, "T : D");
        assert_eq!(normalized.url, "https://host.example/page");
        assert_eq!(normalized.provider, "host.example");
        assert_eq!(normalized.via, "https://host.example/page");
    }

    #[test]
    fn normalize_mirrors_text_into_desc() {
        let registry = ShareTargetRegistry::new();
        let normalized = registry
            .normalize(
                SharePayload {
                    title: Some("T".into()),
                    text: Some("body".into()),
                    ..Default::default()
                },
                &page(),
            )
            .unwrap();
        assert_eq!(normalized.desc, "body");
        assert_eq!(normalized.text, "body");
    }

    #[test]
    fn normalize_builds_composite_payload() {
        let registry = ShareTargetRegistry::new();
        let normalized = registry
            .normalize(
                SharePayload {
                    title: Some("T".into()),
                    text: Some("body".into()),
                    url: Some("https://x.example".into()),
                    ..Default::default()
                },
                &page(),
            )
            .unwrap();
        assert_eq!(normalized.payload, "T : https://x.example\nbody");
    }

    #[test]
    fn normalize_title_falls_back_to_page_title() {
        let registry = ShareTargetRegistry::new();
        let normalized = registry
            .normalize(SharePayload::default(), &page())
            .unwrap();
        assert_eq!(normalized.title, "Fallback Title");
        assert_eq!(normalized.text, "Fallback Title");
    }

    #[test]
    fn normalize_rejects_payload_without_title_or_text() {
        let registry = ShareTargetRegistry::new();
        let err = registry
            .normalize(SharePayload::default(), &PageContext::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPayload));

        // An empty ambient title is as good as a missing one.
        let err = registry
            .normalize(
                SharePayload::default(),
                &PageContext {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPayload));
    }

    #[test]
    fn dispatch_renders_through_the_named_target() {
        let mut registry = ShareTargetRegistry::new();
        registry.register(tweeter());
        let normalized = registry
            .normalize(
                SharePayload {
                    title: Some("Hi".into()),
                    text: Some("Hello World".into()),
                    url: Some("https://example.com".into()),
                    ..Default::default()
                },
                &PageContext::default(),
            )
            .unwrap();
        let result = registry
            .dispatch("twitter", &normalized, &ShareOptions::default())
            .unwrap();
        match result {
            RenderResult::Navigate { url } => {
                assert!(url.starts_with("https://twitter.com/intent/tweet?"));
                assert!(url.contains("text=Hello%20World"));
                assert!(url.contains("url=https%3A%2F%2Fexample.com"));
            }
            RenderResult::Custom { .. } => panic!("expected a navigate result"),
        }
    }

    #[test]
    fn dispatch_to_unknown_target_fails() {
        let mut registry = ShareTargetRegistry::new();
        registry.register(tweeter());
        let normalized = registry
            .normalize(
                SharePayload {
                    title: Some("Hi".into()),
                    ..Default::default()
                },
                &PageContext::default(),
            )
            .unwrap();
        let err = registry
            .dispatch("nonexistent-target", &normalized, &ShareOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTarget(name) if name == "nonexistent-target"));
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_registration() {
        let mut registry = ShareTargetRegistry::new();
        registry.register(named("dup", "first"));
        registry.register(named("dup", "second"));
        let normalized = registry
            .normalize(
                SharePayload {
                    title: Some("Hi".into()),
                    url: Some("https://example.com".into()),
                    ..Default::default()
                },
                &PageContext::default(),
            )
            .unwrap();
        match registry
            .dispatch("dup", &normalized, &ShareOptions::default())
            .unwrap()
        {
            RenderResult::Navigate { url } => {
                assert!(url.starts_with("https://dest.example/first?"))
            }
            RenderResult::Custom { .. } => panic!("expected a navigate result"),
        }
    }

    #[test]
    fn list_available_honors_opt_outs_and_predicates() {
        let mut registry = ShareTargetRegistry::new();
        registry.register(named("a", "a"));
        registry.register(named("b", "b"));
        registry.register(
            named("needs-url", "c").with_can_share(Arc::new(|payload, _| !payload.url.is_empty())),
        );

        let normalized = registry
            .normalize(
                SharePayload {
                    title: Some("Hi".into()),
                    ..Default::default()
                },
                &PageContext::default(),
            )
            .unwrap();

        let options = ShareOptions {
            disabled: vec!["b".into()],
            ..Default::default()
        };
        let listed = registry.list_available(&normalized, &options);
        let names: Vec<&str> = listed.iter().map(|t| t.name.as_str()).collect();
        // "b" is opted out, "needs-url" declines a payload with no URL.
        assert_eq!(names, ["a"]);

        let normalized = registry
            .normalize(
                SharePayload {
                    title: Some("Hi".into()),
                    url: Some("https://example.com".into()),
                    ..Default::default()
                },
                &PageContext::default(),
            )
            .unwrap();
        let listed = registry.list_available(&normalized, &ShareOptions::default());
        let names: Vec<&str> = listed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "needs-url"]);
    }
}
