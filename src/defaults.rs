//! The built-in share-target table: webmail compose links, messaging and
//! social destinations, and a bookmarking service. Pure data; the render
//! contract lives in [`crate::target`].

use crate::error::Result;
use crate::models::ShareField;
use crate::target::{ShareTarget, ShareTargetConfig};

const GMAIL_ICON: &str = r##"<svg class="the-icon" xmlns="http://www.w3.org/2000/svg" viewBox="52 42 88 66">
<path fill="#4285f4" d="M58 108h14V74L52 59v43c0 3.32 2.69 6 6 6"/>
<path fill="#34a853" d="M120 108h14c3.32 0 6-2.69 6-6V59l-20 15"/>
<path fill="#fbbc04" d="M120 48v26l20-15v-8c0-7.42-8.47-11.65-14.4-7.2"/>
<path fill="#ea4335" d="M72 74V48l24 18 24-18v26L96 92"/>
<path fill="#c5221f" d="M52 51v8l20 15V48l-5.6-4.2c-5.94-4.45-14.4-.22-14.4 7.2"/>
</svg>"##;

const YAHOO_ICON: &str = r##"<svg class="the-icon" width="300" height="300" overflow="visible" version="1.1" viewBox="130.35 177.43 300 300" xml:space="preserve" xmlns="http://www.w3.org/2000/svg">
<path d="m420.93 272.27c-5.2009 0.51386-26.852 5.3644-34.129 6.9242-7.7923 2.0736-78.984 57.075-83.661 70.581-1.0368 4.6741-1.5565 11.866-1.5565 18.624l-0.52165 10.916c0 7.7884 2.1638 20.349 3.2 27.102 4.6806 1.0433 38.555 0.13235 44.788 1.1679l-0.7669 13.97c-6.0911-0.4438-49.106-0.33998-73.68-0.33998-12.475 0-52.576 1.3755-64.897 1.0044l2.3292-13.285c6.7561-0.52424 34.729 1.2068 40.879-5.2839 3.0546-3.2207 2.0814-6.6724 2.0814-25.376v-8.8317c0-4.1576 0-11.956-1.0426-19.233-2.5966-7.7962-65.301-86.09-81.409-98.558-4.6806-1.5572-33.99-4.4885-41.264-6.0508l-0.36204-11.968c3.6288-1.8193 36.221 0.44249 67.849-0.72797 20.787-0.76819 68.215 0 74.067 0.69684l-1.4994 10.547c-6.2338 1.561-36.266 2.1385-44.062 4.2147 20.268 30.139 52.312 68.94 62.707 84.011 5.7193-8.3126 55.954-42.874 57.512-54.825-7.7975-1.565-33.607-5.2788-37.766-5.2788l-2.4687-13.607c7.0753-1.1069 44.278 0 62.774 0 15.962 0 50.07 0 59.762 0.79416l-8.8628 12.813" fill="#592c71"/>
</svg>"##;

const WHATSAPP_ICON: &str = r##"<svg class="the-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 448 512"><path fill="#075e54" d="M224 122.8c-72.7 0-131.8 59.1-131.9 131.8 0 24.9 7 49.2 20.2 70.1l3.1 5-13.3 48.6 49.9-13.1 4.8 2.9c20.2 12 43.4 18.4 67.1 18.4h.1c72.6 0 133.3-59.1 133.3-131.8 0-35.2-15.2-68.3-40.1-93.2-25-25-58-38.7-93.2-38.7zm77.5 188.4c-3.3 9.3-19.1 17.7-26.7 18.8-12.6 1.9-22.4.9-47.5-9.9-39.7-17.2-65.7-57.2-67.7-59.8-2-2.6-16.2-21.5-16.2-41s10.2-29.1 13.9-33.1c3.6-4 7.9-5 10.6-5 2.6 0 5.3 0 7.6.1 2.4.1 5.7-.9 8.9 6.8 3.3 7.9 11.2 27.4 12.2 29.4s1.7 4.3.3 6.9c-7.6 15.2-15.7 14.6-11.6 21.6 15.3 26.3 30.6 35.4 53.9 47.1 4 2 6.3 1.7 8.6-1 2.3-2.6 9.9-11.6 12.5-15.5 2.6-4 5.3-3.3 8.9-2 3.6 1.3 23.1 10.9 27.1 12.9s6.6 3 7.6 4.6c.9 1.9.9 9.9-2.4 19.1zM400 32H48C21.5 32 0 53.5 0 80v352c0 26.5 21.5 48 48 48h352c26.5 0 48-21.5 48-48V80c0-26.5-21.5-48-48-48zM223.9 413.2c-26.6 0-52.7-6.7-75.8-19.3L64 416l22.5-82.2c-13.9-24-21.2-51.3-21.2-79.3C65.4 167.1 136.5 96 223.9 96c42.4 0 82.2 16.5 112.2 46.5 29.9 30 47.9 69.8 47.9 112.2 0 87.4-72.7 158.5-160.1 158.5z"></path></svg>"##;

const LINKEDIN_ICON: &str = r##"<svg class="the-icon" width="28" height="32" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 448 512"><path fill="#0077b5" d="M416 32H31.9C14.3 32 0 46.5 0 64.3v383.4C0 465.5 14.3 480 31.9 480H416c17.6 0 32-14.5 32-32.3V64.3c0-17.8-14.4-32.3-32-32.3zM135.4 416H69V202.2h66.5V416zm-33.2-243c-21.3 0-38.5-17.3-38.5-38.5S80.9 96 102.2 96c21.2 0 38.5 17.3 38.5 38.5 0 21.3-17.2 38.5-38.5 38.5zm282.1 243h-66.4V312c0-24.8-.5-56.7-34.5-56.7-34.6 0-39.9 27-39.9 54.9V416h-66.4V202.2h63.7v29.2h.9c8.9-16.8 30.6-34.5 62.9-34.5 67.2 0 79.7 44.3 79.7 101.9V416z"></path></svg>"##;

const TWITTER_ICON: &str = r##"<svg class="the-icon" width="32" height="32" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512"><path fill="#1da1f2" d="M459.37 151.716c.325 4.548.325 9.097.325 13.645 0 138.72-105.583 298.558-298.558 298.558-59.452 0-114.68-17.219-161.137-47.106 8.447.974 16.568 1.299 25.34 1.299 49.055 0 94.213-16.568 130.274-44.832-46.132-.975-84.792-31.188-98.112-72.772 6.498.974 12.995 1.624 19.818 1.624 9.421 0 18.843-1.3 27.614-3.573-48.081-9.747-84.143-51.98-84.143-102.985v-1.299c13.969 7.797 30.214 12.67 47.431 13.319-28.264-18.843-46.781-51.005-46.781-87.391 0-19.492 5.197-37.36 14.294-52.954 51.655 63.675 129.3 105.258 216.365 109.807-1.624-7.797-2.599-15.918-2.599-24.04 0-57.828 46.782-104.934 104.934-104.934 30.213 0 57.502 12.67 76.67 33.137 23.715-4.548 46.456-13.32 66.599-25.34-7.798 24.366-24.366 44.833-46.132 57.827 21.117-2.273 41.584-8.122 60.426-16.243-14.292 20.791-32.161 39.308-52.628 54.253z"></path></svg>"##;

const TELEGRAM_ICON: &str = r##"<svg class="the-icon" width="31" height="32" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 496 512"><path fill="#0088cc" d="M248 8C111 8 0 119 0 256s111 248 248 248 248-111 248-248S385 8 248 8zm121.8 169.9l-40.7 191.8c-3 13.6-11.1 16.9-22.4 10.5l-62-45.7-29.9 28.8c-3.3 3.3-6.1 6.1-12.5 6.1l4.4-63.1 114.9-103.8c5-4.4-1.1-6.9-7.7-2.5l-142 89.4-61.2-19.1c-13.3-4.2-13.6-13.3 2.8-19.7l239.1-92.2c11.1-4 20.8 2.7 17.2 19.5z"></path></svg>"##;

const FACEBOOK_ICON: &str = r##"<svg class="the-icon" width="28" height="32" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 448 512"><path fill="#3b5998" d="M448 56.7v398.5c0 13.7-11.1 24.7-24.7 24.7H309.1V306.5h58.2l8.7-67.6h-67v-43.2c0-19.6 5.4-32.9 33.5-32.9h35.8v-60.5c-6.2-.8-27.4-2.7-52.2-2.7-51.6 0-87 31.5-87 89.4v49.9h-58.4v67.6h58.4V480H24.7C11.1 480 0 468.9 0 455.3V56.7C0 43.1 11.1 32 24.7 32h398.5c13.7 0 24.8 11.1 24.8 24.7z"></path></svg>"##;

const POCKET_ICON: &str = r##"<svg class="the-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 448 512"><path d="M407.6 64h-367C18.5 64 0 82.5 0 104.6v135.2C0 364.5 99.7 464 224.2 464c124 0 223.8-99.5 223.8-224.2V104.6c0-22.4-17.7-40.6-40.4-40.6zm-162 268.5c-12.4 11.8-31.4 11.1-42.4 0C89.5 223.6 88.3 227.4 88.3 209.3c0-16.9 13.8-30.7 30.7-30.7 17 0 16.1 3.8 105.2 89.3 90.6-86.9 88.6-89.3 105.5-89.3 16.9 0 30.7 13.8 30.7 30.7 0 17.8-2.9 15.7-114.8 123.2z"/></svg>"##;

fn target(
    name: &str,
    nice_name: &str,
    origin: &str,
    action: &str,
    icon: &str,
    field_map: &[(ShareField, &str)],
) -> Result<ShareTarget> {
    ShareTarget::new(ShareTargetConfig {
        name: name.into(),
        nice_name: Some(nice_name.into()),
        origin: origin.into(),
        action: action.into(),
        icon: icon.into(),
        field_map: field_map
            .iter()
            .map(|(field, param)| (*field, (*param).to_string()))
            .collect(),
    })
}

/// Every destination the plugin offers out of the box, in the order the
/// picker shows them.
pub fn default_targets() -> Result<Vec<ShareTarget>> {
    use ShareField::*;
    Ok(vec![
        // https://mail.google.com/mail/?view=cm&to=..&su=..&body=..&bcc=..&cc=..
        target(
            "gmail",
            "GMail",
            "https://mail.google.com",
            "/mail/?view=cm&",
            GMAIL_ICON,
            &[
                (EmailAddress, "to"),
                (Title, "su"),
                (Url, "body"),
                (BccEmailAddress, "bcc"),
                (CcEmailAddress, "cc"),
            ],
        )?,
        // http://compose.mail.yahoo.com/?to=..&subject=..&body=..
        target(
            "yahoo",
            "Yahoo",
            "http://compose.mail.yahoo.com",
            "/",
            YAHOO_ICON,
            &[(EmailAddress, "to"), (Title, "subject"), (Url, "body")],
        )?,
        // https://api.whatsapp.com/send?text=..
        target(
            "whatsapp",
            "WhatsApp",
            "https://api.whatsapp.com",
            "/send",
            WHATSAPP_ICON,
            &[(Payload, "text")],
        )?,
        // https://www.linkedin.com/shareArticle?mini=true&url=..&title=..&summary=..
        target(
            "linkedin",
            "LinkedIn",
            "https://www.linkedin.com",
            "/shareArticle?mini=true&source=LinkedIn&",
            LINKEDIN_ICON,
            &[(Url, "url"), (Title, "title"), (Desc, "summary")],
        )?,
        // https://twitter.com/intent/tweet?url=..&text=..&via=..&hashtags=..
        target(
            "twitter",
            "Twitter",
            "https://twitter.com",
            "/intent/tweet",
            TWITTER_ICON,
            &[
                (Url, "url"),
                (Text, "text"),
                (Via, "via"),
                (Hashtags, "hashtags"),
            ],
        )?,
        // https://t.me/share/url?url=..&text=..&to=..
        target(
            "telegram",
            "Telegram",
            "https://t.me",
            "share/url?",
            TELEGRAM_ICON,
            &[(Url, "url"), (Text, "text"), (PhoneNumber, "to")],
        )?,
        // https://www.facebook.com/sharer/sharer.php?u=..&quote=..&hashtag=..
        target(
            "facebook",
            "Facebook",
            "https://www.facebook.com",
            "sharer/sharer.php?",
            FACEBOOK_ICON,
            &[(Url, "u"), (Text, "quote"), (Hashtags, "hashtag")],
        )?,
        // https://getpocket.com/edit?url=..
        target(
            "getpocket",
            "Pocket",
            "https://getpocket.com",
            "/edit",
            POCKET_ICON,
            &[(Url, "url")],
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::default_targets;

    #[test]
    fn every_default_target_constructs() {
        let targets = default_targets().unwrap();
        let names: Vec<&str> = targets.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            [
                "gmail",
                "yahoo",
                "whatsapp",
                "linkedin",
                "twitter",
                "telegram",
                "facebook",
                "getpocket"
            ]
        );
    }

    #[test]
    fn every_default_base_url_is_appendable() {
        for target in default_targets().unwrap() {
            let base = target.base_url().unwrap();
            assert!(
                base.ends_with('?') || base.ends_with('&'),
                "{} has a non-appendable base url: {base}",
                target.name()
            );
        }
    }

    #[test]
    fn gmail_keeps_its_preexisting_query() {
        let targets = default_targets().unwrap();
        let gmail = targets.iter().find(|t| t.name() == "gmail").unwrap();
        assert_eq!(
            gmail.base_url().unwrap(),
            "https://mail.google.com/mail/?view=cm&"
        );
    }

    #[test]
    fn telegram_gets_its_separating_slash() {
        let targets = default_targets().unwrap();
        let telegram = targets.iter().find(|t| t.name() == "telegram").unwrap();
        assert_eq!(telegram.base_url().unwrap(), "https://t.me/share/url?");
    }
}
