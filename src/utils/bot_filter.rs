use std::env;

/// Substrings that mark a user agent as automated traffic. Link-preview
/// fetchers count: they fire the redirect page without a human behind it.
const DEFAULT_KEYWORDS: &[&str] = &[
    "bot",
    "spider",
    "crawl",
    "facebook",
    "meta",
    "whatsapp",
    "preview",
    "google",
    "twitter",
    "slack",
    "ahrefs",
    "pinterest",
    "python",
    "curl",
    "wget",
];

/// Device signatures only seen from crawler vendors. "Android 10; K" is the
/// reduced UA some preview fetchers present while pretending to be Chrome on
/// a phone.
const FORGED_DEVICE_SIGNATURES: &[&str] = &["Android 10; K"];

/// Decides from the user agent alone whether a hit is automated. The decision
/// deliberately ignores IP geolocation and datacenter lists: an earlier
/// city-based policy blocked real visitors on VPNs.
#[derive(Debug, Clone)]
pub struct BotFilter {
    keywords: Vec<String>,
    signatures: Vec<String>,
}

impl Default for BotFilter {
    fn default() -> Self {
        Self::with_extra_keywords(&[])
    }
}

impl BotFilter {
    /// Built-in keyword set plus any comma-separated extras from
    /// `BOT_UA_KEYWORDS`, so the list can grow without a code change.
    pub fn from_env() -> Self {
        let extra = env::var("BOT_UA_KEYWORDS").unwrap_or_default();
        let extras: Vec<&str> = extra
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect();
        Self::with_extra_keywords(&extras)
    }

    pub fn with_extra_keywords(extras: &[&str]) -> Self {
        let keywords = DEFAULT_KEYWORDS
            .iter()
            .chain(extras.iter())
            .map(|k| k.to_lowercase())
            .collect();
        let signatures = FORGED_DEVICE_SIGNATURES
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self { keywords, signatures }
    }

    /// Case-insensitive, never fails. An empty or absent user agent is
    /// treated as human: dropping real traffic is worse than logging the odd
    /// headless client.
    pub fn is_automated(&self, user_agent: &str) -> bool {
        if user_agent.is_empty() {
            return false;
        }

        let ua = user_agent.to_lowercase();
        self.keywords.iter().any(|k| ua.contains(k.as_str()))
            || self.signatures.iter().any(|s| ua.contains(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catches_keyword_anywhere_in_any_case() {
        let filter = BotFilter::default();
        assert!(filter.is_automated("Mozilla/5.0 (compatible; Googlebot/2.1)"));
        assert!(filter.is_automated("WhatsApp/2.23.20 A"));
        assert!(filter.is_automated("FACEBOOKEXTERNALHIT/1.1"));
        assert!(filter.is_automated("python-requests/2.31.0"));
        assert!(filter.is_automated("curl/8.4.0"));
        assert!(filter.is_automated("Slackbot-LinkExpanding 1.0"));
    }

    #[test]
    fn catches_forged_device_signature() {
        let filter = BotFilter::default();
        assert!(filter.is_automated(
            "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/124.0.0.0 Mobile Safari/537.36"
        ));
        assert!(filter.is_automated("Mozilla/5.0 (Linux; ANDROID 10; K)"));
    }

    #[test]
    fn passes_ordinary_browsers() {
        let filter = BotFilter::default();
        assert!(!filter.is_automated(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1"
        ));
        assert!(!filter.is_automated(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/124.0.0.0 Safari/537.36"
        ));
        // Real Android phones report a model name, not the reduced "K".
        assert!(!filter.is_automated(
            "Mozilla/5.0 (Linux; Android 10; SM-G973F) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/124.0.0.0 Mobile Safari/537.36"
        ));
    }

    #[test]
    fn empty_user_agent_is_not_automated() {
        let filter = BotFilter::default();
        assert!(!filter.is_automated(""));
    }

    #[test]
    fn extra_keywords_extend_the_set() {
        let filter = BotFilter::with_extra_keywords(&["Headless"]);
        assert!(filter.is_automated("Mozilla/5.0 HeadlessChrome/124.0"));

        let base = BotFilter::default();
        assert!(!base.is_automated("Mozilla/5.0 HeadlessChrome/124.0"));
    }
}
