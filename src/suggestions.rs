/// Alternative-action links derived from a failed domain
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::domain::normalize_domain;
use crate::error::{HelperError, Result};

/// A clickable alternative shown in the popup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub url: String,
}

impl Suggestion {
    fn new(text: impl Into<String>, url: impl Into<String>) -> Suggestion {
        Suggestion {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Keyword categories, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    News,
    Shopping,
    Social,
    Video,
}

impl Category {
    pub const PRIORITY: [Category; 4] = [
        Category::News,
        Category::Shopping,
        Category::Social,
        Category::Video,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::News => &["news", "blog"],
            Category::Shopping => &["shop", "store"],
            Category::Social => &["social", "forum", "community", "chat"],
            Category::Video => &["video", "tube", "stream"],
        }
    }

    /// First category whose keywords appear in the domain (case-insensitive)
    pub fn classify(domain: &str) -> Option<Category> {
        let domain = domain.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|category| category.keywords().iter().any(|kw| domain.contains(kw)))
    }

    fn suggestions(self, domain: &str) -> Vec<Suggestion> {
        let query = encode(domain);
        match self {
            Category::News => vec![
                Suggestion::new("Try alternative news site: Reuters", "https://www.reuters.com/"),
                Suggestion::new(
                    format!("Find coverage of {} on Google News", domain),
                    format!("https://news.google.com/search?q={}", query),
                ),
            ],
            Category::Shopping => vec![
                Suggestion::new("Try alternative shopping site: Amazon", "https://www.amazon.com/"),
                Suggestion::new(
                    format!("Compare prices for {} on Google Shopping", domain),
                    format!("https://www.google.com/search?tbm=shop&q={}", query),
                ),
            ],
            Category::Social => vec![Suggestion::new(
                format!("Search discussions about {} on Reddit", domain),
                format!("https://www.reddit.com/search/?q={}", query),
            )],
            Category::Video => vec![Suggestion::new(
                format!("Search for {} videos on YouTube", domain),
                format!("https://www.youtube.com/results?search_query={}", query),
            )],
        }
    }
}

fn encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// The four suggestions every failure gets
fn base_suggestions(domain: &str, path: &str) -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            format!("Check web archive for {}", domain),
            format!("https://web.archive.org/web/*/{}{}", domain, path),
        ),
        Suggestion::new(
            format!("Search for {} on Google", domain),
            format!("https://www.google.com/search?q={}", encode(domain)),
        ),
        Suggestion::new(
            format!("Check if {} is down for everyone", domain),
            format!("https://downforeveryoneorjustme.com/{}", domain),
        ),
        Suggestion::new(
            format!("Retry {} over HTTPS", domain),
            format!("https://{}{}", domain, path),
        ),
    ]
}

/// Build the suggestion list for a failed domain and path
///
/// The domain is normalized (leading "www." stripped) before any template is
/// filled in. At most one keyword category is appended.
pub fn get_suggestions(domain: &str, path: &str) -> Result<Vec<Suggestion>> {
    let domain = normalize_domain(domain.trim());
    if domain.is_empty() {
        return Err(HelperError::EmptyDomain);
    }

    let mut suggestions = base_suggestions(domain, path);
    if let Some(category) = Category::classify(domain) {
        suggestions.extend(category.suggestions(domain));
    }

    Ok(suggestions)
}
