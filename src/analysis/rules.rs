//! Fixed thresholds, scores, weights and remediation text used by the
//! scoring and recommendation rules.
//!
//! Lengths are counted in characters. A value exactly on a `*_MIN_CHARS` or
//! `*_MAX_CHARS` bound is within the good range.

// ── Title ──────────────────────────────────────────────────────────────────

pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 60;
pub const TITLE_TOO_SHORT_SCORE: u8 = 60;
pub const TITLE_TOO_LONG_SCORE: u8 = 70;

pub const TITLE_TOO_SHORT: &str =
    "Title is too short. Aim for 50-60 characters for optimal display in search results.";
pub const TITLE_TOO_LONG: &str =
    "Title is too long and may be truncated in search results. Aim for 50-60 characters.";
pub const TITLE_MISSING: &str =
    "Missing title tag. The title is crucial for SEO and user experience.";

// ── Description ────────────────────────────────────────────────────────────

pub const DESCRIPTION_MIN_CHARS: usize = 70;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const DESCRIPTION_TOO_SHORT_SCORE: u8 = 60;
pub const DESCRIPTION_TOO_LONG_SCORE: u8 = 70;

pub const DESCRIPTION_TOO_SHORT: &str =
    "Description is too short. Aim for 120-158 characters for optimal display in search results.";
pub const DESCRIPTION_TOO_LONG: &str =
    "Description is too long and may be truncated in search results. Aim for 120-158 characters.";
pub const DESCRIPTION_MISSING: &str =
    "Missing meta description. This is important for SEO and click-through rates from search results.";

// ── Canonical ──────────────────────────────────────────────────────────────

pub const CANONICAL_MISSING: &str =
    "Missing canonical URL tag. This helps prevent duplicate content issues.";

// ── Robots ─────────────────────────────────────────────────────────────────

/// Directives (matched case-insensitively) that keep a page out of results.
pub const ROBOTS_BLOCKING_DIRECTIVES: [&str; 2] = ["noindex", "nofollow"];
pub const ROBOTS_BLOCKING_SCORE: u8 = 50;
pub const ROBOTS_DEFAULT_SCORE: u8 = 80;
pub const ROBOTS_DEFAULT_CONTENT: &str = "Default (index, follow)";

pub const ROBOTS_BLOCKING: &str =
    "Page is set to be not indexed or links not followed. This will limit search visibility.";
pub const ROBOTS_MISSING: &str = "No robots meta tag found. Default behavior is index, follow.";

// ── Viewport / language ────────────────────────────────────────────────────

pub const VIEWPORT_MISSING_SCORE: u8 = 30;
pub const VIEWPORT_MISSING: &str =
    "Missing viewport meta tag. This is important for mobile responsiveness and SEO.";

pub const LANGUAGE_MISSING_SCORE: u8 = 50;
pub const LANGUAGE_MISSING: &str = "Missing language attribute on HTML tag. This helps search engines understand the target audience.";

// ── Overall score ──────────────────────────────────────────────────────────

/// Contribution of each component to the overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub title: f64,
    pub description: f64,
    pub canonical: f64,
    pub robots: f64,
    pub viewport: f64,
    pub language: f64,
    pub open_graph: f64,
    pub twitter: f64,
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.title
            + self.description
            + self.canonical
            + self.robots
            + self.viewport
            + self.language
            + self.open_graph
            + self.twitter
    }
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    title: 0.20,
    description: 0.15,
    canonical: 0.10,
    robots: 0.05,
    viewport: 0.05,
    language: 0.05,
    open_graph: 0.20,
    twitter: 0.20,
};

/// Points per social tag found, capped at 100.
pub const SOCIAL_POINTS_PER_TAG: u32 = 20;
pub const SOCIAL_SCORE_CAP: u32 = 100;

// ── Snippets ───────────────────────────────────────────────────────────────

pub const TITLE_SNIPPET: &str = "<title>Your optimized title here</title>";
pub const DESCRIPTION_SNIPPET: &str =
    r#"<meta name="description" content="Your optimized description here">"#;
pub const CANONICAL_SNIPPET: &str =
    r#"<link rel="canonical" href="https://yourdomain.com/current-page">"#;

pub const OG_STARTER_SNIPPET: &str = concat!(
    r#"<meta property="og:title" content="Your Title">"#,
    "\n",
    r#"<meta property="og:description" content="Your Description">"#,
    "\n",
    r#"<meta property="og:image" content="https://yourdomain.com/image.jpg">"#,
    "\n",
    r#"<meta property="og:url" content="https://yourdomain.com/page">"#,
    "\n",
    r#"<meta property="og:type" content="website">"#,
);
pub const OG_IMAGE_SNIPPET: &str =
    r#"<meta property="og:image" content="https://yourdomain.com/image.jpg">"#;

pub const TWITTER_STARTER_SNIPPET: &str = concat!(
    r#"<meta name="twitter:card" content="summary_large_image">"#,
    "\n",
    r#"<meta name="twitter:site" content="@yourusername">"#,
    "\n",
    r#"<meta name="twitter:title" content="Your Title">"#,
    "\n",
    r#"<meta name="twitter:description" content="Your Description">"#,
    "\n",
    r#"<meta name="twitter:image" content="https://yourdomain.com/image.jpg">"#,
);
pub const TWITTER_IMAGE_SNIPPET: &str =
    r#"<meta name="twitter:image" content="https://yourdomain.com/image.jpg">"#;
pub const TWITTER_IMAGE_ALT_SNIPPET: &str =
    r#"<meta name="twitter:image:alt" content="Description of the image">"#;

pub const STRUCTURED_DATA_SNIPPET: &str = r#"<script type="application/ld+json">
{
  "@context": "https://schema.org",
  "@type": "WebPage",
  "name": "Page Title",
  "description": "Page description"
}
</script>"#;
