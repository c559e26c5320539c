use scraper::{Html, Selector};

use crate::models::{OgTag, TagBag, TwitterTag};

/// Parse `html` and pull out every value the scoring rules look at.
///
/// A tag that is not in the document comes back as `None`. Attribute values
/// are returned as written; only the `<title>` text is trimmed.
pub fn extract_tags(html: &str) -> TagBag {
    let document = Html::parse_document(html);

    let charset = first_attr(&document, "meta[charset]", "charset")
        .filter(|s| !s.is_empty())
        .or_else(|| first_attr(&document, r#"meta[http-equiv="Content-Type"]"#, "content"));

    TagBag {
        title: title_text(&document),
        description: first_attr(&document, r#"meta[name="description"]"#, "content"),
        canonical: first_attr(&document, r#"link[rel="canonical"]"#, "href"),
        robots: first_attr(&document, r#"meta[name="robots"]"#, "content"),
        viewport: first_attr(&document, r#"meta[name="viewport"]"#, "content"),
        charset,
        language: first_attr(&document, "html", "lang"),
        og_tags: pairs(&document, r#"meta[property^="og:"]"#, "property")
            .into_iter()
            .map(|(property, content)| OgTag { property, content })
            .collect(),
        twitter_tags: pairs(&document, r#"meta[name^="twitter:"]"#, "name")
            .into_iter()
            .map(|(name, content)| TwitterTag { name, content })
            .collect(),
    }
}

fn first_attr(doc: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

fn title_text(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// `(key, content)` for every element matching `selector` where both the
/// key attribute and `content` are non-empty, in document order.
fn pairs(doc: &Html, selector: &str, key_attr: &str) -> Vec<(String, String)> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    doc.select(&selector)
        .filter_map(|el| {
            let key = el.value().attr(key_attr).filter(|k| !k.is_empty())?;
            let content = el.value().attr("content").filter(|c| !c.is_empty())?;
            Some((key.to_string(), content.to_string()))
        })
        .collect()
}
