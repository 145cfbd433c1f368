//! HTML fragments for marker popups and link validation for record fields.
//!
//! Dataset values are untrusted text: everything interpolated into markup is
//! escaped, and websites only become links when they resolve to an
//! `http(s)` URL.

use crate::record::{FacilityRecord, MISSING_FIELD, or_missing};

/// Result of checking a website field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebLink {
    /// Safe to use as an `href`.
    Valid(String),
    /// Shown as plain text.
    Invalid(WebLinkError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebLinkError {
    Empty,
    /// A scheme other than http/https (e.g. `javascript:`).
    UnsupportedScheme,
    NoHost,
}

impl std::fmt::Display for WebLinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::UnsupportedScheme => write!(f, "URL must use http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
        }
    }
}

/// Validate a website field for use as a link target.
///
/// Bare hosts such as `www.farm.example/about` are common in the dataset and
/// get an `https://` prefix.
pub fn web_link(raw: &str) -> WebLink {
    let raw = raw.trim();
    if raw.is_empty() {
        return WebLink::Invalid(WebLinkError::Empty);
    }

    let lower = raw.to_lowercase();
    let url = if lower.starts_with("http://") || lower.starts_with("https://") {
        raw.to_string()
    } else if raw.contains(':') || raw.contains(char::is_whitespace) {
        return WebLink::Invalid(WebLinkError::UnsupportedScheme);
    } else {
        format!("https://{raw}")
    };

    match extract_host(&url) {
        Some(host) if host.contains('.') => WebLink::Valid(url),
        _ => WebLink::Invalid(WebLinkError::NoHost),
    }
}

fn extract_host(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")?;
    let without_scheme = &url[scheme_end + 3..];
    let host_part = without_scheme.split(['/', '?', '#']).next()?;
    let host = host_part.split(':').next()?;
    (!host.is_empty()).then_some(host)
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Website as an anchor opening in a new tab, or escaped text if not linkable.
pub fn website_html(raw: &str) -> String {
    match web_link(raw) {
        WebLink::Valid(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(&url),
            escape_html(raw)
        ),
        WebLink::Invalid(_) => escape_html(raw),
    }
}

/// Popup body summarizing every field of a record.
///
/// Missing optional fields show the literal fallback text.
pub fn popup_html(record: &FacilityRecord) -> String {
    let website = record
        .website
        .as_deref()
        .map(website_html)
        .unwrap_or_else(|| MISSING_FIELD.to_string());

    format!(
        "<strong>{name}</strong><br>\
         <b>Type:</b> {types}<br>\
         <b>Crops:</b> {crops}<br>\
         <b>Contact:</b> {contact}<br>\
         <b>E-mail:</b> {email}<br>\
         <b>Address:</b> {address}<br>\
         <b>Website:</b> {website}",
        name = escape_html(&record.name),
        types = escape_html(&record.types_display()),
        crops = escape_html(&record.crops_display()),
        contact = escape_html(or_missing(&record.contact)),
        email = escape_html(or_missing(&record.email)),
        address = escape_html(or_missing(&record.address)),
    )
}
