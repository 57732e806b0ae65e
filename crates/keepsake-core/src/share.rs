//! Outbound share links for the final surprise panel.
//!
//! The core only builds the message and the pre-encoded URLs; opening them is
//! the user's click in the view layer.

/// The celebratory share text.
pub fn share_message(friend_name: &str, sender_name: &str, age: Option<u32>) -> String {
    let (count, plural) = match age {
        Some(1) => ("1".to_string(), ""),
        Some(age) => (format!("{age}"), "s"),
        None => ("many".to_string(), "s"),
    };
    format!(
        "Cheers to {count} year{plural} of awesomeness! Happy Birthday, {friend_name}! \u{1F389}\u{1F973} — From {sender_name}"
    )
}

/// Percent-encode a URL query component (RFC 3986: everything outside the
/// unreserved set is escaped, UTF-8 byte by byte).
pub fn percent_encode(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    for byte in component.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Third-party endpoints the panel links out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    X,
    WhatsApp,
    Facebook,
}

impl ShareTarget {
    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::X => "Share on X",
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Facebook => "Facebook",
        }
    }

    /// Build the outbound link carrying the message and page URL.
    pub fn share_url(self, message: &str, page_url: &str) -> String {
        match self {
            ShareTarget::X => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                percent_encode(message),
                percent_encode(page_url)
            ),
            ShareTarget::WhatsApp => format!(
                "https://wa.me/?text={}",
                percent_encode(&format!("{message} {page_url}"))
            ),
            ShareTarget::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                percent_encode(page_url)
            ),
        }
    }
}

/// Capability check for a native share sheet. Desktop builds have none, so
/// the view always renders the fixed link row.
pub fn webshare_available() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_handles_plurals_and_missing_age() {
        assert!(share_message("Meryem", "Muneeb", Some(23)).contains("23 years of awesomeness"));
        assert!(share_message("Meryem", "Muneeb", Some(1)).contains("1 year of awesomeness"));
        assert!(share_message("Meryem", "Muneeb", None).contains("many years"));
        assert!(share_message("Meryem", "Muneeb", Some(23)).ends_with("From Muneeb"));
    }

    #[test]
    fn percent_encoding_covers_reserved_and_utf8() {
        assert_eq!(percent_encode("abc-_.~123"), "abc-_.~123");
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn share_urls_embed_encoded_components() {
        let url = ShareTarget::X.share_url("hi there", "https://example.com/p?x=1");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=hi%20there&url=https%3A%2F%2Fexample.com%2Fp%3Fx%3D1"
        );

        let wa = ShareTarget::WhatsApp.share_url("hi", "https://example.com");
        assert!(wa.starts_with("https://wa.me/?text=hi%20https%3A%2F%2F"));

        let fb = ShareTarget::Facebook.share_url("ignored", "https://example.com");
        assert_eq!(
            fb,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com"
        );
    }

    #[test]
    fn desktop_has_no_native_share_sheet() {
        assert!(!webshare_available());
    }
}
