//! Friendship certificate: age computation and SVG rendering.
//!
//! The SVG carries concrete colors rather than CSS variables so the exported
//! file stands alone outside the app.

use base64::Engine as _;
use chrono::{Datelike, NaiveDate};

const OFF_WHITE: &str = "#FAF9F6";
const BLUSH: &str = "#FFB3D9";
const LAVENDER: &str = "#E6E6FA";
const PERIWINKLE: &str = "#CCCCFF";
const DEEP_PURPLE: &str = "#663399";
const CHARCOAL: &str = "#36454F";
const SLATE: &str = "#708090";

/// Calendar age at `today`, decremented when the birthday has not yet come
/// around this year. Negative for birthdates in the future.
pub fn compute_age(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    let had_birthday = (today.month(), today.day()) >= (birthdate.month(), birthdate.day());
    if !had_birthday {
        age -= 1;
    }
    age
}

/// Everything needed to render one certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub friend_name: String,
    pub sender_name: String,
    /// `None` renders "wonderful years" instead of a number.
    pub age: Option<u32>,
    pub issued_on: NaiveDate,
}

impl Certificate {
    /// Render the certificate as a standalone 1100x850 SVG document.
    pub fn to_svg(&self) -> String {
        let years = match self.age {
            Some(age) => format!("{age}"),
            None => "wonderful".to_string(),
        };
        let issued = self.issued_on.format("%B %-d, %Y");
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1100 850" width="1100" height="850">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="{OFF_WHITE}"/>
      <stop offset="100%" stop-color="{BLUSH}"/>
    </linearGradient>
    <linearGradient id="accent" x1="0" y1="0" x2="1" y2="0">
      <stop offset="0%" stop-color="{LAVENDER}"/>
      <stop offset="100%" stop-color="{BLUSH}"/>
    </linearGradient>
  </defs>
  <rect x="0" y="0" width="1100" height="850" fill="url(#bg)"/>
  <rect x="30" y="30" width="1040" height="790" rx="28" fill="none" stroke="{PERIWINKLE}" stroke-width="6"/>
  <rect x="50" y="50" width="1000" height="750" rx="24" fill="none" stroke="url(#accent)" stroke-width="8"/>
  <text x="550" y="180" text-anchor="middle" font-size="56" font-weight="700" fill="{DEEP_PURPLE}">Friendship Certificate</text>
  <text x="550" y="240" text-anchor="middle" font-size="26" fill="{CHARCOAL}">Here's to our never ending friendship</text>
  <text x="220" y="420" text-anchor="middle" font-size="40" font-weight="600" fill="{CHARCOAL}">{sender}</text>
  <text x="550" y="380" text-anchor="middle" font-size="24" fill="{CHARCOAL}">and</text>
  <text x="880" y="420" text-anchor="middle" font-size="40" font-weight="600" fill="{CHARCOAL}">{friend}</text>
  <rect x="250" y="480" width="600" height="70" rx="18" fill="url(#accent)" opacity="0.9"/>
  <text x="550" y="526" text-anchor="middle" font-size="30" font-weight="700" fill="{CHARCOAL}">Cheers to {years} years!</text>
  <text x="200" y="700" text-anchor="middle" font-size="18" fill="{SLATE}">Signed: {sender}</text>
  <text x="900" y="700" text-anchor="middle" font-size="18" fill="{SLATE}">For: {friend}</text>
  <text x="550" y="760" text-anchor="middle" font-size="16" fill="{SLATE}">Issued on {issued}</text>
</svg>"##,
            sender = xml_escape(&self.sender_name),
            friend = xml_escape(&self.friend_name),
        )
    }

    /// Inline `data:` URI for previewing the certificate in an `img` element.
    pub fn to_data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(self.to_svg());
        format!("data:image/svg+xml;base64,{encoded}")
    }

    /// Suggested file name for export, e.g.
    /// `Friendship-Certificate-Meryem-and-Muneeb.svg`.
    pub fn export_file_name(&self) -> String {
        format!(
            "Friendship-Certificate-{}-and-{}.svg",
            self.friend_name.replace(char::is_whitespace, "_"),
            self.sender_name.replace(char::is_whitespace, "_"),
        )
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_before_and_after_the_birthday() {
        let birth = date(2003, 11, 12);
        assert_eq!(compute_age(birth, date(2026, 11, 11)), 22);
        assert_eq!(compute_age(birth, date(2026, 11, 12)), 23);
        assert_eq!(compute_age(birth, date(2026, 11, 13)), 23);
    }

    #[test]
    fn age_of_future_birthdate_goes_negative() {
        assert_eq!(compute_age(date(2030, 1, 1), date(2026, 8, 26)), -4);
    }

    fn certificate() -> Certificate {
        Certificate {
            friend_name: "Meryem".to_string(),
            sender_name: "Muneeb".to_string(),
            age: Some(23),
            issued_on: date(2026, 11, 12),
        }
    }

    #[test]
    fn svg_carries_names_and_age() {
        let svg = certificate().to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Meryem"));
        assert!(svg.contains("Muneeb"));
        assert!(svg.contains("Cheers to 23 years!"));
        assert!(svg.contains("Issued on November 12, 2026"));
        // standalone: no unresolved CSS variables
        assert!(!svg.contains("var("));
    }

    #[test]
    fn missing_age_renders_wonderful_years() {
        let mut cert = certificate();
        cert.age = None;
        assert!(cert.to_svg().contains("Cheers to wonderful years!"));
    }

    #[test]
    fn names_are_xml_escaped() {
        let mut cert = certificate();
        cert.friend_name = "A & B <3".to_string();
        assert!(cert.to_svg().contains("A &amp; B &lt;3"));
    }

    #[test]
    fn data_uri_is_base64_svg() {
        assert!(certificate()
            .to_data_uri()
            .starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn export_file_name_replaces_spaces() {
        let mut cert = certificate();
        cert.sender_name = "Your Friend".to_string();
        assert_eq!(
            cert.export_file_name(),
            "Friendship-Certificate-Meryem-and-Your_Friend.svg"
        );
    }
}
