//! Async photo loader.
//!
//! Reads the image file off the UI thread and displays it as a data URI,
//! with loading and broken-image states. A failed read stays broken; there
//! is no retry or fallback asset.

use base64::Engine;
use dioxus::prelude::*;

fn mime_for(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "gif" => "image/gif",
        _ => "image/jpeg",
    }
}

#[component]
pub fn PhotoImage(
    /// Filesystem path of the image
    source_path: String,
    /// Alt text for accessibility
    alt: String,
) -> Element {
    let mut image_data = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut failed = use_signal(|| false);

    // Load once on mount
    use_effect(move || {
        let path = source_path.clone();
        spawn(async move {
            loading.set(true);
            failed.set(false);

            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                    image_data.set(Some(format!("data:{};base64,{}", mime_for(&path), encoded)));
                }
                Err(e) => {
                    tracing::warn!("failed to read photo {}: {}", path, e);
                    failed.set(true);
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        if loading() {
            div { class: "status-text", "..." }
        } else if failed() {
            div { class: "status-text", "\u{26A0} unavailable" }
        } else if let Some(uri) = image_data() {
            img { src: "{uri}", alt: "{alt}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_follows_extension() {
        assert_eq!(mime_for("/memories/2021/beach.png"), "image/png");
        assert_eq!(mime_for("pic.WEBP"), "image/webp");
        assert_eq!(mime_for("anim.gif"), "image/gif");
        assert_eq!(mime_for("photo.jpg"), "image/jpeg");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
    }

    #[test]
    fn unknown_or_missing_extension_defaults_to_jpeg() {
        assert_eq!(mime_for("noextension"), "image/jpeg");
        assert_eq!(mime_for("file.bmp"), "image/jpeg");
    }
}
