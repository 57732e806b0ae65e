//! Final surprise panel: celebratory sparkles, the friendship certificate
//! with SVG export, and the share link row.

use chrono::Local;
use dioxus::prelude::*;
use keepsake_core::{share_message, webshare_available, Certificate, ShareTarget};
use rfd::FileDialog;

use crate::components::SparkleOverlay;

/// Public page the share links point at.
const SHARE_PAGE_URL: &str = "https://keepsake.example/birthday";

const SHARE_TARGETS: [ShareTarget; 3] =
    [ShareTarget::X, ShareTarget::WhatsApp, ShareTarget::Facebook];

#[component]
pub fn FinalSurprise(friend_name: String, sender_name: String, age: Option<u32>) -> Element {
    let mut celebrating = use_signal(|| true);
    let mut export_status = use_signal(|| Option::<String>::None);

    // opening burst, then settle
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(2500)).await;
            celebrating.set(false);
        });
    });

    let certificate = Certificate {
        friend_name: friend_name.clone(),
        sender_name: sender_name.clone(),
        age,
        issued_on: Local::now().date_naive(),
    };
    let certificate_uri = certificate.to_data_uri();
    let message = share_message(&friend_name, &sender_name, age);

    let celebrate = move |_| {
        if celebrating() {
            return;
        }
        celebrating.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(2500)).await;
            celebrating.set(false);
        });
    };

    let export_certificate = {
        let certificate = certificate.clone();
        move |_| {
            let certificate = certificate.clone();
            export_status.set(None);
            spawn(async move {
                // File picker blocks, keep it off the UI thread
                let suggested = certificate.export_file_name();
                let picked = tokio::task::spawn_blocking(move || {
                    FileDialog::new()
                        .add_filter("SVG image", &["svg"])
                        .set_file_name(&suggested)
                        .save_file()
                })
                .await;

                match picked {
                    Ok(Some(path)) => match std::fs::write(&path, certificate.to_svg()) {
                        Ok(()) => {
                            tracing::info!("certificate exported to {:?}", path);
                            export_status.set(Some(format!("Saved to {}", path.display())));
                        }
                        Err(e) => {
                            tracing::error!("certificate export failed: {}", e);
                            export_status.set(Some(format!("Export failed: {e}")));
                        }
                    },
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!("file dialog task failed: {}", e);
                        export_status.set(Some("Export failed".to_string()));
                    }
                }
            });
        }
    };

    let cheers = match age {
        Some(age) => format!("Cheers to {age} years of awesomeness!"),
        None => "Cheers to another year of awesomeness!".to_string(),
    };

    rsx! {
        section { class: "panel surprise-panel",
            SparkleOverlay { show: celebrating() }

            h2 { class: "section-header", "Final Surprise \u{2728}" }
            p { class: "message-text", "{cheers}" }

            div { class: "surprise-actions",
                button { class: "btn-primary", onclick: celebrate, "\u{1F389} Celebrate" }
                button {
                    class: "btn-secondary",
                    onclick: export_certificate,
                    "\u{2B07} Download Certificate"
                }
            }

            if let Some(status) = export_status() {
                p { class: "status-text", "{status}" }
            }

            div { class: "certificate-frame",
                img { src: "{certificate_uri}", alt: "Friendship certificate" }
            }

            // No native share sheet on desktop; fall back to fixed links
            if !webshare_available() {
                div { class: "share-row",
                    for target in SHARE_TARGETS {
                        a {
                            key: "{target.label()}",
                            class: "btn-secondary",
                            href: "{target.share_url(&message, SHARE_PAGE_URL)}",
                            target: "_blank",
                            "{target.label()}"
                        }
                    }
                }
            }
        }
    }
}
