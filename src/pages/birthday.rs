//! Birthday page - cake, message, countdown, and the final surprise.

use chrono::{Datelike, Local};
use dioxus::prelude::*;
use keepsake_core::{compute_age, AnnualDate};

use crate::app::Route;
use crate::components::{BirthdayMessage, CakeSvg, Countdown, FinalSurprise};
use crate::context::get_config;

#[component]
pub fn Birthday() -> Element {
    let config = get_config();

    let today = Local::now().date_naive();
    let age = compute_age(config.birthdate, today);
    let age = u32::try_from(age).ok();

    // Month/day straight from a real birthdate are always valid.
    let target = AnnualDate::new(config.birthdate.month(), config.birthdate.day()).ok();

    rsx! {
        main { class: "birthday-main",
            section { class: "hero",
                CakeSvg {}
                h1 { class: "page-title", "Happy Birthday, {config.friend_name} \u{1F49C}" }
                p { class: "hero-subtitle",
                    "Wishing you a day filled with love, laughter, and the sweetest memories."
                }
                div { class: "surprise-actions",
                    Link { class: "btn-secondary", to: Route::Memories {}, "Sweet Moments" }
                }
            }

            BirthdayMessage {
                title: "Your Birthday Wish".to_string(),
                message: format!(
                    "{}, you brighten every room with your kindness and sparkle. \
                     Here's to more wonder, more laughter, and more adventures together — \
                     today and always.",
                    config.friend_name
                ),
            }

            section { class: "panel",
                h2 { class: "section-header", "Countdown \u{23F3}" }
                if let Some(target) = target {
                    Countdown {
                        target,
                        quote: "Friendship doubles our joy and divides our sorrow.".to_string(),
                    }
                }
            }

            FinalSurprise {
                friend_name: config.friend_name.clone(),
                sender_name: config.sender_name.clone(),
                age,
            }
        }
    }
}
