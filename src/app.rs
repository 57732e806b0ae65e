use dioxus::prelude::*;
use keepsake_core::{scan_years, Theme, ThemePreference, ThemeStore, YearGroup};

use crate::components::ThemeToggle;
use crate::context::{get_config, TIMELINE_YEARS};
use crate::pages::{Birthday, Landing, Memories};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the "Open Your Gift" button
/// - `/birthday` - Main greeting with countdown and final surprise
/// - `/memories` - Photo timeline with lightbox
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/birthday")]
    Birthday {},
    #[route("/memories")]
    Memories {},
}

/// Root application component.
///
/// Provides global styles, theme context, the loaded photo groups, and
/// routing.
#[component]
pub fn App() -> Element {
    // Theme preference: read persisted value once at startup
    let theme: Signal<ThemePreference> =
        use_signal(|| ThemeStore::new(&get_config().data_dir).load());

    // Photo groups, loaded once at startup
    let mut memories: Signal<Vec<YearGroup>> = use_signal(Vec::new);
    let mut memories_ready: Signal<bool> = use_signal(|| false);

    use_context_provider(|| theme);
    use_context_provider(|| memories);
    use_context_provider(|| memories_ready);

    // Scan the media store on mount
    use_effect(move || {
        spawn(async move {
            let config = get_config();
            match scan_years(&config.media_dir, &TIMELINE_YEARS) {
                Ok(groups) => {
                    let total: usize = groups.iter().map(|g| g.photos.len()).sum();
                    tracing::info!("media scan complete: {} photos", total);
                    memories.set(groups);
                }
                Err(e) => {
                    tracing::error!("media scan failed: {}", e);
                }
            }
            memories_ready.set(true);
        });
    });

    // Desktop builds have no system preference query; System renders light.
    let theme_class = match theme().effective(false) {
        Theme::Dark => "app dark",
        Theme::Light => "app",
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "{theme_class}",
            ThemeToggle {}
            Router::<Route> {}
        }
    }
}
