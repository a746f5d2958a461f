use dioxus::prelude::*;

use crate::components::AppNavbar;
use crate::core::{
    config::DashboardConfig, dashboard::Dashboard, platform, storage::PreferenceStore,
    theme::ThemeStore,
};
use crate::dashboard::{ExportPanel, QualityChart, ReadingControls, StatusDisplay, ToastHost};

/// The whole widget: navbar, status, chart, controls, export and toast.
#[component]
pub fn DashboardPage() -> Element {
    let config = use_hook(DashboardConfig::default);
    let theme_key = config.theme_storage_key.clone();

    let dashboard = use_signal(move || Dashboard::new(config));
    let theme = use_signal(move || ThemeStore::load_on_startup(PreferenceStore::open(), theme_key));

    // Apply the saved theme to the document root once on load.
    use_hook(move || {
        let dark = theme.peek().is_dark();
        tracing::info!(platform = ?platform::Platform::current(), dark, "dashboard mounted");
        platform::apply_root_theme(dark);
    });

    // Subscribe to the global language code so localized panels remount on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let root_class = if theme.read().is_dark() {
        format!("dashboard-root {}", platform::DARK_CLASS)
    } else {
        "dashboard-root".to_string()
    };

    let (tier, series) = {
        let dash = dashboard.read();
        (dash.status(), dash.series().clone())
    };

    rsx! {
        div { class: "{root_class}",
            AppNavbar { theme }

            // Keyed on the language; dashboard and theme state live above this node.
            main { key: "{lang}", class: "page page-dashboard",
                h1 { {crate::t!("dashboard-title")} }
                p { {crate::t!("dashboard-intro")} }

                StatusDisplay { tier }

                div { class: "dashboard__panels",
                    QualityChart { series }
                    div { class: "dashboard__side",
                        ReadingControls { dashboard }
                        ExportPanel { dashboard }
                    }
                }
            }

            ToastHost { dashboard }
        }
    }
}
