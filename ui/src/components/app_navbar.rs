use crate::core::{platform, theme::ThemeStore};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

// Navbar stylesheet (served as an asset on web, inlined in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Top bar with the brand, the theme toggle and the locale switcher.
///
/// The theme signal is owned by the page; toggling flips and persists it and
/// mirrors the class onto the document root.
#[component]
pub fn AppNavbar(theme: Signal<ThemeStore>) -> Element {
    i18n::init();

    let mut theme = theme;
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the launcher provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("couldn't switch language to {val}: {err}"),
        }
    };

    let on_toggle = move |_| {
        let next = theme.with_mut(|store| store.toggle());
        platform::apply_root_theme(next.is_dark());
    };

    let is_dark = theme.read().is_dark();
    let toggle_label = if is_dark {
        t!("theme-toggle-light")
    } else {
        t!("theme-toggle-dark")
    };
    let toggle_icon = if is_dark { "\u{2600}" } else { "\u{263E}" };
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps a dependency on the global language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", {t!("brand")} }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__theme-toggle",
                        title: "{toggle_label}",
                        aria_label: "{toggle_label}",
                        onclick: on_toggle,
                        "{toggle_icon}"
                    }

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
