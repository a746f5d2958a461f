use dioxus::prelude::*;

use crate::core::{dashboard::Dashboard, timing};

/// Manual weight/size form plus the sensor simulation button.
#[component]
pub fn ReadingControls(dashboard: Signal<Dashboard>) -> Element {
    let mut dashboard = dashboard;
    let mut weight = use_signal(String::new);
    let mut size = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let (w, s) = (weight(), size());
        // Errors surface through the dashboard toast.
        let _ = dashboard.with_mut(|dash| dash.submit_manual(&w, &s, timing::now_local()));
    };

    let simulate = move |_| {
        let mut rng = rand::thread_rng();
        dashboard.with_mut(|dash| dash.simulate(&mut rng, timing::now_local()));
    };

    rsx! {
        section { class: "dashboard-card reading-controls",
            div { class: "dashboard-card__header",
                h2 { {crate::t!("controls-title")} }
            }

            form { class: "reading-controls__form", onsubmit: submit,
                label { class: "reading-controls__field",
                    span { {crate::t!("controls-weight-label")} }
                    input {
                        id: "weightInput",
                        r#type: "number",
                        step: "0.01",
                        inputmode: "decimal",
                        placeholder: "2.5",
                        value: "{weight}",
                        oninput: move |evt| weight.set(evt.value()),
                    }
                }
                label { class: "reading-controls__field",
                    span { {crate::t!("controls-size-label")} }
                    input {
                        id: "sizeInput",
                        r#type: "number",
                        step: "0.01",
                        inputmode: "decimal",
                        placeholder: "7",
                        value: "{size}",
                        oninput: move |evt| size.set(evt.value()),
                    }
                }

                div { class: "reading-controls__actions",
                    button { r#type: "submit", class: "button button--primary",
                        {crate::t!("controls-submit")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: simulate,
                        {crate::t!("controls-simulate")}
                    }
                }
            }
        }
    }
}
