use dioxus::prelude::*;

use crate::core::quality::QualityTier;

#[component]
pub fn StatusDisplay(#[props(!optional)] tier: Option<QualityTier>) -> Element {
    let (class_name, color, text) = match tier {
        Some(tier) => (
            format!("status-display {}", tier.css_class()),
            tier.color(),
            tier.headline(),
        ),
        None => (
            "status-display status--idle".to_string(),
            "inherit",
            crate::t!("status-waiting"),
        ),
    };

    rsx! {
        div {
            id: "statusDisplay",
            class: "{class_name}",
            style: "color: {color};",
            role: "status",
            "{text}"
        }
    }
}
