use dioxus::prelude::*;

use crate::core::{dashboard::Dashboard, platform, readings::ReadingSource, toast::ToastSeverity};

#[component]
pub fn ExportPanel(dashboard: Signal<Dashboard>) -> Element {
    let mut dashboard = dashboard;
    let (total, manual, simulated) = {
        let dash = dashboard.read();
        let log = dash.log();
        (
            log.len(),
            log.count_by(ReadingSource::Manual),
            log.count_by(ReadingSource::Simulated),
        )
    };

    let export = move |_| {
        let Ok(artifact) = dashboard.with_mut(|dash| dash.export_csv()) else {
            return;
        };
        let filename = artifact.filename.clone();
        let mime = artifact.mime();
        match platform::download_bytes(&filename, mime, artifact.into_bytes()) {
            Ok(Some(path)) => {
                tracing::info!(%path, "csv export written");
                dashboard.with_mut(|dash| {
                    dash.notify(format!("CSV saved to {path}"), ToastSeverity::Info)
                });
            }
            Ok(None) => tracing::info!(%filename, "csv download started"),
            Err(err) => {
                tracing::warn!("csv export failed: {err}");
                dashboard.with_mut(|dash| dash.notify(err.to_string(), ToastSeverity::Error));
            }
        }
    };

    rsx! {
        section { class: "dashboard-card export-panel",
            div { class: "dashboard-card__header",
                h2 { {crate::t!("export-title")} }
            }

            ul { class: "export-panel__summary",
                li { strong { "{total}" } " " {crate::t!("export-total")} }
                li { strong { "{manual}" } " " {crate::t!("export-manual")} }
                li { strong { "{simulated}" } " " {crate::t!("export-simulated")} }
            }

            div { class: "export-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: export,
                    {crate::t!("export-button")}
                }
            }
        }
    }
}
