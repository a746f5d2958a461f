use dioxus::prelude::*;

use crate::core::{dashboard::Dashboard, timing, toast::DismissTicket};

/// Renders the current toast and owns its dismissal timer. A new toast cancels
/// the pending timer before scheduling its own.
#[component]
pub fn ToastHost(dashboard: Signal<Dashboard>) -> Element {
    let mut pending: Signal<Option<Task>> = use_signal(|| None);
    let mut scheduled: Signal<Option<DismissTicket>> = use_signal(|| None);

    use_effect(move || {
        let (ticket, delay) = {
            let dash = dashboard.read();
            (dash.toaster().pending_ticket(), dash.config().toast_dismiss_ms)
        };
        let Some(ticket) = ticket else {
            return;
        };
        // Other dashboard updates re-run this effect; keep the running timer.
        if *scheduled.peek() == Some(ticket) {
            return;
        }
        scheduled.set(Some(ticket));
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let mut dashboard = dashboard;
        let task = spawn(async move {
            timing::sleep_ms(delay).await;
            dashboard.with_mut(|dash| dash.dismiss_toast(ticket));
        });
        pending.set(Some(task));
    });

    let toast = dashboard.read().toaster().current().cloned();

    rsx! {
        if let Some(toast) = toast {
            div {
                id: "toast",
                class: "toast",
                role: "alert",
                style: "background-color: {toast.severity.background()}; display: block;",
                "{toast.message}"
            }
        }
    }
}
