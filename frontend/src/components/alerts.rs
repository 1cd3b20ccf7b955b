//! Transient alert banners.
//!
//! Alerts stack at the top of the page content, auto-dismiss after
//! [`ALERT_DISMISS_MS`] and carry a close button for earlier dismissal.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::{Alert, AlertLevel, ALERT_DISMISS_MS};

/// Hand out the next alert id.
///
/// A plain counter: ids must be distinct even for alerts pushed within
/// the same millisecond, or one dismissal would take both banners.
fn next_alert_id() -> u64 {
    thread_local! {
        static NEXT_ID: Cell<u64> = const { Cell::new(0) };
    }
    NEXT_ID.with(|id| {
        let v = id.get();
        id.set(v + 1);
        v
    })
}

/// Push an alert and schedule its auto-dismissal.
///
/// Dismissal is keyed by the alert id, so closing one banner early never
/// takes a later one with it.
pub fn push_alert(set_alerts: WriteSignal<Vec<Alert>>, level: AlertLevel, message: &str) {
    let id = next_alert_id();

    match level {
        AlertLevel::Danger => log::error!("{}", message),
        AlertLevel::Warning => log::warn!("{}", message),
        _ => log::info!("{}", message),
    }

    set_alerts.update(|alerts| {
        alerts.push(Alert {
            id,
            message: message.to_string(),
            level,
        });
    });

    spawn_local(async move {
        TimeoutFuture::new(ALERT_DISMISS_MS).await;
        set_alerts.update(|alerts| alerts.retain(|a| a.id != id));
    });
}

/// Stack of active alert banners.
#[component]
pub fn AlertStack(
    /// Signal for the active alerts
    alerts: ReadSignal<Vec<Alert>>,
    /// Set alerts signal (for manual dismissal)
    set_alerts: WriteSignal<Vec<Alert>>,
) -> impl IntoView {
    view! {
        <div class="alert-stack" id="alertStack">
            <For
                each=move || alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div class=format!("alert {}", alert.level.css_class()) role="alert">
                            <i class=format!("fas {} me-2", alert.level.icon())></i>
                            {alert.message.clone()}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| {
                                    set_alerts.update(|alerts| alerts.retain(|a| a.id != id))
                                }
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_ids_are_distinct() {
        // Back-to-back pushes land in the same millisecond; the ids must
        // still differ so each banner dismisses independently.
        let a = next_alert_id();
        let b = next_alert_id();
        let c = next_alert_id();
        assert!(a < b);
        assert!(b < c);
    }
}
