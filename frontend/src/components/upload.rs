//! CSV upload form with drag & drop support.
//!
//! Handles file selection, validation feedback and submit gating. The
//! actual transfer is the browser's native multipart POST to
//! [`UPLOAD_ENDPOINT`]; this component only decides whether it may leave.

use leptos::html::Input;
use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement, SubmitEvent};

use crate::gate::{FileStatus, SubmitDecision, UploadGate};
use crate::utils::format_file_size;
use crate::{push_alert, Alert, AlertLevel, FileMeta, MAX_UPLOAD_SIZE, UPLOAD_ENDPOINT};

#[component]
pub fn UploadSection(
    set_alerts: WriteSignal<Vec<Alert>>,
    is_processing: ReadSignal<bool>,
    set_is_processing: WriteSignal<bool>,
) -> impl IntoView {
    let (selected_file, set_selected_file) = create_signal(None::<FileMeta>);
    let (file_status, set_file_status) = create_signal(None::<FileStatus>);
    let (drag_active, set_drag_active) = create_signal(false);

    // The gate owns the in-progress flag; nothing else reads or writes it.
    let gate = store_value(UploadGate::new());

    let file_input = create_node_ref::<Input>();

    // Single funnel for the picker and drag & drop.
    let handle_selection = move |file: FileMeta| {
        let status = FileStatus::for_file(&file);
        match &status.detail {
            None => log::info!("📄 Selected {} ({})", file.name, status.size_display),
            Some(reason) => log::warn!("Rejected {}: {}", file.name, reason),
        }
        set_selected_file.set(Some(file));
        set_file_status.set(Some(status));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => handle_selection(FileMeta::new(file.name(), file.size() as u64)),
            None => {
                // Reopening the picker and cancelling clears the input.
                // Drop our snapshot with it so the submit gate and button
                // never act on a file the input no longer holds.
                log::info!("Selection cleared");
                set_selected_file.set(None);
                set_file_status.set(None);
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);

        let Some(data) = ev.data_transfer() else {
            return;
        };
        let Some(files) = data.files() else {
            return;
        };
        if let Some(file) = files.get(0) {
            // Mirror the drop into the input so the native submission
            // carries the file. First file wins.
            if let Some(input) = file_input.get() {
                input.set_files(Some(&files));
            }
            handle_selection(FileMeta::new(file.name(), file.size() as u64));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        let decision = gate
            .try_update_value(|g| g.decide_submit(selected_file.get().as_ref()))
            .unwrap_or(SubmitDecision::AlreadyInProgress);

        match decision {
            SubmitDecision::AlreadyInProgress => {
                ev.prevent_default();
            }
            SubmitDecision::NoFileSelected => {
                ev.prevent_default();
                push_alert(
                    set_alerts,
                    AlertLevel::Warning,
                    "Please select a CSV file to upload.",
                );
            }
            SubmitDecision::Rejected(e) => {
                ev.prevent_default();
                push_alert(set_alerts, AlertLevel::Danger, &e.to_string());
            }
            SubmitDecision::Proceed => {
                // Let the native POST go through; the server renders the
                // results page, so this page is on its way out.
                log::info!("📤 Submitting CSV for analysis...");
                set_is_processing.set(true);
            }
        }
    };

    view! {
        <div class="card upload-card">
            <form
                method="post"
                action=UPLOAD_ENDPOINT
                enctype="multipart/form-data"
                on:submit=on_submit
            >
                <div
                    class="drop-zone"
                    class=("drag-over", move || drag_active.get())
                    on:dragover=move |ev: DragEvent| {
                        ev.prevent_default();
                        set_drag_active.set(true);
                    }
                    on:dragleave=move |ev: DragEvent| {
                        ev.prevent_default();
                        set_drag_active.set(false);
                    }
                    on:drop=on_drop
                >
                    <div class="upload-icon"><i class="fas fa-file-csv"></i></div>
                    <div class="upload-text">"Drop your transactions CSV here"</div>
                    <div class="upload-hint">"or pick a file below"</div>
                    <div class="upload-hint">
                        {format!("Maximum file size: {}", format_file_size(MAX_UPLOAD_SIZE))}
                    </div>
                    <input
                        type="file"
                        id="file"
                        name="file"
                        accept=".csv"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                </div>

                // Status panel for the current selection
                {move || {
                    file_status
                        .get()
                        .map(|status| {
                            view! {
                                <div class=format!("alert {}", status.level.css_class()) id="fileInfo">
                                    <i class=format!("fas {} me-2", status.level.icon())></i>
                                    <strong>{status.file_name.clone()}</strong>
                                    " (" {status.size_display.clone()} ")"
                                    {status
                                        .detail
                                        .clone()
                                        .map(|reason| view! { <br/> <small>{reason}</small> })}
                                </div>
                            }
                        })
                }}

                <button
                    type="submit"
                    id="submitBtn"
                    class="btn btn-primary"
                    disabled=move || {
                        is_processing.get()
                            || !file_status.get().map(|s| s.submit_enabled).unwrap_or(false)
                    }
                >
                    {move || {
                        if is_processing.get() {
                            view! { <i class="fas fa-spinner fa-spin me-2"></i> "Processing..." }
                                .into_view()
                        } else {
                            view! { <i class="fas fa-search me-2"></i> "Analyze Transactions" }
                                .into_view()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
