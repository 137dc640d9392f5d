//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはファイル選択で受け取った画像を順番にアップロードする。

use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};
use photo_share_common::{object_name, UploadEvent, UploadPipeline, UploadStatus};
use crate::api::supabase::{BrowserFile, SupabaseClient};

#[component]
pub fn UploadArea<F>(on_uploaded: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (is_uploading, set_is_uploading) = signal(false);
    let (status, set_status) = signal(UploadStatus::Idle);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_files = move |files: Vec<File>| {
        let on_uploaded = on_uploaded.clone();
        spawn_local(async move {
            let client = SupabaseClient::from_env();
            let pipeline = UploadPipeline::new(&client, browser_object_name);
            let payloads = files.into_iter().map(BrowserFile::new).collect();

            let result = pipeline
                .run(payloads, |event| match event {
                    UploadEvent::Started { .. } => {
                        set_is_uploading.set(true);
                        set_status.set(UploadStatus::Idle);
                    }
                    UploadEvent::Uploaded(_) => {
                        show_status(set_status, UploadStatus::Success);
                        on_uploaded();
                    }
                    UploadEvent::Failed(failed) => {
                        console::error!(format!("Upload error ({}): {}", failed.file_name, failed.message));
                        show_status(set_status, UploadStatus::Error(failed.message));
                    }
                })
                .await;

            if let Err(e) = result {
                show_status(set_status, UploadStatus::Error(e.user_message()));
            }

            set_is_uploading.set(false);
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        });
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(file_list_to_vec(&files));
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            handle_files(file_list_to_vec(&files));
        }
    };

    let on_browse = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if is_uploading.get() {
                    classes.push("uploading");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                multiple=true
                class="file-input"
                disabled=move || is_uploading.get()
                on:change=on_change
            />

            <div class="upload-icon">"📷"</div>
            <p class="upload-title">
                {move || if is_dragover.get() { "Drop your images here" } else { "Upload your photos" }}
            </p>
            <p class="text-muted">"Drag & drop images here, or click to browse"</p>

            <button
                type="button"
                class=move || format!("btn upload-button {}", status.get().as_str())
                disabled=move || is_uploading.get()
                on:click=on_browse
            >
                {move || button_label(is_uploading.get(), &status.get())}
            </button>

            {move || status.get().error_message().map(|message| view! {
                <p class="error-message">{message.to_string()}</p>
            })}
        </div>
    }
}

fn button_label(is_uploading: bool, status: &UploadStatus) -> &'static str {
    if is_uploading {
        return "Uploading...";
    }
    match status {
        UploadStatus::Idle => "Upload Photo",
        UploadStatus::Success => "Uploaded!",
        UploadStatus::Error(_) => "Error",
    }
}

/// 状態を表示し、一定時間後にIdleへ戻す
fn show_status(set_status: WriteSignal<UploadStatus>, next: UploadStatus) {
    if let Some(delay) = next.display_duration() {
        Timeout::new(delay.as_millis() as u32, move || {
            set_status.set(UploadStatus::Idle);
        })
        .forget();
    }
    set_status.set(next);
}

fn browser_object_name(original: &str) -> String {
    let timestamp_ms = js_sys::Date::now() as u64;
    let entropy = (js_sys::Math::random() * u64::MAX as f64) as u64;
    object_name(original, timestamp_ms, entropy)
}

fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}
