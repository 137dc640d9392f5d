//! 写真ギャラリーコンポーネント
//!
//! `refresh` が変わるたびに一覧を取り直す。サムネイルのクリックでモーダル表示。

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use photo_share_common::{fetch_gallery, GalleryState, ImageRecord};
use crate::api::supabase::SupabaseClient;

#[component]
pub fn PhotoGallery(refresh: ReadSignal<u32>) -> impl IntoView {
    let (state, set_state) = signal(GalleryState::Loading);
    let (selected, set_selected) = signal(None::<ImageRecord>);

    Effect::new(move |_| {
        refresh.track();
        spawn_local(async move {
            let client = SupabaseClient::from_env();
            let records = fetch_gallery(&client).await.unwrap_or_else(|e| {
                console::error!(format!("Error fetching images: {}", e));
                Vec::new()
            });
            set_state.set(GalleryState::from_records(records));
        });
    });

    let on_select = move |image: ImageRecord| set_selected.set(Some(image));
    let on_close = move || set_selected.set(None);

    view! {
        {move || match state.get() {
            GalleryState::Loading => view! {
                <div class="gallery-loading">
                    <div class="spinner"></div>
                </div>
            }.into_any(),
            GalleryState::Empty => view! {
                <div class="gallery-empty">
                    <div class="empty-title">"No images uploaded yet"</div>
                    <div class="empty-hint">"Be the first to share a photo!"</div>
                </div>
            }.into_any(),
            GalleryState::Ready(records) => view! {
                <div class="photo-gallery">
                    <For
                        each=move || records.clone()
                        key=|image| image.id.clone()
                        children=move |image| view! { <PhotoCard image=image on_select=on_select /> }
                    />
                </div>
            }.into_any(),
        }}

        {move || selected.get().map(|image| view! { <ImageModal image=image on_close=on_close /> })}
    }
}

#[component]
fn PhotoCard<F>(image: ImageRecord, on_select: F) -> impl IntoView
where
    F: Fn(ImageRecord) + 'static + Clone + Send,
{
    let url = image.url.clone();
    let name = image.name.clone();

    view! {
        <div class="photo-card" on:click=move |_| on_select(image.clone())>
            <div class="photo-thumb">
                <img src=url alt=name loading="lazy" />
            </div>
            <div class="photo-hover">
                <span class="photo-hover-icon">"🔍"</span>
            </div>
        </div>
    }
}

/// 全画面プレビュー。オーバーレイか閉じるボタンのクリックで閉じる
#[component]
fn ImageModal<F>(image: ImageRecord, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let on_close_button = on_close.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal-content">
                <img src=image.url alt=image.name class="modal-image" />
                <button class="modal-close" on:click=move |_| on_close_button()>
                    "✕"
                </button>
            </div>
        </div>
    }
}
