//! ブラウザ上でのテスト（wasm-pack test --headless --firefox）

#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use photo_share_common::{fetch_gallery, BackendConfig, Error, ImageSource, UploadPipeline};
use photo_share_wasm::api::supabase::{BrowserFile, SupabaseClient};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{File, FilePropertyBag};

wasm_bindgen_test_configure!(run_in_browser);

fn make_file(name: &str, mime: &str) -> File {
    let parts = Array::new();
    parts.push(&JsValue::from_str("dummy"));
    let bag = FilePropertyBag::new();
    bag.set_type(mime);
    File::new_with_str_sequence_and_options(&parts, name, &bag).expect("File生成失敗")
}

#[wasm_bindgen_test]
fn browser_file_reports_name_and_mime() {
    let file = BrowserFile::new(make_file("cat.png", "image/png"));
    assert_eq!(file.file_name(), "cat.png");
    assert_eq!(file.mime_type(), "image/png");
    assert!(file.is_image());
}

#[wasm_bindgen_test]
fn browser_file_non_image() {
    let file = BrowserFile::new(make_file("notes.txt", "text/plain"));
    assert!(!file.is_image());
}

#[wasm_bindgen_test]
async fn non_image_selection_is_rejected_before_fetch() {
    let client = SupabaseClient::new(BackendConfig::default());
    let pipeline = UploadPipeline::new(&client, |name: &str| name.to_string());
    let files = vec![BrowserFile::new(make_file("notes.txt", "text/plain"))];

    let result = pipeline.run(files, |_| {}).await;
    assert!(matches!(result, Err(Error::NoImageFiles)));
}

#[wasm_bindgen_test]
async fn placeholder_backend_yields_empty_gallery() {
    let client = SupabaseClient::new(BackendConfig::default());
    let records = fetch_gallery(&client).await.expect("取得失敗");
    assert!(records.is_empty());
}
