//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    upload_area::UploadArea,
    photo_gallery::PhotoGallery,
};

/// メインアプリケーションコンポーネント
///
/// アップロード成功のたびにカウンタを進め、ギャラリーに再取得させる。
#[component]
pub fn App() -> impl IntoView {
    let (refresh, set_refresh) = signal(0u32);

    let on_uploaded = move || {
        set_refresh.update(bump_refresh);
    };

    view! {
        <div class="app">
            <main class="container">
                <UploadArea on_uploaded=on_uploaded />
                <PhotoGallery refresh=refresh />
            </main>
        </div>
    }
}

/// アップロード1件につき1回だけ進める
fn bump_refresh(counter: &mut u32) {
    *counter = counter.wrapping_add(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_refresh_once_per_upload() {
        let mut counter = 0u32;
        for _ in 0..3 {
            bump_refresh(&mut counter);
        }
        assert_eq!(counter, 3);
    }

    #[test]
    fn test_bump_refresh_wraps() {
        let mut counter = u32::MAX;
        bump_refresh(&mut counter);
        assert_eq!(counter, 0);
    }
}
