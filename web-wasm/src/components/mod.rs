pub mod upload_area;
pub mod photo_gallery;
