//! バックエンドAPI

pub mod supabase;
