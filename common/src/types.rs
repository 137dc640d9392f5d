//! 画像レコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ImageRecord: imagesテーブルの1行（読み取り専用）
//! - NewImageRecord: アップロード後にinsertする行

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// アップロード済み画像のメタデータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ImageRow")]
pub struct ImageRecord {
    /// バックエンドが採番するID（数値IDも文字列として扱う）
    pub id: String,

    /// 公開URL
    pub url: String,

    /// 表示名（元のファイル名）
    #[serde(rename = "filename")]
    pub name: String,

    pub created_at: DateTime<Utc>,
}

/// テーブルの生の行
///
/// `filename` と `name` は両方あっても、片方だけでも、nullでもよい。
#[derive(Deserialize)]
struct ImageRow {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    url: String,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    name: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ImageRow> for ImageRecord {
    fn from(row: ImageRow) -> Self {
        let name = row
            .filename
            .filter(|s| !s.is_empty())
            .or(row.name)
            .unwrap_or_default();

        Self {
            id: row.id,
            url: row.url,
            name,
            created_at: row.created_at,
        }
    }
}

/// insert用の行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewImageRecord {
    pub filename: String,
    pub url: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or integer id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        // JSの数値はf64で届く
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            if v.fract() == 0.0 && v.is_finite() {
                Ok(format!("{}", v as i64))
            } else {
                Err(E::custom(format!("non-integer id: {}", v)))
            }
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_image_record_deserialize_supabase_row() {
        let json = r#"{
            "id": "8d5c0f3e-1a2b-4c3d-9e8f-0123456789ab",
            "filename": "beach.jpg",
            "url": "https://demo.supabase.co/storage/v1/object/public/images/1700000000000-abc.jpg",
            "created_at": "2024-05-01T10:00:00.123456+00:00"
        }"#;

        let record: ImageRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, "8d5c0f3e-1a2b-4c3d-9e8f-0123456789ab");
        assert_eq!(record.name, "beach.jpg");
        assert!(record.url.ends_with("1700000000000-abc.jpg"));
        assert_eq!(record.created_at.timestamp(), 1714557600);
    }

    #[test]
    fn test_image_record_numeric_id() {
        let json = r#"{"id": 42, "filename": "a.png", "url": "u", "created_at": "2024-01-01T00:00:00Z"}"#;
        let record: ImageRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, "42");
    }

    #[test]
    fn test_image_record_name_alias() {
        let json = r#"{"id": "1", "name": "legacy.gif", "url": "u", "created_at": "2024-01-01T00:00:00Z"}"#;
        let record: ImageRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.name, "legacy.gif");
    }

    #[test]
    fn test_image_record_prefers_filename_when_both_columns_exist() {
        let json = r#"{"id": 1, "filename": "a.png", "name": "old.png", "url": "u", "created_at": "2024-01-01T00:00:00Z"}"#;
        let record: ImageRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.name, "a.png");

        let json = r#"{"id": 1, "filename": "a.png", "name": null, "url": "u", "created_at": "2024-01-01T00:00:00Z"}"#;
        let record: ImageRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.name, "a.png");
    }

    #[test]
    fn test_image_record_falls_back_to_name_column() {
        let json = r#"{"id": 1, "filename": null, "name": "legacy.png", "url": "u", "created_at": "2024-01-01T00:00:00Z"}"#;
        let record: ImageRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.name, "legacy.png");
    }

    #[test]
    fn test_null_name_does_not_drop_the_list() {
        let json = r#"[
            {"id": 1, "filename": "a.png", "url": "u1", "created_at": "2024-01-02T00:00:00Z"},
            {"id": 2, "filename": null, "url": "u2", "created_at": "2024-01-01T00:00:00Z"}
        ]"#;
        let records: Vec<ImageRecord> = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a.png");
        assert_eq!(records[1].name, "");
    }

    #[test]
    fn test_image_record_rejects_fractional_id() {
        let json = r#"{"id": 1.5, "filename": "a.png", "url": "u", "created_at": "2024-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<ImageRecord>(json).is_err());
    }

    #[test]
    fn test_image_record_serialize_uses_filename_column() {
        let record = ImageRecord {
            id: "1".to_string(),
            url: "https://example.com/a.png".to_string(),
            name: "a.png".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"filename\":\"a.png\""));
        assert!(!json.contains("\"name\""));
    }

    #[test]
    fn test_new_image_record_serialize() {
        let record = NewImageRecord {
            filename: "cat.webp".to_string(),
            url: "https://example.com/cat.webp".to_string(),
        };
        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"filename":"cat.webp","url":"https://example.com/cat.webp"}"#);
    }
}
