//! ギャラリー一覧の表示

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use photo_share_common::ImageRecord;

pub const EMPTY_TITLE: &str = "No images uploaded yet";
pub const EMPTY_HINT: &str = "Be the first to share a photo!";

/// 一覧をテーブル文字列に。0件なら空状態のメッセージ
pub fn render_table(records: &[ImageRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n{}", EMPTY_TITLE, EMPTY_HINT);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Created").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.name),
            Cell::new(record.created_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::new(&record.url),
        ]);
    }

    table.to_string()
}

pub fn render_json(records: &[ImageRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, name: &str) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            url: format!("https://abcd.supabase.co/storage/v1/object/public/images/{}", name),
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_render_table_empty_state() {
        let output = render_table(&[]);
        assert!(output.contains(EMPTY_TITLE));
        assert!(output.contains(EMPTY_HINT));
    }

    #[test]
    fn test_render_table_rows_in_given_order() {
        let output = render_table(&[record("2", "newer.png"), record("1", "older.png")]);
        let newer = output.find("newer.png").expect("行がない");
        let older = output.find("older.png").expect("行がない");
        assert!(newer < older);
        assert!(output.contains("2024-06-01"));
        assert!(!output.contains(EMPTY_TITLE));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[record("1", "a.png")]).expect("シリアライズ失敗");
        assert!(json.contains("\"filename\": \"a.png\""));
    }
}
