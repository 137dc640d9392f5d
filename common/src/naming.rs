//! Storageオブジェクト名の生成
//!
//! `<タイムスタンプms>-<36進乱数>.<拡張子>` 形式。時刻と乱数は呼び出し側が渡す。

/// 衝突しにくいオブジェクト名を生成
pub fn object_name(original_name: &str, timestamp_ms: u64, entropy: u64) -> String {
    format!(
        "{}-{}.{}",
        timestamp_ms,
        to_base36(entropy),
        extension(original_name)
    )
}

/// 最後の `.` 以降。ドットがなければ名前全体
pub fn extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
