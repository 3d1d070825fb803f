//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::path::Path;

use serde_json::Value;

use crate::input::translation::Document;

/// `json!` で書いたオブジェクトを Document に変換する
///
/// # Panics
/// `value` がオブジェクトでない場合
#[allow(clippy::panic)]
pub(crate) fn document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("test document must be an object, got {other}"),
    }
}

/// 翻訳ファイルを `<dir>/<locale>.json` に書き込む
///
/// # Arguments
/// * `dir` - 翻訳ファイルのディレクトリ
/// * `locale` - 言語コード（例: "en", "si"）
/// * `content` - ファイルの中身
#[allow(clippy::unwrap_used)]
pub(crate) fn write_locale_file(dir: &Path, locale: &str, content: &str) {
    std::fs::write(dir.join(format!("{locale}.json")), content).unwrap();
}

/// トップレベルのキーを順番通りに取得する
pub(crate) fn top_level_keys(document: &Document) -> Vec<String> {
    document.keys().cloned().collect()
}
