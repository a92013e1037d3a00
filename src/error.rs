//! エラー型

use thiserror::Error;

/// CSVエクスポートの失敗
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV生成失敗: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV出力の取り出し失敗: {0}")]
    Flush(String),
    #[error("CSVがUTF-8ではありません: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("ブラウザAPI失敗: {0}")]
    Browser(String),
}

/// セッション読み込みの失敗
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch失敗: {0}")]
    Fetch(String),
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
    #[error("デシリアライズ失敗: {0}")]
    Decode(String),
    #[error("ファイル読み込み失敗: {0}")]
    File(String),
}
