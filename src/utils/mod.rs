//! ユーティリティモジュール

pub mod csv_export;
pub mod download;
pub mod log_trace;
pub mod score;
pub mod stats;
