//! 表示設定・固定文言

/// 「上位候補者」として表示する最大人数（フィルタではなく表示上の上限）
pub const TOP_CANDIDATE_CAP: usize = 4;

/// スコア色分けのしきい値（いずれも下限を含む）
pub const GOOD_THRESHOLD: f64 = 80.0;
pub const WARNING_THRESHOLD: f64 = 60.0;

// ============================================
// 代替文言
// ============================================

pub const NO_POSITIVE_POINTS: &str = "No specific positive points identified";
pub const NO_NEGATIVE_POINTS: &str = "No major concerns identified";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_AVAILABLE: &str = "N/A";
pub const GENERIC_EXPLANATION: &str = "This candidate has been evaluated across multiple dimensions including technical skills, experience relevance, and cultural fit.";

// ============================================
// CSVエクスポート
// ============================================

pub const CSV_HEADER: [&str; 7] = [
    "Rank",
    "PDF Resume",
    "Final Score",
    "Recruiter Score",
    "Analyst Score",
    "HR Score",
    "Recommendation",
];
pub const CSV_FILE_SUFFIX: &str = "_candidates.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// エクスポート完了表示を消すまでの時間（ms）
pub const EXPORT_NOTICE_MS: u32 = 2000;

// ============================================
// セッション読み込み
// ============================================

pub const SAMPLE_SESSION_URL: &str = "data/sample_session.json";

/// トレースログの保持件数
pub const MAX_LOG_ENTRIES: usize = 1000;
