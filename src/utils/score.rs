//! スコアの色分け・表示フォーマット

use crate::config::{GOOD_THRESHOLD, NOT_AVAILABLE, WARNING_THRESHOLD};

/// スコアの3段階評価
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Warning,
    Critical,
}

impl ScoreTier {
    /// 80以上: good / 60以上: warning / それ未満(NaN含む): critical
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_THRESHOLD {
            ScoreTier::Good
        } else if score >= WARNING_THRESHOLD {
            ScoreTier::Warning
        } else {
            ScoreTier::Critical
        }
    }

    /// 文字色クラス
    pub fn text_class(self) -> &'static str {
        match self {
            ScoreTier::Good => "score-text-good",
            ScoreTier::Warning => "score-text-warning",
            ScoreTier::Critical => "score-text-critical",
        }
    }

    /// 背景・枠線クラス
    pub fn badge_class(self) -> &'static str {
        match self {
            ScoreTier::Good => "score-badge-good",
            ScoreTier::Warning => "score-badge-warning",
            ScoreTier::Critical => "score-badge-critical",
        }
    }
}

/// 小数1桁表示（ちょうど中間の値は切り上げ）
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// 整数表示（-0 は 0 にそろえる）
pub fn format_integer(value: f64) -> String {
    format!("{}", value.round() + 0.0)
}

/// 最短表記（90.0 は "90"、88.5 は "88.5"）
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// 任意項目の表示（未設定は "N/A"）
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// プログレスバー幅（0〜100に丸める）
pub fn bar_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds_are_inclusive() {
        assert_eq!(ScoreTier::from_score(100.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Warning);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Warning);
        assert_eq!(ScoreTier::from_score(59.99), ScoreTier::Critical);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Critical);
        assert_eq!(ScoreTier::from_score(f64::NAN), ScoreTier::Critical);
    }

    #[test]
    fn test_tier_drives_both_classes() {
        let tier = ScoreTier::from_score(65.0);
        assert_eq!(tier.text_class(), "score-text-warning");
        assert_eq!(tier.badge_class(), "score-badge-warning");
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(format_one_decimal(88.0), "88.0");
        assert_eq!(format_one_decimal(72.26), "72.3");
        assert_eq!(format_one_decimal(72.25), "72.3");
        assert_eq!(format_one_decimal(88.25), "88.3");
        assert_eq!(format_integer(85.0), "85");
        assert_eq!(format_integer(85.6), "86");
        assert_eq!(format_integer(-0.4), "0");
        assert_eq!(format_number(90.0), "90");
        assert_eq!(format_number(88.5), "88.5");
    }

    #[test]
    fn test_optional_and_bar() {
        assert_eq!(format_optional(None), "N/A");
        assert_eq!(format_optional(Some(75.0)), "75");
        assert_eq!(bar_percent(120.0), 100.0);
        assert_eq!(bar_percent(-3.0), 0.0);
        assert_eq!(bar_percent(f64::NAN), 0.0);
    }
}
