//! サマリー集計

use crate::config::TOP_CANDIDATE_CAP;
use crate::models::CandidateAnalysis;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub total: usize,
    /// 表示上限付きの人数（実際の上位抽出ではない）
    pub top: usize,
    /// 推薦スコア平均（小数1桁に丸め、0件なら0）
    pub average: f64,
}

impl SummaryStats {
    pub fn calculate(results: &[CandidateAnalysis]) -> Self {
        let total = results.len();
        let average = if total > 0 {
            let sum: f64 = results.iter().map(|r| r.recommendation_score).sum();
            ((sum / total as f64) * 10.0).round() / 10.0
        } else {
            0.0
        };
        SummaryStats {
            total,
            top: total.min(TOP_CANDIDATE_CAP),
            average,
        }
    }
}
