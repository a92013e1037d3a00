//! データ構造体モジュール

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{GENERIC_EXPLANATION, NOT_SPECIFIED};

/// `null` を既定値として扱うデシリアライザ
///
/// 上流の解析サービスは未計算の項目を `null` で返すことがあるため、
/// 欠損と同じく 0 / 空文字 / 空リストに落とす。
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 0 と NaN を「未設定」とみなす
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

// ============================================
// 解析結果
// ============================================

/// 履歴書1件分の解析結果（上流で計算済み、読み取り専用）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CandidateAnalysis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_name: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendation_score: f64,
    #[serde(default)]
    pub fit_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recruiter_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub analyst_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hr_score: f64,
    #[serde(default)]
    pub skills_match_percentage: Option<f64>,
    #[serde(default)]
    pub experience_relevance_score: Option<f64>,
    #[serde(default)]
    pub education_score: Option<f64>,
    #[serde(default)]
    pub resume_quality_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall_explanation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub positive_points: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub negative_points: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience_years: f64,
    #[serde(default)]
    pub education: Option<String>,
}

impl CandidateAnalysis {
    /// 表示名（ファイル名があればファイル名）
    pub fn display_name(&self) -> &str {
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.candidate_name,
        }
    }

    /// 0 以外の適合スコア
    pub fn fit_score(&self) -> Option<f64> {
        present(self.fit_score)
    }

    /// 表示スコア: 適合スコアがあればそれ、なければ推薦スコア
    pub fn display_score(&self) -> f64 {
        self.fit_score().unwrap_or(self.recommendation_score)
    }

    pub fn skills_match(&self) -> Option<f64> {
        present(self.skills_match_percentage)
    }

    pub fn experience_relevance(&self) -> Option<f64> {
        present(self.experience_relevance_score)
    }

    pub fn education_rating(&self) -> Option<f64> {
        present(self.education_score)
    }

    pub fn resume_quality(&self) -> Option<f64> {
        present(self.resume_quality_score)
    }

    /// 総合説明（空なら汎用文）
    pub fn explanation_or_fallback(&self) -> &str {
        if self.overall_explanation.is_empty() {
            GENERIC_EXPLANATION
        } else {
            &self.overall_explanation
        }
    }

    pub fn education_label(&self) -> &str {
        match self.education.as_deref() {
            Some(e) if !e.is_empty() => e,
            _ => NOT_SPECIFIED,
        }
    }
}

/// 求人情報（ここでは職種名のみ使用）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct JobDetails {
    #[serde(
        rename = "jobTitle",
        alias = "job_title",
        default,
        deserialize_with = "null_as_default"
    )]
    pub job_title: String,
}

/// 前ステップから受け取る一式
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScreeningSession {
    #[serde(rename = "jobDetails", alias = "job_details", default)]
    pub job_details: JobDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<CandidateAnalysis>,
}

// ============================================
// UI状態
// ============================================

/// 詳細パネルのタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Scores,
    Analysis,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Overview, DetailTab::Scores, DetailTab::Analysis];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Scores => "Scores",
            DetailTab::Analysis => "Analysis",
        }
    }
}

/// 結果画面のローカル状態（選択中の候補者とタブ）
///
/// 候補者は名前ではなく入力順の位置で選択する。同名の候補者がいても
/// 行ごとに区別できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub selected: Option<usize>,
    pub tab: DetailTab,
}

impl ViewState {
    /// 候補者がいれば先頭を選択した状態で開始
    pub fn new(candidate_count: usize) -> Self {
        ViewState {
            selected: (candidate_count > 0).then_some(0),
            tab: DetailTab::default(),
        }
    }

    /// 候補者を選択（タブは維持）。範囲外は無視。
    pub fn select(&mut self, index: usize, candidate_count: usize) {
        if index < candidate_count {
            self.selected = Some(index);
        }
    }

    /// タブ切り替え（選択は維持）
    pub fn set_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn selected_candidate<'a>(
        &self,
        results: &'a [CandidateAnalysis],
    ) -> Option<&'a CandidateAnalysis> {
        self.selected.and_then(|i| results.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, recommendation: f64, fit: Option<f64>) -> CandidateAnalysis {
        CandidateAnalysis {
            candidate_name: name.to_string(),
            recommendation_score: recommendation,
            fit_score: fit,
            ..Default::default()
        }
    }

    #[test]
    fn test_display_score_prefers_fit_score() {
        assert_eq!(candidate("a", 70.0, Some(85.5)).display_score(), 85.5);
        assert_eq!(candidate("a", 70.0, None).display_score(), 70.0);
    }

    #[test]
    fn test_zero_fit_score_counts_as_absent() {
        let c = candidate("a", 72.0, Some(0.0));
        assert_eq!(c.fit_score(), None);
        assert_eq!(c.display_score(), 72.0);
    }

    #[test]
    fn test_display_name_falls_back_to_candidate_name() {
        let mut c = candidate("Jane Doe", 50.0, None);
        assert_eq!(c.display_name(), "Jane Doe");
        c.file_name = Some(String::new());
        assert_eq!(c.display_name(), "Jane Doe");
        c.file_name = Some("jane.pdf".to_string());
        assert_eq!(c.display_name(), "jane.pdf");
    }

    #[test]
    fn test_text_fallbacks() {
        let mut c = CandidateAnalysis::default();
        assert_eq!(c.explanation_or_fallback(), GENERIC_EXPLANATION);
        assert_eq!(c.education_label(), NOT_SPECIFIED);
        c.overall_explanation = "Solid backend profile".to_string();
        c.education = Some("BSc Computer Science".to_string());
        assert_eq!(c.explanation_or_fallback(), "Solid backend profile");
        assert_eq!(c.education_label(), "BSc Computer Science");
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let json = r#"{
            "jobDetails": { "jobTitle": "Backend Engineer", "description": "ignored" },
            "results": [
                { "candidate_name": "A", "recommendation_score": 81, "hr_score": null,
                  "positive_points": null, "fit_score": null }
            ]
        }"#;
        let session: ScreeningSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.job_details.job_title, "Backend Engineer");
        let c = &session.results[0];
        assert_eq!(c.recommendation_score, 81.0);
        assert_eq!(c.hr_score, 0.0);
        assert_eq!(c.analyst_score, 0.0);
        assert!(c.positive_points.is_empty());
        assert_eq!(c.fit_score, None);
        assert_eq!(c.feedback, "");
    }

    #[test]
    fn test_job_title_snake_case_alias() {
        let job: JobDetails = serde_json::from_str(r#"{ "job_title": "Data Analyst" }"#).unwrap();
        assert_eq!(job.job_title, "Data Analyst");
    }

    #[test]
    fn test_view_state_defaults() {
        assert_eq!(ViewState::new(3).selected, Some(0));
        assert_eq!(ViewState::new(0).selected, None);
        assert_eq!(ViewState::new(3).tab, DetailTab::Overview);
    }

    #[test]
    fn test_select_keeps_tab_and_tab_keeps_selection() {
        let mut state = ViewState::new(3);
        state.set_tab(DetailTab::Scores);
        state.select(2, 3);
        assert_eq!(state.tab, DetailTab::Scores);
        assert_eq!(state.selected, Some(2));

        state.set_tab(DetailTab::Analysis);
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = ViewState::new(2);
        state.select(5, 2);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_duplicate_names_select_distinct_rows() {
        let results = vec![candidate("Sam", 90.0, None), candidate("Sam", 40.0, None)];
        let mut state = ViewState::new(results.len());
        state.select(1, results.len());
        assert!(!state.is_selected(0));
        assert!(state.is_selected(1));
        assert_eq!(state.selected_candidate(&results).map(|c| c.recommendation_score), Some(40.0));
    }
}
