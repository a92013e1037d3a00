//! 候補者詳細パネル
//!
//! ヘッダー（表示名・スコアバッジ）と3つのタブ（概要 / スコア / 分析）

use leptos::*;

use crate::models::{CandidateAnalysis, DetailTab};
use crate::utils::score::{format_integer, format_number, format_one_decimal, format_optional, ScoreTier};
use crate::views::ResultsContext;

use super::{PointKind, PointList, ScoreCard};

/// 選択中の候補者の詳細。未選択なら案内を表示。
#[component]
pub fn CandidateDetail() -> impl IntoView {
    let ctx = use_context::<ResultsContext>().expect("ResultsContext not found");
    // タブ切り替えではカード全体を作り直さない
    let selected = create_memo(move |_| ctx.state.with(|s| s.selected));

    move || {
        let candidate = selected
            .get()
            .and_then(|index| ctx.results.with_value(|results| results.get(index).cloned()));
        match candidate {
            Some(c) => view! { <DetailCard candidate=c /> }.into_view(),
            None => view! {
                <div class="card detail-empty">
                    <div class="empty-icon">"👤"</div>
                    <h3>"Select a Candidate"</h3>
                    <p>"Choose a candidate from the list to view detailed analysis"</p>
                </div>
            }
            .into_view(),
        }
    }
}

#[component]
fn DetailCard(candidate: CandidateAnalysis) -> impl IntoView {
    let ctx = use_context::<ResultsContext>().expect("ResultsContext not found");
    let state = ctx.state;
    let active_tab = create_memo(move |_| state.with(|s| s.tab));

    let name = candidate.display_name().to_string();
    let score = candidate.display_score();
    let tier = ScoreTier::from_score(score);

    view! {
        <div class="card detail-card">
            <div class="detail-header">
                <div>
                    <h3 class="card-title">{name}</h3>
                    <span class="sub">"PDF Resume Analysis"</span>
                </div>
                <div class=format!("score-badge {}", tier.badge_class())>
                    <div class=format!("score {}", tier.text_class())>{format_one_decimal(score)}</div>
                    <div class="sub">"Fit Score"</div>
                </div>
            </div>

            <nav class="detail-tabs">
                {DetailTab::ALL.into_iter().map(|tab| view! {
                    <button
                        class=move || if active_tab.get() == tab { "active" } else { "" }
                        on:click=move |_| state.update(|s| s.set_tab(tab))
                    >
                        {tab.label()}
                    </button>
                }).collect_view()}
            </nav>

            <div class="tab-content">
                {move || match active_tab.get() {
                    DetailTab::Overview => view! { <OverviewTab candidate=candidate.clone() /> }.into_view(),
                    DetailTab::Scores => view! { <ScoresTab candidate=candidate.clone() /> }.into_view(),
                    DetailTab::Analysis => view! { <AnalysisTab candidate=candidate.clone() /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn OverviewTab(candidate: CandidateAnalysis) -> impl IntoView {
    view! {
        <div class="overview-tab">
            <div class="narrative">
                <h4>"Overall Recommendation"</h4>
                <p>{candidate.feedback}</p>
            </div>
            <div class="point-columns">
                <PointList kind=PointKind::Positive points=candidate.positive_points />
                <PointList kind=PointKind::Negative points=candidate.negative_points />
            </div>
        </div>
    }
}

/// 適合スコア内訳の4項目（適合スコアがある場合のみ）
fn fit_breakdown(c: &CandidateAnalysis) -> Option<[(&'static str, Option<f64>, &'static str); 4]> {
    c.fit_score().map(|_| {
        [
            ("Skills Match", c.skills_match(), "accent-blue"),
            ("Experience", c.experience_relevance(), "accent-green"),
            ("Education", c.education_rating(), "accent-purple"),
            ("Quality", c.resume_quality(), "accent-orange"),
        ]
    })
}

#[component]
fn ScoresTab(candidate: CandidateAnalysis) -> impl IntoView {
    let breakdown = fit_breakdown(&candidate);

    view! {
        <div class="scores-tab">
            {breakdown.map(|cells| view! {
                <div class="fit-breakdown">
                    <h4>"Fit Score Breakdown"</h4>
                    <div class="score-grid four">
                        {cells.into_iter().map(|(label, value, accent)| view! {
                            <ScoreCard
                                label=label
                                value=format_optional(value)
                                bar=value.unwrap_or(0.0)
                                accent=accent
                            />
                        }).collect_view()}
                    </div>
                </div>
            })}

            <div class="score-grid three">
                <ScoreCard
                    label="Recruiter Score"
                    value=format_integer(candidate.recruiter_score)
                    bar=candidate.recruiter_score
                    accent="accent-blue"
                />
                <ScoreCard
                    label="Analyst Score"
                    value=format_one_decimal(candidate.analyst_score)
                    bar=candidate.analyst_score
                    accent="accent-green"
                />
                <ScoreCard
                    label="HR Score"
                    value=format_integer(candidate.hr_score)
                    bar=candidate.hr_score
                    accent="accent-purple"
                />
            </div>

            <div class="narrative">
                <h4>"Detailed Assessment"</h4>
                <p>{candidate.overall_explanation}</p>
            </div>
        </div>
    }
}

#[component]
fn AnalysisTab(candidate: CandidateAnalysis) -> impl IntoView {
    view! {
        <div class="analysis-tab">
            <div class="narrative">
                <h4>"Job Match Analysis"</h4>
                <p>{candidate.explanation_or_fallback().to_string()}</p>
            </div>
            <div class="resume-info">
                <h4>"Resume Information"</h4>
                <div class="info-grid">
                    <div class="info-cell">
                        <h5>"Experience"</h5>
                        <span class="info-value">{format_number(candidate.experience_years)}</span>
                        <span class="info-unit">" years"</span>
                    </div>
                    <div class="info-cell">
                        <h5>"Education"</h5>
                        <p>{candidate.education_label().to_string()}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_hidden_without_fit_score() {
        let c = CandidateAnalysis {
            recommendation_score: 70.0,
            skills_match_percentage: Some(80.0),
            ..Default::default()
        };
        assert!(fit_breakdown(&c).is_none());
    }

    #[test]
    fn test_breakdown_cells_keep_missing_values() {
        let c = CandidateAnalysis {
            fit_score: Some(82.0),
            skills_match_percentage: Some(90.0),
            education_score: Some(0.0),
            ..Default::default()
        };
        let cells = fit_breakdown(&c).unwrap();
        assert_eq!(cells[0], ("Skills Match", Some(90.0), "accent-blue"));
        assert_eq!(cells[1].1, None);
        assert_eq!(cells[2].1, None);
        assert_eq!(format_optional(cells[3].1), "N/A");
    }
}
