//! スコアカード・プログレスバー

use leptos::*;

use crate::utils::score::bar_percent;

/// 0〜100のプログレスバー
#[component]
pub fn ProgressBar(value: f64) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div class="progress-fill" style=format!("width: {}%", bar_percent(value))></div>
        </div>
    }
}

/// 数値 + ラベル + バーのカード
#[component]
pub fn ScoreCard(
    label: &'static str,
    value: String,
    bar: f64,
    #[prop(default = "accent-blue")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="score-card">
            <div class=format!("score-value {}", accent)>{value}</div>
            <div class="score-label">{label}</div>
            <ProgressBar value=bar />
        </div>
    }
}
