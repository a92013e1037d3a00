//! 候補者一覧コンポーネント

use leptos::*;

use crate::utils::score::{format_one_decimal, ScoreTier};
use crate::views::ResultsContext;

/// 候補者一覧（入力順＝順位、並べ替えはしない）
/// クリックで詳細パネルの表示対象を切り替える
#[component]
pub fn CandidateList() -> impl IntoView {
    let ctx = use_context::<ResultsContext>().expect("ResultsContext not found");
    let state = ctx.state;

    let rows = ctx.results.with_value(|results| {
        let count = results.len();
        results
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                let score = candidate.display_score();
                let tier = ScoreTier::from_score(score);
                let name = candidate.display_name().to_string();

                view! {
                    <div
                        class=move || format!(
                            "candidate-row {}",
                            if state.with(|s| s.is_selected(index)) { "selected" } else { "" }
                        )
                        on:click=move |_| state.update(|s| s.select(index, count))
                    >
                        <div class="rank-badge">"#" {index + 1}</div>
                        <div class="candidate-name">
                            <div class="name">{name}</div>
                            <div class="sub">"PDF Resume"</div>
                        </div>
                        <div class="candidate-score">
                            <div class=format!("score {}", tier.text_class())>
                                {format_one_decimal(score)}
                            </div>
                            <div class="sub">"Fit Score"</div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <div class="card candidate-list">
            <h3 class="card-title">"🏆 Top Candidates"</h3>
            <div class="candidate-rows">{rows}</div>
        </div>
    }
}
