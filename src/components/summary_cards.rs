//! サマリーカード（総数・上位人数・平均・エクスポート）

use leptos::*;

use crate::utils::stats::SummaryStats;

/// エクスポート操作の結果表示
#[derive(Debug, Clone, PartialEq)]
pub enum ExportNotice {
    Done(String),
    Failed(String),
}

/// エクスポート表示の世代番号
///
/// 表示を消すタイマーは、自分が開始した世代が最新のときだけ消す。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoticeGeneration(u64);

impl NoticeGeneration {
    /// 新しい世代を開始してその番号を返す
    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[component]
pub fn SummaryCards(
    stats: SummaryStats,
    #[prop(into)] on_export: Callback<()>,
    notice: ReadSignal<Option<ExportNotice>>,
) -> impl IntoView {
    view! {
        <div class="summary-grid">
            <div class="card stat-card">
                <div class="stat-value accent-blue">{stats.total}</div>
                <div class="stat-label">"Total Candidates"</div>
            </div>
            <div class="card stat-card">
                <div class="stat-value accent-green">{stats.top}</div>
                <div class="stat-label">"Top Candidates"</div>
            </div>
            <div class="card stat-card">
                <div class="stat-value accent-purple">{stats.average}</div>
                <div class="stat-label">"Average Score"</div>
            </div>
            <div class="card stat-card">
                <button class="export-btn" on:click=move |_| on_export.call(())>
                    "⬇ Export CSV"
                </button>
                {move || notice.get().map(|n| match n {
                    ExportNotice::Done(file) => view! {
                        <p class="status success">"Exported " {file}</p>
                    },
                    ExportNotice::Failed(e) => view! {
                        <p class="status error">{e}</p>
                    },
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_timer_does_not_clear_newer_notice() {
        let mut generation = NoticeGeneration::default();
        let first = generation.bump();
        let second = generation.bump();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
