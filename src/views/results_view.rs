//! 結果画面（ウィザード最終ステップ）
//!
//! 解析済みの候補者一覧を受け取り、サマリー・一覧・詳細を表示する。
//! 状態は選択中の候補者と詳細タブのみで、入力は変更しない。

use leptos::*;

use crate::components::{CandidateDetail, CandidateList, ExportNotice, NoticeGeneration, SummaryCards};
use crate::config::EXPORT_NOTICE_MS;
use crate::models::{CandidateAnalysis, JobDetails, ViewState};
use crate::utils::csv_export::export_results;
use crate::utils::log_trace::{log_error, log_info_with_data, log_warn};
use crate::utils::stats::SummaryStats;

/// 表示する画面構成
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsLayout {
    /// 0件: 戻るボタンのみ（サマリー・一覧・詳細は出さない）
    Empty,
    Full(SummaryStats),
}

impl ResultsLayout {
    pub fn for_results(results: &[CandidateAnalysis]) -> Self {
        if results.is_empty() {
            ResultsLayout::Empty
        } else {
            ResultsLayout::Full(SummaryStats::calculate(results))
        }
    }
}

/// 戻るボタンのクリックハンドラ（1クリックにつき1回、引数なしで呼ぶ）
fn back_handler<E>(on_back: Callback<()>) -> impl Fn(E) {
    move |_| on_back.call(())
}

/// 結果画面内のコンポーネントで共有する状態
#[derive(Clone, Copy)]
pub struct ResultsContext {
    pub results: StoredValue<Vec<CandidateAnalysis>>,
    pub state: RwSignal<ViewState>,
}

#[component]
pub fn ResultsView(
    results: Vec<CandidateAnalysis>,
    job_details: JobDetails,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let stats = match ResultsLayout::for_results(&results) {
        ResultsLayout::Full(stats) => stats,
        ResultsLayout::Empty => {
            log_warn("results-view", "解析結果が0件です");
            let go_back = back_handler::<web_sys::MouseEvent>(on_back);
            return view! {
                <div class="results-empty">
                    <h2>"No Results Found"</h2>
                    <p>"There was an issue processing the resumes. Please try again."</p>
                    <button on:click=go_back>"← Back to Upload"</button>
                </div>
            }
            .into_view();
        }
    };
    log_info_with_data(
        "results-view",
        "結果画面を表示",
        serde_json::json!({ "candidates": stats.total, "average": stats.average }),
    );

    let ctx = ResultsContext {
        state: create_rw_signal(ViewState::new(results.len())),
        results: store_value(results),
    };
    provide_context(ctx);

    let job_details = store_value(job_details);
    let go_back = back_handler::<web_sys::MouseEvent>(on_back);
    let (export_notice, set_export_notice) = create_signal(None::<ExportNotice>);
    let notice_generation = store_value(NoticeGeneration::default());

    let on_export = move |_: ()| {
        let outcome = ctx
            .results
            .with_value(|results| job_details.with_value(|job| export_results(results, job)));
        let notice = match outcome {
            Ok(file) => ExportNotice::Done(file),
            Err(e) => {
                log_error("csv-export", &e.to_string());
                ExportNotice::Failed(e.to_string())
            }
        };
        set_export_notice.set(Some(notice));
        let generation = notice_generation.try_update_value(|g| g.bump()).unwrap_or_default();
        // 一定時間後に表示を消す（その間に再エクスポートされていれば消さない）
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(EXPORT_NOTICE_MS).await;
            if notice_generation.with_value(|g| g.is_current(generation)) {
                set_export_notice.set(None);
            }
        });
    };

    view! {
        <div class="results-view">
            <SummaryCards stats=stats on_export=on_export notice=export_notice />

            <div class="results-grid">
                <div class="results-list-column">
                    <CandidateList />
                </div>
                <div class="results-detail-column">
                    <CandidateDetail />
                </div>
            </div>

            <div class="results-footer">
                <button class="outline" on:click=go_back>
                    "← Start New Analysis"
                </button>
                <div class="complete-banner">
                    <div class="complete">"✅ Analysis Complete"</div>
                    <div class="sub">"Top " {stats.top} " candidates identified"</div>
                </div>
            </div>
        </div>
    }
    .into_view()
}
