mod components;
mod config;
mod error;
mod models;
mod utils;
mod views;

use leptos::*;

use models::ScreeningSession;
use utils::log_trace::log_info;
use views::{ResultsView, SessionLoader};

// ============================================
// メインアプリ
// ============================================

/// 読み込み画面 → 結果画面。戻る操作で読み込み画面に戻る。
#[component]
fn App() -> impl IntoView {
    let (session, set_session) = create_signal(None::<ScreeningSession>);

    let on_back = move |_: ()| {
        log_info("results-view", "前のステップに戻る");
        set_session.set(None);
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Resume Screening"</h1>
                <span class="step-label">"Step 4: Results"</span>
            </header>

            <main class="container">
                {move || match session.get() {
                    Some(s) => view! {
                        <ResultsView results=s.results job_details=s.job_details on_back=on_back />
                    }.into_view(),
                    None => view! {
                        <SessionLoader on_loaded=move |s: ScreeningSession| set_session.set(Some(s)) />
                    }.into_view(),
                }}
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
