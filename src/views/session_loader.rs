//! セッション読み込み画面
//!
//! 前ステップの出力（求人情報＋解析結果のJSON）を受け取る入口。
//! ファイル選択かサンプル読込のどちらかで `ScreeningSession` を得る。

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FileReader, HtmlInputElement, Request, RequestInit, Response};

use crate::config::SAMPLE_SESSION_URL;
use crate::error::LoadError;
use crate::models::ScreeningSession;
use crate::utils::log_trace::{log_error, log_info_with_data};

/// JSONテキストからセッションを復元
pub fn parse_session(text: &str) -> Result<ScreeningSession, LoadError> {
    Ok(serde_json::from_str(text)?)
}

// JSONファイルをfetch
async fn fetch_session(url: &str) -> Result<ScreeningSession, LoadError> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| LoadError::Fetch(format!("Request作成失敗: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("windowがありません".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Fetch(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Fetch("Responseへの変換失敗".to_string()))?;
    if !resp.ok() {
        return Err(LoadError::Fetch(format!("HTTP {}", resp.status())));
    }

    let json = JsFuture::from(resp.json().map_err(|e| LoadError::Decode(format!("{:?}", e)))?)
        .await
        .map_err(|e| LoadError::Decode(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| LoadError::Decode(e.to_string()))
}

#[component]
pub fn SessionLoader(#[prop(into)] on_loaded: Callback<ScreeningSession>) -> impl IntoView {
    let (loading, set_loading) = create_signal(false);
    let (error_msg, set_error_msg) = create_signal(None::<String>);

    let finish = move |result: Result<ScreeningSession, LoadError>, source: &str| match result {
        Ok(session) => {
            log_info_with_data(
                "session-load",
                "セッションを読み込みました",
                serde_json::json!({
                    "source": source,
                    "job_title": session.job_details.job_title,
                    "candidates": session.results.len(),
                }),
            );
            set_error_msg.set(None);
            on_loaded.call(session);
        }
        Err(e) => {
            log_error("session-load", &e.to_string());
            set_error_msg.set(Some(e.to_string()));
        }
    };

    // JSONファイル読み込み
    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let reader = match FileReader::new() {
            Ok(r) => r,
            Err(e) => {
                finish(Err(LoadError::File(format!("{:?}", e))), "file");
                return;
            }
        };
        let reader_clone = reader.clone();

        let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let result = reader_clone
                .result()
                .ok()
                .and_then(|r| r.as_string())
                .ok_or_else(|| LoadError::File("内容を読み取れません".to_string()))
                .and_then(|text| parse_session(&text));
            finish(result, "file");
        }) as Box<dyn FnMut(_)>);

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        if let Err(e) = reader.read_as_text(&file) {
            finish(Err(LoadError::File(format!("{:?}", e))), "file");
        }
    };

    // サンプルデータ読み込み
    let load_sample = move |_| {
        spawn_local(async move {
            set_loading.set(true);
            let result = fetch_session(SAMPLE_SESSION_URL).await;
            set_loading.set(false);
            finish(result, "sample");
        });
    };

    view! {
        <div class="session-loader">
            <h2>"Screening Results"</h2>
            <p class="sub">"Load the analysis output from the previous step."</p>

            <div class="load-section">
                <div class="upload-area">
                    <h3>"Session JSON"</h3>
                    <input type="file" accept=".json" on:change=on_file_change />
                </div>
                <button on:click=load_sample disabled=move || loading.get()>
                    {move || if loading.get() { "Loading..." } else { "Load Sample" }}
                </button>
            </div>

            {move || error_msg.get().map(|e| view! {
                <p class="status error">{e}</p>
            })}
        </div>
    }
}
