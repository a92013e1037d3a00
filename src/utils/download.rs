//! ブラウザ上でのファイルダウンロード

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlElement, Url};

use crate::error::ExportError;

fn browser_err(context: &str, e: JsValue) -> ExportError {
    ExportError::Browser(format!("{}: {:?}", context, e))
}

/// Blob の Object URL
///
/// スコープを抜けると必ず revoke される。
struct ObjectUrl(String);

impl ObjectUrl {
    fn from_blob(blob: &Blob) -> Result<Self, ExportError> {
        Url::create_object_url_with_blob(blob)
            .map(ObjectUrl)
            .map_err(|e| browser_err("Object URL作成失敗", e))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// テキストをファイルとしてダウンロードさせる
pub fn download_text(content: &str, mime_type: &str, filename: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Browser("windowがありません".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("documentがありません".to_string()))?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);

    let blob = Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(|e| browser_err("Blob作成失敗", e))?;
    let url = ObjectUrl::from_blob(&blob)?;

    let a = document
        .create_element("a")
        .map_err(|e| browser_err("リンク作成失敗", e))?;
    a.set_attribute("href", url.as_str())
        .map_err(|e| browser_err("href設定失敗", e))?;
    a.set_attribute("download", filename)
        .map_err(|e| browser_err("download設定失敗", e))?;

    let element = a
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| ExportError::Browser("HtmlElementへの変換失敗".to_string()))?;
    element.click();
    Ok(())
}
