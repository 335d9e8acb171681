//! fetch による求人API呼び出し
//!
//! URL・ボディの組み立てとレスポンスの解釈は vacancy_common 側で行い、
//! ここでは送受信だけを担当する。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use vacancy_common::{
    check_status, parse_list_response, ApiRequest, Endpoint, Error, ListPage, Mutation, Result,
};

/// JS側の例外をネットワークエラーに変換
fn js_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// リクエスト送信（ステータスと本文を返す）
async fn send(request: &ApiRequest) -> Result<(u16, String)> {
    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let js_request = Request::new_with_str_and_init(&request.url, &opts).map_err(js_error)?;
    if request.body.is_some() {
        js_request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&js_request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// 一覧取得
pub async fn fetch_vacancies(endpoint: &Endpoint) -> Result<ListPage> {
    let (status, body) = send(&endpoint.list()).await?;
    parse_list_response(status, &body)
}

/// 作成/更新/削除
pub async fn execute(mutation: &Mutation, endpoint: &Endpoint) -> Result<()> {
    let request = mutation.to_request(endpoint)?;
    let (status, body) = send(&request).await?;
    check_status(status, &body)
}
