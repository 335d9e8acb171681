//! REST契約（/api/vacancy）
//!
//! HTTPの送受信自体は呼び出し側（WASMではfetch）が行う。ここではURL・メソッド・
//! ボディの組み立てと、レスポンスの解釈だけを扱う。

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{Vacancy, VacancyId, VacancyPayload};

/// HTTPメソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// 送信するリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSONボディ
    pub body: Option<String>,
}

/// エンドポイント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.base
    }

    pub fn item_url(&self, id: &VacancyId) -> String {
        format!("{}/{}", self.base, id)
    }

    /// 一覧取得
    pub fn list(&self) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: self.base.clone(),
            body: None,
        }
    }
}

/// 変更系操作
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(VacancyPayload),
    Update(VacancyId, VacancyPayload),
    Delete(VacancyId),
}

impl Mutation {
    /// 下書きのIDの有無で作成/更新を選ぶ
    pub fn save(id: Option<VacancyId>, payload: VacancyPayload) -> Self {
        match id {
            Some(id) => Mutation::Update(id, payload),
            None => Mutation::Create(payload),
        }
    }

    pub fn to_request(&self, endpoint: &Endpoint) -> Result<ApiRequest> {
        let request = match self {
            Mutation::Create(payload) => ApiRequest {
                method: Method::Post,
                url: endpoint.collection_url().to_string(),
                body: Some(serde_json::to_string(payload)?),
            },
            Mutation::Update(id, payload) => ApiRequest {
                method: Method::Put,
                url: endpoint.item_url(id),
                body: Some(serde_json::to_string(payload)?),
            },
            Mutation::Delete(id) => ApiRequest {
                method: Method::Delete,
                url: endpoint.item_url(id),
                body: None,
            },
        };
        Ok(request)
    }
}

/// GET /api/vacancy のレスポンス（レコードは1件ずつ解釈する）
#[derive(Debug, Deserialize)]
struct ListResponse {
    success: bool,
    data: Option<Vec<serde_json::Value>>,
}

/// 一覧レスポンスの解釈結果
#[derive(Debug, Default, PartialEq)]
pub struct ListPage {
    pub vacancies: Vec<Vacancy>,
    /// 読み取れずに捨てたレコード（位置と理由）
    pub skipped: Vec<String>,
}

/// ステータスを確認（2xx以外は `Error::Http`）
pub fn check_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Http {
            status,
            body: body.to_string(),
        })
    }
}

/// 一覧レスポンスを解釈
///
/// `{success: true, data: [...]}` 以外は `Error::Malformed`。
/// 形の合わないレコードはそれだけ捨てて `skipped` に残す
pub fn parse_list_response(status: u16, body: &str) -> Result<ListPage> {
    check_status(status, body)?;

    let response: ListResponse = serde_json::from_str(body)
        .map_err(|e| Error::Malformed(format!("list body: {}", e)))?;

    if !response.success {
        return Err(Error::Malformed("success flag is false".into()));
    }
    let records = response
        .data
        .ok_or_else(|| Error::Malformed("data is missing".into()))?;

    let mut page = ListPage::default();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Vacancy>(record) {
            Ok(vacancy) => page.vacancies.push(vacancy),
            Err(e) => page.skipped.push(format!("record {}: {}", index, e)),
        }
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ShiftType, WireShift};

    fn payload() -> VacancyPayload {
        VacancyPayload {
            title: "A".into(),
            description: "B".into(),
            shifts: vec![WireShift {
                date: "02-01-2025".into(),
                start_time: "09:00".into(),
                end_time: "17:00".into(),
                shift_type: ShiftType::Consultation,
                price: 100,
            }],
        }
    }

    // =============================================
    // リクエスト組み立て
    // =============================================

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let endpoint = Endpoint::new("/api/vacancy/");
        assert_eq!(endpoint.collection_url(), "/api/vacancy");
        assert_eq!(endpoint.item_url(&VacancyId::Number(5)), "/api/vacancy/5");
    }

    #[test]
    fn test_list_request() {
        let request = Endpoint::new("/api/vacancy").list();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "/api/vacancy");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_create_request() {
        let endpoint = Endpoint::new("/api/vacancy");
        let request = Mutation::save(None, payload()).to_request(&endpoint).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/api/vacancy");
        let body = request.body.expect("ボディなし");
        assert!(body.contains("\"swifts\""));
        assert!(body.contains("\"title\":\"A\""));
    }

    #[test]
    fn test_update_request() {
        let endpoint = Endpoint::new("/api/vacancy");
        let id = VacancyId::Text("abc".into());
        let request = Mutation::save(Some(id), payload()).to_request(&endpoint).unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "/api/vacancy/abc");
        assert!(request.body.is_some());
    }

    #[test]
    fn test_delete_request() {
        let endpoint = Endpoint::new("https://example.test/api/vacancy");
        let request = Mutation::Delete(VacancyId::Number(9)).to_request(&endpoint).unwrap();
        assert_eq!(request.method.as_str(), "DELETE");
        assert_eq!(request.url, "https://example.test/api/vacancy/9");
        assert!(request.body.is_none());
    }

    // =============================================
    // レスポンス解釈
    // =============================================

    #[test]
    fn test_parse_list_response_ok() {
        let body = r#"{"success": true, "data": [{"id": 1, "title": "T", "description": "D", "swifts": []}]}"#;
        let page = parse_list_response(200, body).unwrap();
        assert_eq!(page.vacancies.len(), 1);
        assert_eq!(page.vacancies[0].title, "T");
        assert!(page.skipped.is_empty());
    }

    #[test]
    fn test_parse_list_response_skips_bad_records() {
        let bad_records = [
            r#"{"id": 2, "swifts": [{"date": "01-01-2025", "start_time": "09:00", "end_time": "10:00", "type": "Consultation", "price": 50.5}]}"#,
            r#"{"id": 2, "swifts": [{"date": "01-01-2025", "start_time": "09:00", "end_time": "10:00", "type": "Consultation", "price": "50"}]}"#,
            r#"{"id": null, "title": "X"}"#,
            r#"{"id": 2, "swifts": [{"date": "01-01-2025", "start_time": "09:00", "end_time": "10:00", "type": "Night", "price": 1}]}"#,
        ];
        for bad in bad_records {
            let body = format!(
                r#"{{"success": true, "data": [{{"id": 1, "title": "Good", "swifts": []}}, {}]}}"#,
                bad
            );
            let page = parse_list_response(200, &body).expect("一覧全体が捨てられた");
            assert_eq!(page.vacancies.len(), 1, "{}", bad);
            assert_eq!(page.vacancies[0].title, "Good");
            assert_eq!(page.skipped.len(), 1);
            assert!(page.skipped[0].starts_with("record 1:"), "{}", page.skipped[0]);
        }
    }

    #[test]
    fn test_parse_list_response_http_error() {
        match parse_list_response(503, "maintenance") {
            Err(Error::Http { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("想定外: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_response_malformed() {
        let cases = [
            "not json",
            r#"{"success": false, "data": []}"#,
            r#"{"success": true}"#,
            r#"{"success": true, "data": {"id": 1}}"#,
            r#"[]"#,
        ];
        for body in cases {
            let result = parse_list_response(200, body);
            assert!(matches!(result, Err(Error::Malformed(_))), "{}", body);
        }
    }

    #[test]
    fn test_check_status_boundaries() {
        assert!(check_status(200, "").is_ok());
        assert!(check_status(204, "").is_ok());
        assert!(check_status(199, "").is_err());
        assert!(check_status(300, "").is_err());
    }
}
