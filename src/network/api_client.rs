use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use crate::constants::{FIELD_FILE, FIELD_MESSAGE};
use crate::models::ChatReply;

// REST client for the summarisation endpoint
pub struct ApiClient;

impl ApiClient {
    /// Upload a document for summarisation (multipart field `file`).
    pub async fn upload_document(file: &File) -> Result<ChatReply, JsValue> {
        let form = Self::upload_form(file)?;
        Self::post_form_for_reply(&form).await
    }

    /// Ask a question about the uploaded document (multipart field `message`).
    pub async fn send_chat(text: &str) -> Result<ChatReply, JsValue> {
        let form = Self::chat_form(text)?;
        Self::post_form_for_reply(&form).await
    }

    pub fn upload_form(file: &File) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(FIELD_FILE, file, &file.name())?;
        Ok(form)
    }

    pub fn chat_form(text: &str) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        form.append_with_str(FIELD_MESSAGE, text)?;
        Ok(form)
    }

    async fn post_form_for_reply(form: &FormData) -> Result<ChatReply, JsValue> {
        let url = super::chat_endpoint_url();
        let resp = Self::post_form(&url, form).await?;
        Self::reply_from_response(resp).await
    }

    /// POST a multipart body. Any completed response is returned, whatever
    /// its status.
    pub async fn post_form(url: &str, form: &FormData) -> Result<Response, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        // No Content-Type header: the browser adds the multipart boundary.
        opts.set_body(form);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        resp_value.dyn_into()
    }

    /// Read and decode a reply body.
    ///
    /// The HTTP status is not consulted: the backend reports application
    /// errors as a JSON `error` field on a 4xx reply, so the body alone
    /// decides what gets rendered.
    pub async fn reply_from_response(resp: Response) -> Result<ChatReply, JsValue> {
        if !resp.ok() {
            debug_log!("Reply status {} {}", resp.status(), resp.status_text());
        }

        let text = JsFuture::from(resp.text()?).await?;
        let body = text
            .as_string()
            .ok_or_else(|| JsValue::from_str("Response body was not text"))?;
        ChatReply::from_json(&body).map_err(|e| JsValue::from_str(&e))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use web_sys::ResponseInit;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn response(status: u16, body: &str) -> Response {
        let init = ResponseInit::new();
        init.set_status(status);
        Response::new_with_opt_str_and_init(Some(body), &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn upload_form_carries_the_file_under_file() {
        let parts = js_sys::Array::of1(&JsValue::from_str("%PDF-1.4"));
        let file = File::new_with_str_sequence(&parts, "report.pdf").unwrap();

        let form = ApiClient::upload_form(&file).unwrap();
        let part: File = form.get(FIELD_FILE).dyn_into().unwrap();
        assert_eq!(part.name(), "report.pdf");
        assert!(form.get(FIELD_MESSAGE).is_null());
    }

    #[wasm_bindgen_test]
    fn chat_form_carries_the_text_under_message() {
        let form = ApiClient::chat_form("hi").unwrap();
        assert_eq!(form.get(FIELD_MESSAGE).as_string().as_deref(), Some("hi"));
        assert!(form.get(FIELD_FILE).is_null());
    }

    #[wasm_bindgen_test]
    async fn bad_request_body_is_still_decoded() {
        let reply = ApiClient::reply_from_response(response(
            400,
            r#"{"error":"Please upload a file first."}"#,
        ))
        .await
        .unwrap();
        assert_eq!(reply.error.as_deref(), Some("Please upload a file first."));
    }

    #[wasm_bindgen_test]
    async fn server_error_page_is_a_failure() {
        let result =
            ApiClient::reply_from_response(response(500, "<html>Internal Server Error</html>"))
                .await;
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    async fn same_body_decodes_the_same_for_any_status() {
        let body = r#"{"summary":"short","ai":"done"}"#;
        let ok = ApiClient::reply_from_response(response(200, body)).await.unwrap();
        let bad = ApiClient::reply_from_response(response(400, body)).await.unwrap();
        assert_eq!(ok, bad);
    }
}
