use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{classify_reply, VerifyError, VerifyResult};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// POSTs the accepted file to the analysis endpoint as multipart form data
/// and classifies the reply. Resolves exactly once per call.
pub async fn analyze(endpoint: &str, file: &GlooFile) -> Result<VerifyResult, VerifyError> {
    let form = FormData::new().map_err(js_error)?;
    // Field name must match the service's multipart parameter.
    form.append_with_blob_and_filename("file", file.as_ref(), &file.name())
        .map_err(js_error)?;

    let request = Request::post(endpoint)
        .body(form)
        .map_err(|err| VerifyError::Network {
            detail: err.to_string(),
        })?;

    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            error!(format!("Verification request failed: {err:?}"));
            return Err(VerifyError::Network {
                detail: err.to_string(),
            });
        }
    };

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response.text().await.unwrap_or_default();

    classify_reply(status, content_type.as_deref(), &body)
}

fn js_error(err: JsValue) -> VerifyError {
    VerifyError::Network {
        detail: format!("failed to build multipart body: {err:?}"),
    }
}
