use gloo::net::http::Request;
use shared::upload::{FILE_FIELD, UPLOAD_PRESET_FIELD};
use shared::{parse_upload_response, CheckoutConfig, UploadError};
use web_sys::{File, FormData};

/// Client for the Cloudinary unsigned upload endpoint
#[derive(Clone, PartialEq)]
pub struct UploadClient {
    endpoint: String,
    upload_preset: String,
}

impl UploadClient {
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self {
            endpoint: config.upload_url(),
            upload_preset: config.upload_preset.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Multipart payload with the image and the upload preset
    pub fn multipart_body(&self, file: &File) -> Result<FormData, UploadError> {
        let form = FormData::new()
            .map_err(|e| UploadError::Transport(format!("Failed to create form data: {:?}", e)))?;
        form.append_with_blob(FILE_FIELD, file)
            .map_err(|e| UploadError::Transport(format!("Failed to attach file: {:?}", e)))?;
        form.append_with_str(UPLOAD_PRESET_FIELD, &self.upload_preset)
            .map_err(|e| UploadError::Transport(format!("Failed to attach upload preset: {:?}", e)))?;
        Ok(form)
    }

    /// Upload a receipt image and return its secure URL.
    ///
    /// A single attempt; the caller decides what to tell the customer.
    pub async fn upload_receipt(&self, file: &File) -> Result<String, UploadError> {
        let body = self.multipart_body(file)?;

        let response = Request::post(&self.endpoint)
            .body(body)
            .map_err(|e| UploadError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(format!("Network error: {}", e)))?;

        let text = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(format!("Failed to read response: {}", e)))?;

        parse_upload_response(&text)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use shared::PaymentAccount;
    use std::time::Duration;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn client() -> UploadClient {
        UploadClient::from_config(&CheckoutConfig {
            cloud_name: "chianny".to_string(),
            upload_preset: "receipts".to_string(),
            business_phone: "2348138918620".to_string(),
            transition_delay: Duration::from_millis(1000),
            payment_account: PaymentAccount::default(),
        })
    }

    #[wasm_bindgen_test]
    fn test_endpoint_from_config() {
        assert_eq!(
            client().endpoint(),
            "https://api.cloudinary.com/v1_1/chianny/image/upload"
        );
    }

    #[wasm_bindgen_test]
    fn test_multipart_body_carries_file_and_preset() {
        let bits = js_sys::Array::of1(&JsValue::from_str("not really a jpeg"));
        let file = File::new_with_str_sequence(&bits, "receipt.jpg").unwrap();

        let form = client().multipart_body(&file).unwrap();

        assert_eq!(form.get(UPLOAD_PRESET_FIELD).as_string().as_deref(), Some("receipts"));
        assert!(form.get(FILE_FIELD).is_instance_of::<File>());
    }
}
