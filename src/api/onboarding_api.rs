use reqwest::Method;

use super::OnboardingApi;
use crate::client::{JewelLinkClient, RequestAuth};
use crate::error::Result;
use crate::models::OnboardingData;

#[async_trait::async_trait]
impl OnboardingApi for JewelLinkClient {
    async fn complete_onboarding(&self, data: &OnboardingData) -> Result<serde_json::Value> {
        let response =
            self.send(Method::POST, "onboarding/complete/", Some(data), RequestAuth::Session)
                .await?;
        let bytes = response.bytes().await?;
        // 204 and empty 200 bodies are a plain acknowledgement
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
