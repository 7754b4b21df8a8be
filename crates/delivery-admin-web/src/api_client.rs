//! HTTP client for the marketplace backend

use delivery_admin_core::types::{
    BusinessHours, BusinessHoursUpdate, DashboardMetrics, NewNotification, NotificationDetail,
    PlatformSettings, Restaurant, RestaurantProfile, RestaurantUpdate, StatusChange,
    StatusMessage, WeeklyPoint,
};
use delivery_admin_core::{Config, Error, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// API client for the admin backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the `api` section of the configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api.base_url.clone()).with_timeout(config.api.request_timeout_secs)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn with_timeout(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs {
            match Client::builder()
                .timeout(std::time::Duration::from_secs(secs))
                .build()
            {
                Ok(client) => self.client = client,
                Err(e) => tracing::warn!("Ignoring request timeout: {e}"),
            }
        }
        self
    }

    // Fetch-backed clients in the browser have no timeout knob
    #[cfg(target_arch = "wasm32")]
    fn with_timeout(self, _secs: Option<u64>) -> Self {
        self
    }

    /// Origin every request goes to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{path}", self.base_url))
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!(path, "sending request");

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(path, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The backend reports failures as {"error": "..."}
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<Value>(&body).ok())
            .and_then(|body| {
                body.get("error")
                    .or_else(|| body.get("message"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });

        Err(Error::Status {
            endpoint: path.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(path, e))?;

        serde_json::from_str(&body).map_err(|e| Error::decode(path, e))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(path, self.request(Method::GET, path)).await?;
        Self::decode(path, response).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<StatusMessage> {
        let response = self
            .send(path, self.request(method, path).json(body))
            .await?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(path, e))?;

        // Acknowledgements are optional; an empty or non-JSON body is still a success
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    /// Fetch a whole collection, e.g. `/orders`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status or the body is not a JSON array of `T`.
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.get_json(path).await
    }

    /// Headline dashboard metrics
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn dashboard(&self) -> Result<DashboardMetrics> {
        self.get_json("/dashboard").await
    }

    /// Seven-day orders and revenue series
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn dashboard_weekly(&self) -> Result<Vec<WeeklyPoint>> {
        self.get_json("/dashboard/weekly").await
    }

    /// Restaurant detail record
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn restaurant(&self, id: u64) -> Result<Restaurant> {
        self.get_json(&format!("/restaurants/{id}")).await
    }

    /// Full restaurant profile
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn restaurant_profile(&self, id: u64) -> Result<RestaurantProfile> {
        self.get_json(&format!("/restaurants/{id}/profile")).await
    }

    /// Opening hours of a restaurant
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn business_hours(&self, id: u64) -> Result<Vec<BusinessHours>> {
        self.get_json(&format!("/restaurants/{id}/business-hours"))
            .await
    }

    /// Replace a restaurant profile
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_restaurant(
        &self,
        id: u64,
        update: &RestaurantUpdate,
    ) -> Result<StatusMessage> {
        self.send_json(Method::PUT, &format!("/restaurants/{id}"), update)
            .await
    }

    /// Replace the opening hours of a restaurant
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_business_hours(
        &self,
        id: u64,
        open_days: Vec<BusinessHours>,
    ) -> Result<StatusMessage> {
        let body = BusinessHoursUpdate {
            business_hours: open_days,
        };
        self.send_json(
            Method::PUT,
            &format!("/restaurants/{id}/business-hours"),
            &body,
        )
        .await
    }

    /// Activate or deactivate a restaurant
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn set_restaurant_status(
        &self,
        id: u64,
        change: StatusChange,
    ) -> Result<StatusMessage> {
        self.send_json(Method::PATCH, &format!("/restaurants/{id}/status"), &change)
            .await
    }

    /// Ban or restore a customer account
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn set_user_status(&self, id: u64, change: StatusChange) -> Result<StatusMessage> {
        self.send_json(Method::PATCH, &format!("/users/{id}/status"), &change)
            .await
    }

    /// Notification with delivery statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn notification(&self, id: u64) -> Result<NotificationDetail> {
        self.get_json(&format!("/notifications/{id}")).await
    }

    /// Send a new notification
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_notification(&self, notification: &NewNotification) -> Result<StatusMessage> {
        self.send_json(Method::POST, "/notifications", notification)
            .await
    }

    /// Delete a notification
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn delete_notification(&self, id: u64) -> Result<()> {
        let path = format!("/notifications/{id}");
        self.send(&path, self.request(Method::DELETE, &path))
            .await?;
        Ok(())
    }

    /// Create a record in a collection, e.g. `POST /admins`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create<B: Serialize>(&self, path: &str, body: &B) -> Result<StatusMessage> {
        self.send_json(Method::POST, path, body).await
    }

    /// Save platform settings
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_settings(&self, settings: &PlatformSettings) -> Result<StatusMessage> {
        self.send_json(Method::PUT, "/settings", settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let mut config = Config::default();
        config.api.base_url = "https://admin.example.com".to_string();
        config.api.request_timeout_secs = Some(5);

        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url(), "https://admin.example.com");
    }
}
