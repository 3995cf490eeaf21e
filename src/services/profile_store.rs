use crate::models::Profile;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the profile store
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// REST client for the external profile repository.
///
/// The matching service never owns profile records; it reads them from an
/// Appwrite-compatible document store managed by the profile-management
/// application.
pub struct ProfileStoreClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: ProfileCollections,
}

/// Collection IDs in the profile store
#[derive(Debug, Clone)]
pub struct ProfileCollections {
    pub profiles: String,
}

impl ProfileStoreClient {
    /// Create a new profile store client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: ProfileCollections,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
        }
    }

    /// Get a single profile by user ID
    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, ProfileStoreError> {
        // Document-store query format: JSON array of query strings
        let query_json = format!(r#"["id={}"]"#, user_id);
        let encoded_query = urlencoding::encode(&query_json);

        let url = format!(
            "{}/databases/{}/collections/{}/documents?query={}",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collections.profiles,
            encoded_query
        );

        tracing::debug!("Fetching profile for user: {}", user_id);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch profile for {}: {} - {}", user_id, status, body);
            return Err(ProfileStoreError::ApiError(format!(
                "Failed to fetch profile: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| ProfileStoreError::InvalidResponse("Missing documents array".into()))?;

        let doc = documents.first().ok_or_else(|| {
            ProfileStoreError::NotFound(format!("Profile not found for user {}", user_id))
        })?;

        let data = doc.get("data").unwrap_or(doc);

        serde_json::from_value(data.clone())
            .map_err(|e| ProfileStoreError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Query the candidate pool for a matching request. Self-exclusion and
    /// dedup happen again inside the engine; the store-side filter just
    /// keeps the payload small.
    pub async fn query_candidates(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Profile>, ProfileStoreError> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collections.profiles
        );

        let queries = vec![
            format!("notEqual(\"id\", \"{}\")", user_id),
            format!("limit({})", limit),
        ];

        let queries_json = serde_json::to_string(&queries)
            .map_err(|e| ProfileStoreError::InvalidResponse(e.to_string()))?;
        let encoded_queries = urlencoding::encode(&queries_json);

        let full_url = format!("{}?query={}", url, encoded_queries);

        let response = self
            .client
            .get(&full_url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProfileStoreError::ApiError(format!(
                "Failed to query candidates: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| ProfileStoreError::InvalidResponse("Missing documents array".into()))?;

        // Documents that fail to parse are skipped rather than failing the
        // whole pool; the store is loosely schematized
        let profiles: Vec<Profile> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value(data.clone()).ok()
            })
            .collect();

        tracing::debug!("Queried {} candidates (total: {})", profiles.len(), total);

        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ProfileStoreClient {
        ProfileStoreClient::new(
            base_url.to_string(),
            "test_key".to_string(),
            "test_project".to_string(),
            "test_db".to_string(),
            ProfileCollections {
                profiles: "profiles".to_string(),
            },
        )
    }

    #[test]
    fn test_client_creation() {
        let client = test_client("https://store.test/v1");
        assert_eq!(client.base_url, "https://store.test/v1");
        assert_eq!(client.api_key, "test_key");
    }

    #[tokio::test]
    async fn test_get_profile_parses_document_envelope() {
        let mut server = mockito::Server::new_async().await;

        let body = serde_json::json!({
            "total": 1,
            "documents": [{
                "$id": "doc_1",
                "id": "founder_1",
                "name": "Ada",
                "skills": ["Rust"],
                "values": ["Craft"],
                "goals": ["Growth"],
                "experience": "expert",
                "availability": "full-time",
                "location": "Berlin",
                "communication": "direct"
            }]
        });

        let mock = server
            .mock("GET", mockito::Matcher::Regex(r"^/databases/.*".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let profile = client.get_profile("founder_1").await.unwrap();

        assert_eq!(profile.id, "founder_1");
        assert_eq!(profile.skills, vec!["Rust"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_profile_not_found() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", mockito::Matcher::Regex(r"^/databases/.*".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"total": 0, "documents": []}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result = client.get_profile("missing").await;

        assert!(matches!(result, Err(ProfileStoreError::NotFound(_))));
        mock.assert_async().await;
    }
}
