use reqwest::Client;

/// Shared Firebase HTTP client configuration. Both the Identity Toolkit
/// (auth) and Firestore (documents) adapters go through this.
pub struct FirebaseClient {
    pub client: Client,
    pub project_id: String,
    pub api_key: String,
    pub identity_base_url: String,
    pub firestore_base_url: String,
}

impl FirebaseClient {
    pub fn new(project_id: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            project_id,
            api_key,
            identity_base_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
            firestore_base_url: "https://firestore.googleapis.com/v1".to_string(),
        }
    }

    /// Email/password sign-in endpoint.
    pub fn sign_in_url(&self) -> String {
        format!(
            "{}/accounts:signInWithPassword?key={}",
            self.identity_base_url, self.api_key
        )
    }

    /// Collection endpoint (list/create documents).
    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.firestore_base_url, self.project_id, collection
        )
    }

    /// Single-document endpoint (patch/delete).
    pub fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }
}
