use std::env;

/// Firebase project settings shared by the auth and Firestore adapters.
pub struct FirebaseConfig {
    pub project_id: String,
    pub api_key: String,
}

impl FirebaseConfig {
    /// Load Firebase configuration from environment variables
    ///
    /// Environment variables:
    /// - FIREBASE_PROJECT_ID: Project whose Firestore collection holds the inventory
    /// - FIREBASE_API_KEY: Web API key for Identity Toolkit and Firestore REST calls
    pub fn from_env() -> Self {
        Self {
            project_id: env::var("FIREBASE_PROJECT_ID").expect("FIREBASE_PROJECT_ID must be set"),
            api_key: env::var("FIREBASE_API_KEY").expect("FIREBASE_API_KEY must be set"),
        }
    }
}
