pub mod auth;
pub mod client;
pub mod firestore {
    pub mod document;
    pub mod repository;
}
