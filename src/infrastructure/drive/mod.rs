mod google_drive_client;
mod mock_drive_client;
mod mock_token_provider;
mod service_account;

pub use google_drive_client::GoogleDriveClient;
pub use mock_drive_client::MockDriveClient;
pub use mock_token_provider::MockTokenProvider;
pub use service_account::{
    AssertionClaims, DRIVE_READONLY_SCOPE, ServiceAccountKey, ServiceAccountTokenProvider,
};
