//! Document-store access for the mirror.

pub mod users;

pub use users::MirrorRepository;

use mongodb::Client;
use secrecy::ExposeSecret;

use crate::config::MirrorConfig;

/// Name of the mirrored collection.
const COLLECTION: &str = "users";

/// Create the single long-lived MongoDB client and hand back a repository
/// over the mirrored collection.
///
/// The driver connects lazily, so a down store surfaces on the first
/// query, not here.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the URI cannot be parsed.
pub async fn connect(config: &MirrorConfig) -> Result<MirrorRepository, mongodb::error::Error> {
    let client = Client::with_uri_str(config.mongodb_uri.expose_secret()).await?;
    let collection = client.database(&config.database).collection(COLLECTION);
    Ok(MirrorRepository::new(collection))
}
