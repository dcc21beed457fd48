use keyring::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

const KEYRING_SERVICE: &str = "twilioctl";
const KEYRING_USER: &str = "Account Credentials";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("credential storage is unavailable: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("stored credentials are malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The format of our JSON within the user's keyring.
///
/// Both values live in one entry so that they are always stored (and replaced) together.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CredentialStorage {
    pub account_sid: String,
    pub auth_token: String,
}

impl CredentialStorage {
    pub fn from_json(contents: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads stored credentials, if the user has logged in before.
    pub fn load() -> Result<Option<Self>, StorageError> {
        match credentials_entry()?.get_password() {
            Ok(contents) => Self::from_json(&contents).map(Some),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces any previously stored credentials.
    pub fn save(&self) -> Result<(), StorageError> {
        credentials_entry()?.set_password(&self.to_json()?)?;
        Ok(())
    }
}

impl fmt::Debug for CredentialStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStorage")
            .field("account_sid", &self.account_sid)
            .finish_non_exhaustive()
    }
}

fn credentials_entry() -> Result<Entry, StorageError> {
    Ok(Entry::new(KEYRING_SERVICE, KEYRING_USER)?)
}
