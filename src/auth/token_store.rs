use std::fs;
use std::path::Path;

use crate::config::AppPaths;
use crate::error::AppResult;

use super::TokenSet;

pub trait TokenStore {
    fn load(&self, profile: &str) -> AppResult<Option<TokenSet>>;
    fn save(&self, profile: &str, token: &TokenSet) -> AppResult<()>;
    fn clear(&self, profile: &str) -> AppResult<()>;
}

/// Stores one token set per profile as JSON under the app data dir.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    paths: AppPaths,
}

impl FileTokenStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self, profile: &str) -> AppResult<Option<TokenSet>> {
        let path = self.paths.token_file(profile);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, profile: &str, token: &TokenSet) -> AppResult<()> {
        let path = self.paths.token_file(profile);
        let payload = serde_json::to_string_pretty(token)?;
        write_private(&path, &payload)
    }

    fn clear(&self, profile: &str) -> AppResult<()> {
        let path = self.paths.token_file(profile);
        if path.exists() {
            fs::remove_file(path)?;
        }

        Ok(())
    }
}

// Tokens are credentials; keep them out of reach of other users.
fn write_private(path: &Path, payload: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}
