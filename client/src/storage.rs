//! Token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token lives in two places: a durable store read by the console
//! itself, and the `auth-token` cookie read by the edge guard on every page
//! request. The session keeps both in agreement; this module only provides
//! the storage backends.
//!
//! DESIGN
//! ======
//! Both locations are traits so a terminal front-end can use files while
//! tests use memory. The cookie mirror models a browser cookie: a value with
//! a 7-day expiry that reads as absent once it lapses or is blank.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use models::cookie::{self, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SESSION_COOKIE_PATH};
use time::OffsetDateTime;

/// Durable single-value token store.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&self, token: &str) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

/// The cookie copy of the token that the edge guard inspects.
pub trait CookieMirror: Send + Sync {
    /// Current value, or `None` when unset, blank or expired.
    fn value(&self) -> io::Result<Option<String>>;
    /// Store `token` with a fresh 7-day expiry.
    fn set(&self, token: &str) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

fn expiry_from_now() -> OffsetDateTime {
    OffsetDateTime::now_utc() + SESSION_COOKIE_MAX_AGE
}

// =============================================================================
// IN-MEMORY
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    value: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.value.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryCookie {
    value: Option<(String, OffsetDateTime)>,
    headers: Vec<String>,
}

/// Cookie mirror held in memory. Every write is also recorded as the
/// `Set-Cookie` header a browser would have received.
#[derive(Debug, Default)]
pub struct MemoryCookieMirror {
    inner: Mutex<MemoryCookie>,
}

impl MemoryCookieMirror {
    /// `Set-Cookie` headers written so far, oldest first.
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).headers.clone()
    }

    /// Expiry of the current value, if any.
    #[must_use]
    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).value.as_ref().map(|(_, at)| *at)
    }
}

impl CookieMirror for MemoryCookieMirror {
    fn value(&self) -> io::Result<Option<String>> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(inner
            .value
            .as_ref()
            .filter(|(value, expires)| cookie::is_present(Some(value.as_str())) && *expires > OffsetDateTime::now_utc())
            .map(|(value, _)| value.clone()))
    }

    fn set(&self, token: &str) -> io::Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.value = Some((token.to_owned(), expiry_from_now()));
        inner.headers.push(cookie::set_cookie_header(token));
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.value = None;
        inner.headers.push(cookie::clear_cookie_header());
        Ok(())
    }
}

// =============================================================================
// FILE-BACKED
// =============================================================================

/// Token kept in a single file, readable only by the owner on unix.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        write_private(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        remove_if_exists(&self.path)
    }
}

/// Cookie mirror stored as a Netscape-format cookie file, so the session can
/// be handed to `curl -b` or a browser automation tool pointed at the
/// console host.
#[derive(Debug, Clone)]
pub struct FileCookieJar {
    path: PathBuf,
    domain: String,
}

impl FileCookieJar {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, domain: &str) -> Self {
        Self { path: path.into(), domain: domain.to_owned() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self, token: &str, expires: OffsetDateTime) -> String {
        format!(
            "# Netscape HTTP Cookie File\n{}\tFALSE\t{}\tFALSE\t{}\t{}\t{}\n",
            self.domain,
            SESSION_COOKIE_PATH,
            expires.unix_timestamp(),
            SESSION_COOKIE_NAME,
            token
        )
    }
}

/// Parse the session cookie's `(value, expiry)` out of a cookie file.
fn parse_cookie_line(raw: &str) -> Option<(String, i64)> {
    raw.lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .find_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            match fields.as_slice() {
                [_, _, _, _, expires, name, value] if *name == SESSION_COOKIE_NAME => {
                    Some(((*value).to_owned(), expires.parse().ok()?))
                }
                _ => None,
            }
        })
}

impl CookieMirror for FileCookieJar {
    fn value(&self) -> io::Result<Option<String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let now = OffsetDateTime::now_utc().unix_timestamp();
        Ok(parse_cookie_line(&raw)
            .filter(|(value, expires)| cookie::is_present(Some(value.as_str())) && *expires > now)
            .map(|(value, _)| value))
    }

    fn set(&self, token: &str) -> io::Result<()> {
        write_private(&self.path, &self.render(token, expiry_from_now()))
    }

    fn clear(&self) -> io::Result<()> {
        remove_if_exists(&self.path)
    }
}

fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
