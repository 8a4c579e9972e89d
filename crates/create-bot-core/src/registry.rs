//! npm registry lookups for dependency version pinning
//!
//! Each package resolves to `^<latest>` from the registry's dist-tags. A 404
//! is definitive and never retried; any other failure is retried up to
//! [`RETRIES`] attempts with a fixed delay. Retry reporting goes through a
//! caller-supplied hook so the client stays silent on its own.

use crate::error::RegistryError;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Total attempts per package, counting the first one
pub const RETRIES: u32 = 3;

/// Fixed delay between attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Environment variable overriding the registry base URL
pub const REGISTRY_URL_ENV: &str = "CREATE_BOT_REGISTRY_URL";

#[derive(Debug, Deserialize)]
struct PackageInformation {
    #[serde(rename = "dist-tags")]
    dist_tags: DistTags,
}

#[derive(Debug, Deserialize)]
struct DistTags {
    latest: String,
}

/// Called once per failed attempt that will be retried or given up on
pub type OnRetry<'a> = &'a (dyn Fn(u32, &RegistryError) + Send + Sync);

/// Client for fetching latest package versions
pub struct RegistryClient {
    client: reqwest::Client,
    base: Url,
    retry_delay: Duration,
}

impl RegistryClient {
    /// Create a client against the public registry, honoring the
    /// `CREATE_BOT_REGISTRY_URL` override.
    pub fn new(user_agent: &str) -> Self {
        let url_str =
            std::env::var(REGISTRY_URL_ENV).unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());
        let base = Url::parse(&url_str)
            .unwrap_or_else(|_| Url::parse(DEFAULT_REGISTRY_URL).expect("default URL is valid"));
        Self::with_base(base, user_agent)
    }

    /// Create a client against an explicit registry base URL.
    pub fn with_base(base: Url, user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Override the delay between attempts.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    fn package_url(&self, name: &str) -> Result<Url, RegistryError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RegistryError::BadBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    async fn try_fetch(&self, name: &str) -> Result<String, RegistryError> {
        let url = self.package_url(name)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| RegistryError::Transport {
                name: name.to_string(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(RegistryError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(RegistryError::BadStatus {
                name: name.to_string(),
                code: status.as_u16(),
            });
        }

        let info: PackageInformation =
            response
                .json()
                .await
                .map_err(|source| RegistryError::Transport {
                    name: name.to_string(),
                    source,
                })?;
        Ok(format!("^{}", info.dist_tags.latest))
    }

    /// Fetch `^<latest>` for one package.
    pub async fn fetch_latest_version(
        &self,
        name: &str,
        on_retry: OnRetry<'_>,
    ) -> Result<String, RegistryError> {
        for attempt in 1..=RETRIES {
            match self.try_fetch(name).await {
                Ok(version) => return Ok(version),
                Err(err @ (RegistryError::NotFound(_) | RegistryError::BadBaseUrl(_))) => {
                    return Err(err)
                }
                Err(err) => {
                    on_retry(attempt, &err);
                    if attempt < RETRIES {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(RegistryError::Exhausted {
            name: name.to_string(),
            attempts: RETRIES,
        })
    }

    /// Fetch versions for a dependency set concurrently, preserving input
    /// order in the result.
    pub async fn fetch_latest_versions(
        &self,
        names: &[&str],
        on_retry: OnRetry<'_>,
    ) -> Result<Vec<(String, String)>, RegistryError> {
        futures::future::try_join_all(names.iter().map(|&name| async move {
            let version = self.fetch_latest_version(name, on_retry).await?;
            Ok((name.to_string(), version))
        }))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response per incoming connection, in order.
    async fn stub_registry(responses: Vec<(u16, &'static str)>) -> (Url, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);

                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request).await;

                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    _ => "Internal Server Error",
                };
                let response = format!(
                    "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (base, hits)
    }

    fn client(base: Url) -> RegistryClient {
        RegistryClient::with_base(base, "create-bot-tests").retry_delay(Duration::ZERO)
    }

    const LATEST: &str = r#"{"dist-tags":{"latest":"4.2.0"}}"#;

    #[tokio::test]
    async fn test_returns_caret_pinned_latest() {
        let (base, hits) = stub_registry(vec![(200, LATEST)]).await;
        let version = client(base)
            .fetch_latest_version("discord.js", &|_, _| {})
            .await
            .unwrap();
        assert_eq!(version, "^4.2.0");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_not_found_short_circuits() {
        let (base, hits) = stub_registry(vec![(404, "{}"), (200, LATEST)]).await;
        let err = client(base)
            .fetch_latest_version("no-such-package", &|_, _| {})
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(name) if name == "no-such-package"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transient_failures_exhaust_after_three_attempts() {
        let (base, hits) = stub_registry(vec![(500, ""), (500, ""), (500, ""), (200, LATEST)]).await;

        let observed = Mutex::new(Vec::new());
        let err = client(base)
            .fetch_latest_version("discord.js", &|attempt, _| {
                observed.lock().unwrap().push(attempt);
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::Exhausted { attempts: 3, .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert_eq!(*observed.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failure() {
        let (base, hits) = stub_registry(vec![(500, ""), (200, LATEST)]).await;
        let version = client(base)
            .fetch_latest_version("discord.js", &|_, _| {})
            .await
            .unwrap();
        assert_eq!(version, "^4.2.0");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetches_dependency_set_in_order() {
        let (base, _hits) = stub_registry(vec![(200, LATEST), (200, LATEST)]).await;
        let versions = client(base)
            .fetch_latest_versions(&["discord.js", "@sapphire/framework"], &|_, _| {})
            .await
            .unwrap();
        assert_eq!(
            versions,
            vec![
                ("discord.js".to_string(), "^4.2.0".to_string()),
                ("@sapphire/framework".to_string(), "^4.2.0".to_string()),
            ]
        );
    }
}
