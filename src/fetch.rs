use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use reqwest::header::{HeaderMap, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Client as ReqwestClient, ClientBuilder, Response};
use url::{Host, Url};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: usize = 10;

/// Returns `true` if `ip` is a private, loopback, link-local or unspecified
/// address. IPv4-mapped IPv6 addresses are judged by their IPv4 form.
pub fn is_private_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            let o = v4.octets();
            matches!(
                o,
                [127, ..]
                    | [10, ..]
                    | [169, 254, ..]
                    | [192, 168, ..]
                    | [0, ..]
                    | [255, 255, 255, 255]
            ) || (o[0] == 172 && (16..=31).contains(&o[1]))
        }
        IpAddr::V6(v6) => {
            if let Some(v4) = v6.to_ipv4_mapped() {
                return is_private_ip(IpAddr::V4(v4));
            }
            v6.is_loopback()
                || v6.is_unspecified()
                || (v6.segments()[0] & 0xfe00 == 0xfc00)
                || (v6.segments()[0] & 0xffc0 == 0xfe80)
        }
    }
}

/// Downloads pages for analysis.
///
/// Redirects are followed by hand so every hop goes through the same URL
/// and address checks as the first request. With the private-host guard on,
/// each hop is sent through a client pinned to the addresses that were
/// vetted, so the connection cannot land on a different resolution.
#[derive(Clone)]
pub struct PageFetcher {
    client: ReqwestClient,
    timeout: Duration,
    user_agent: String,
    allow_private_hosts: bool,
}

fn client_builder(timeout: Duration, user_agent: &str) -> ClientBuilder {
    ReqwestClient::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .redirect(Policy::none())
}

fn build_client(builder: ClientBuilder) -> AppResult<ReqwestClient> {
    builder.build().map_err(|e| {
        tracing::error!(error = ?e, "Failed to build HTTP client");
        AppError::Internal
    })
}

/// Parse `url` and check it is something we are willing to fetch.
fn parse_target(url: &str) -> AppResult<Url> {
    let parsed = Url::parse(url).map_err(|_| AppError::Validation("Invalid URL".into()))?;
    check_target(&parsed)?;
    Ok(parsed)
}

fn check_target(url: &Url) -> AppResult<()> {
    match url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(AppError::Validation(
                "Only http/https URLs are supported".into(),
            ))
        }
    }
    if url.host_str().is_none() {
        return Err(AppError::Validation("URL has no host".into()));
    }
    Ok(())
}

/// The next URL named by a redirect response from `current`.
fn redirect_target(current: &Url, headers: &HeaderMap) -> AppResult<Url> {
    let location = headers
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Fetch("fetch failed: redirect without location".into()))?;

    let next = current
        .join(location)
        .map_err(|_| AppError::Validation("Invalid redirect URL".into()))?;
    check_target(&next)?;
    Ok(next)
}

/// Resolve `host` and return its addresses, rejecting it if any address is
/// private or reserved.
async fn vetted_addrs(host: &str, port: u16) -> AppResult<Vec<SocketAddr>> {
    // IPv6 literals come back from the URL bracketed.
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    let addrs: Vec<SocketAddr> = tokio::net::lookup_host((bare, port))
        .await
        .map_err(|_| AppError::Validation("Could not resolve URL host".into()))?
        .collect();

    if addrs.is_empty() {
        return Err(AppError::Validation("Could not resolve URL host".into()));
    }
    if addrs.iter().any(|addr| is_private_ip(addr.ip())) {
        return Err(AppError::Validation(
            "URL resolves to a private or reserved address".into(),
        ));
    }
    Ok(addrs)
}

impl PageFetcher {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = build_client(client_builder(
            config.fetch_timeout,
            &config.user_agent,
        ))?;

        Ok(Self {
            client,
            timeout: config.fetch_timeout,
            user_agent: config.user_agent.clone(),
            allow_private_hosts: config.allow_private_hosts,
        })
    }

    /// GET `url`, following up to [`MAX_REDIRECTS`] redirects, and return
    /// the final response body as text.
    ///
    /// Fails with `Validation` for URLs (including redirect targets) that are
    /// unusable or point at a private address, and with `Fetch` when a
    /// request fails, the redirect chain is too long, or the server answers
    /// with a non-2xx status.
    pub async fn fetch(&self, url: &str) -> AppResult<String> {
        let mut current = parse_target(url)?;

        for _ in 0..=MAX_REDIRECTS {
            let response = self.send(&current).await?;
            let status = response.status();

            if status.is_redirection() {
                let next = redirect_target(&current, response.headers())?;
                tracing::debug!(from = %current, to = %next, status = status.as_u16(), "Following redirect");
                current = next;
                continue;
            }

            if !status.is_success() {
                tracing::warn!(url = %current, status = status.as_u16(), "Target returned error status");
                return Err(AppError::Fetch(format!(
                    "fetch failed: status {}",
                    status.as_u16()
                )));
            }

            return response.text().await.map_err(|e| {
                tracing::warn!(error = ?e, url = %current, "Failed to read response body");
                AppError::Fetch(format!("fetch failed: {e}"))
            });
        }

        tracing::warn!(url = %url, "Redirect limit exceeded");
        Err(AppError::Fetch("fetch failed: too many redirects".into()))
    }

    /// Send a single GET for `target` without following redirects.
    async fn send(&self, target: &Url) -> AppResult<Response> {
        let client = if self.allow_private_hosts {
            self.client.clone()
        } else {
            self.pinned_client(target).await?
        };

        client.get(target.as_str()).send().await.map_err(|e| {
            tracing::warn!(error = ?e, url = %target, "Failed to fetch URL for analysis");
            AppError::Fetch(format!("fetch failed: {e}"))
        })
    }

    /// A client that can only connect to the vetted addresses of `target`.
    async fn pinned_client(&self, target: &Url) -> AppResult<ReqwestClient> {
        let host = target
            .host_str()
            .ok_or_else(|| AppError::Validation("URL has no host".into()))?;
        let addrs = vetted_addrs(host, target.port_or_known_default().unwrap_or(80)).await?;

        let mut builder = client_builder(self.timeout, &self.user_agent);
        // IP literals are never resolved, so only domains need pinning.
        if let Some(Host::Domain(domain)) = target.host() {
            builder = builder.resolve_to_addrs(domain, &addrs);
        }
        build_client(builder)
    }
}
