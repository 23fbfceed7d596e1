//! Resource existence probing.
//!
//! `http`/`https` locations are checked with a libcurl request (status must
//! be exactly 200); `file://` locations and bare paths are checked on the
//! local filesystem. Network failures are answered with `false` so a caller
//! can sweep many candidate mirrors without stopping at the first dead one.

mod scheme;

pub use scheme::{classify_scheme, Scheme};

use crate::config::{ProbeConfig, ProbeMethod};
use crate::error::ProbeError;
use std::path::Path;

/// Checks whether artifacts and metadata files are currently retrievable.
///
/// Holds no connection state; every call uses its own curl handle, so a
/// probe can be cloned into worker threads freely.
#[derive(Debug, Clone, Default)]
pub struct ResourceProbe {
    config: ProbeConfig,
}

impl ResourceProbe {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// True if the resource at `url` exists.
    ///
    /// Never fails: DNS errors, refused connections and timeouts all resolve
    /// to `false` and are not retried.
    pub fn exists(&self, url: &str) -> bool {
        match classify_scheme(url) {
            Scheme::Http | Scheme::Https => match self.status(url) {
                Ok(code) => {
                    tracing::debug!("probe {} -> HTTP {}", url, code);
                    code == 200
                }
                Err(e) => {
                    tracing::debug!("probe {} failed: {}", url, e);
                    false
                }
            },
            Scheme::File => Path::new(scheme::strip_file_scheme(url)).exists(),
            Scheme::Local | Scheme::Other(_) => Path::new(url).exists(),
        }
    }

    /// Raw HTTP status code for an `http`/`https` URL.
    ///
    /// Redirects are followed when the config allows it; the reported code is
    /// that of the final response. Runs in the current thread.
    pub fn status(&self, url: &str) -> Result<u32, ProbeError> {
        let scheme = classify_scheme(url);
        if !scheme.is_network() {
            return Err(ProbeError::UnsupportedScheme(scheme.as_str().to_string()));
        }
        let curl_err = |source| ProbeError::Curl {
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(curl_err)?;
        let set_method = match self.config.method {
            ProbeMethod::Get => easy.get(true),
            ProbeMethod::Head => easy.nobody(true),
        };
        set_method.map_err(curl_err)?;
        easy.follow_location(self.config.follow_redirects)
            .map_err(curl_err)?;
        easy.connect_timeout(self.config.connect_timeout())
            .map_err(curl_err)?;
        easy.timeout(self.config.timeout()).map_err(curl_err)?;

        let performed = {
            let mut transfer = easy.transfer();
            // Body is not needed; abort once the first chunk arrives.
            transfer.write_function(|_| Ok(0)).map_err(curl_err)?;
            transfer.perform()
        };
        match performed {
            Ok(()) => {}
            Err(e) if e.is_write_error() => {}
            Err(e) => return Err(curl_err(e)),
        }

        easy.response_code().map_err(curl_err)
    }

    /// First location in `urls` that exists, probing in order.
    pub fn first_available<'a, I>(&self, urls: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        urls.into_iter().find(|url| self.exists(url))
    }
}
