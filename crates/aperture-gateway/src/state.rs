use std::sync::Arc;

use aperture_core::{ImageProvider, LinkIssuer, LinkStore};

/// Which backend serves `GET /image/{id}`.
#[derive(Clone)]
pub enum RedirectBackend {
    /// The publication mode does not produce hosted links; the route is
    /// not mounted.
    Disabled,
    /// Hosted links were requested but the store failed to initialize at
    /// startup.
    Unavailable,
    /// Hosted links with a live store.
    Ready(Arc<dyn LinkStore>),
}

/// Shared handles for the request handlers.
///
/// The provider and issuer slots are `None` when their initialization
/// failed at startup; the gateway serves anyway and the affected
/// handlers answer with a configuration error.
#[derive(Clone)]
pub struct AppState {
    provider: Option<Arc<dyn ImageProvider>>,
    links: Option<Arc<dyn LinkIssuer>>,
    redirects: RedirectBackend,
}

impl AppState {
    pub fn new(
        provider: Option<Arc<dyn ImageProvider>>,
        links: Option<Arc<dyn LinkIssuer>>,
        redirects: RedirectBackend,
    ) -> Self {
        Self {
            provider,
            links,
            redirects,
        }
    }

    pub fn provider(&self) -> Option<&Arc<dyn ImageProvider>> {
        self.provider.as_ref()
    }

    pub fn links(&self) -> Option<&Arc<dyn LinkIssuer>> {
        self.links.as_ref()
    }

    pub fn redirects(&self) -> &RedirectBackend {
        &self.redirects
    }

    pub fn redirects_enabled(&self) -> bool {
        !matches!(self.redirects, RedirectBackend::Disabled)
    }
}
