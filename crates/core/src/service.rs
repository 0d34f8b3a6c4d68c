//! The fixed catalogue of services a client can request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the services offered on the intake form.
///
/// The catalogue is closed: the wire format only ever carries the four
/// labels below, and deserialization fails for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// Every offered service, in form display order.
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    /// The label as it appears on the wire and in the stored record.
    pub fn label(self) -> &'static str {
        match self {
            Service::UiUx => "UI/UX",
            Service::Branding => "Branding",
            Service::WebDev => "Web Dev",
            Service::MobileApp => "Mobile App",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown service label.
#[derive(Debug, thiserror::Error)]
#[error("Unknown service '{0}'. Must be one of: UI/UX, Branding, Web Dev, Mobile App")]
pub struct ParseServiceError(String);

impl FromStr for Service {
    type Err = ParseServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|svc| svc.label() == s)
            .ok_or_else(|| ParseServiceError(s.to_string()))
    }
}
