//! Inline SVG icons for the hero contact links.

/// Icons available to the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Envelope outline, for the email link
    Envelope,
    /// Professional-network logo
    LinkedIn,
    /// Code-hosting logo
    GitHub,
    /// Document with a download arrow, for the resume link
    DocumentDownload,
}

impl Icon {
    /// Render the icon as an inline `<svg>` element.
    #[must_use]
    pub fn svg(self) -> String {
        match self {
            Self::Envelope => outline(ENVELOPE_PATH),
            Self::DocumentDownload => outline(DOCUMENT_DOWNLOAD_PATH),
            Self::LinkedIn => filled(LINKEDIN_PATH),
            Self::GitHub => filled(GITHUB_PATH),
        }
    }
}

fn outline(path: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"icon\" fill=\"none\" viewBox=\"0 0 24 24\" stroke-width=\"1.5\" stroke=\"currentColor\" aria-hidden=\"true\"><path stroke-linecap=\"round\" stroke-linejoin=\"round\" d=\"{path}\" /></svg>"
    )
}

fn filled(path: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"icon\" fill=\"currentColor\" viewBox=\"0 0 24 24\" aria-hidden=\"true\"><path d=\"{path}\" /></svg>"
    )
}

const ENVELOPE_PATH: &str = "M21.75 6.75v10.5a2.25 2.25 0 0 1-2.25 2.25h-15a2.25 2.25 0 0 1-2.25-2.25V6.75m19.5 0A2.25 2.25 0 0 0 19.5 4.5h-15a2.25 2.25 0 0 0-2.25 2.25m19.5 0v.243a2.25 2.25 0 0 1-1.07 1.916l-7.5 4.615a2.25 2.25 0 0 1-2.36 0L3.32 8.91a2.25 2.25 0 0 1-1.07-1.916V6.75";

const DOCUMENT_DOWNLOAD_PATH: &str = "M19.5 14.25v-2.625a3.375 3.375 0 0 0-3.375-3.375h-1.5A1.125 1.125 0 0 1 13.5 7.125v-1.5a3.375 3.375 0 0 0-3.375-3.375H8.25m.75 12 3 3m0 0 3-3m-3 3v-6m-1.5-9H5.625c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125V11.25a9 9 0 0 0-9-9Z";

const LINKEDIN_PATH: &str = "M22.23 0H1.77C.8 0 0 .774 0 1.727v20.546C0 23.226.8 24 1.77 24h20.46c.97 0 1.77-.774 1.77-1.727V1.727C24 .774 23.2 0 22.23 0zM7.09 20.452H3.56V9h3.53v11.452zM5.326 7.564c-1.126 0-2.04-.932-2.04-2.077 0-1.145.914-2.077 2.04-2.077s2.04.932 2.04 2.077c0 1.145-.914 2.077-2.04 2.077zM20.452 20.452h-3.53v-5.966c0-1.423-.03-3.254-1.984-3.254-1.987 0-2.29 1.548-2.29 3.145v6.075h-3.53V9h3.391v1.56h.048c.472-.9 1.623-1.847 3.342-1.847 3.57 0 4.229 2.35 4.229 5.407v6.332z";

const GITHUB_PATH: &str = "M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.387.6.113.82-.26.82-.577v-2.234c-3.338.726-4.042-1.416-4.042-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.744.083-.729.083-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.834 2.807 1.304 3.492.998.108-.775.418-1.305.763-1.604-2.665-.3-5.467-1.334-5.467-5.93 0-1.31.47-2.38 1.235-3.22-.124-.303-.535-1.523.118-3.176 0 0 1.008-.322 3.3 1.23a11.4 11.4 0 0 1 6.003 0c2.292-1.552 3.3-1.23 3.3-1.23.653 1.653.242 2.873.118 3.176.767.84 1.236 1.91 1.236 3.22 0 4.61-2.807 5.624-5.479 5.918.43.37.824 1.096.824 2.21v3.285c0 .319.216.694.825.576C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12";
