use crate::tools::ToolName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-supplied key for the text service.
///
/// `Debug` never prints the secret, so a `Credential` can sit inside
/// structs that get logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Raw secret, for the outbound request only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Blank or whitespace-only keys count as empty
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Masked form for display, e.g. "••••••cdef"
    pub fn masked(&self) -> String {
        let visible: String = {
            let chars: Vec<char> = self.0.chars().collect();
            if chars.len() > 8 {
                chars[chars.len() - 4..].iter().collect()
            } else {
                String::new()
            }
        };
        format!("{}{}", "•".repeat(6), visible)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Page currently shown by the studio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Dashboard,
    Tool(ToolName),
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Dashboard => f.write_str("Dashboard"),
            Page::Tool(tool) => f.write_str(tool.display_name()),
        }
    }
}

impl From<ToolName> for Page {
    fn from(tool: ToolName) -> Self {
        Page::Tool(tool)
    }
}

/// Tracks which page is active
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Switch pages unconditionally
    pub fn navigate(&mut self, page: impl Into<Page>) {
        self.current = page.into();
        tracing::debug!("navigated to {}", self.current);
    }

    pub fn is_dashboard(&self) -> bool {
        self.current == Page::Dashboard
    }

    /// Active tool, if a tool page is shown
    pub fn tool(&self) -> Option<ToolName> {
        match self.current {
            Page::Dashboard => None,
            Page::Tool(tool) => Some(tool),
        }
    }
}

/// Per-user state: the active page and the credential.
///
/// Lives only in memory for the duration of one run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    navigator: Navigator,
    credential: Option<Credential>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn current(&self) -> Page {
        self.navigator.current()
    }

    pub fn navigate(&mut self, page: impl Into<Page>) {
        self.navigator.navigate(page);
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Store a new key; a blank entry clears it
    pub fn set_credential(&mut self, secret: impl Into<String>) {
        let credential = Credential::new(secret);
        self.credential = if credential.is_empty() { None } else { Some(credential) };
    }

    pub fn clear_credential(&mut self) {
        self.credential = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigator_defaults_to_dashboard() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), Page::Dashboard);
        assert_eq!(navigator.current().to_string(), "Dashboard");
        assert!(navigator.is_dashboard());
        assert!(navigator.tool().is_none());
    }

    #[test]
    fn test_navigate_switches_page() {
        let mut session = Session::new();
        session.navigate(ToolName::Grammar);
        assert_eq!(session.current(), Page::Tool(ToolName::Grammar));
        assert_eq!(session.current().to_string(), "Grammar");
        assert_eq!(session.navigator().tool(), Some(ToolName::Grammar));

        session.navigate(Page::Dashboard);
        assert!(session.navigator().is_dashboard());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("super-secret-key");
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("super-secret-key"));
        assert_eq!(credential.expose(), "super-secret-key");
        assert!(credential.masked().ends_with("-key"));
        assert!(!credential.masked().contains("super"));
    }

    #[test]
    fn test_credential_forwarded_verbatim() {
        let credential = Credential::new(" key-with-spaces ");
        assert_eq!(credential.expose(), " key-with-spaces ");
        assert!(!credential.is_empty());
        assert!(Credential::new(" \t ").is_empty());
    }

    #[test]
    fn test_blank_credential_clears() {
        let mut session = Session::new().with_credential(Some(Credential::new("k")));
        assert!(session.credential().is_some());
        session.set_credential("   ");
        assert!(session.credential().is_none());
    }
}
