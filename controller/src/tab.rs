//! Tabs of the auth view.

#[cfg(test)]
#[path = "tab_test.rs"]
mod tab_test;

/// One of the two auth tabs. Exactly one is active while the auth view shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Login,
    Register,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 2] = [Tab::Login, Tab::Register];

    /// Stable identifier, also used as the content region's DOM id.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// Parse a tab from its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}
