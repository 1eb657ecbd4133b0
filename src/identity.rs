//! Identity fields for the user being labelled, as supplied by the host.

/// Account-level identity for a chat user.
///
/// The context-scoped nickname is deliberately not part of this struct: it
/// belongs to the place the message was posted, not to the account, and the
/// host hands it to the composer separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Global account handle.
    pub username: String,
    /// Optional user-chosen display name, shown in place of the username
    /// when the corresponding setting is enabled.
    pub global_name: Option<String>,
    /// Numeric user id as a decimal string.
    pub id: String,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            global_name: None,
            id: id.into(),
        }
    }

    pub fn with_global_name(mut self, global_name: impl Into<String>) -> Self {
        self.global_name = Some(global_name.into());
        self
    }

    /// Resolve the name used in the "username" role of a composed label.
    ///
    /// Display-name substitution applies only to this role, never to the
    /// nickname. An unset or empty display name falls back to the username.
    pub fn effective_username(&self, use_display_names: bool) -> &str {
        if use_display_names {
            if let Some(name) = self.global_name.as_deref() {
                if !name.is_empty() {
                    return name;
                }
            }
        }
        &self.username
    }
}
