use serde::{Deserialize, Deserializer, Serialize};
use directories::ProjectDirs;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Ordering of username, nickname and id inside a composed label.
///
/// The wire form (settings file, host settings UI) is the kebab-case
/// identifier returned by [`DisplayMode::as_str`].
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Username then nickname and id.
    #[default]
    UserNickId,
    /// Nickname then username and id.
    NickUserId,
    /// Id then username and nickname.
    IdUserNick,
    /// Id then nickname and username.
    IdNickUser,
    /// Username then id and nickname.
    UserIdNick,
    /// Nickname then id and username.
    NickIdUser,
    /// Username then id.
    UserId,
    /// Username then nickname.
    UserNick,
    /// Nickname then username.
    NickUser,
    /// Id then username.
    IdUser,
    /// Username only.
    User,
}

impl DisplayMode {
    /// All modes, in the order the host settings UI lists them.
    pub const ALL: [DisplayMode; 11] = [
        DisplayMode::UserNickId,
        DisplayMode::NickUserId,
        DisplayMode::IdUserNick,
        DisplayMode::IdNickUser,
        DisplayMode::UserIdNick,
        DisplayMode::NickIdUser,
        DisplayMode::UserId,
        DisplayMode::UserNick,
        DisplayMode::NickUser,
        DisplayMode::IdUser,
        DisplayMode::User,
    ];

    /// Stable identifier used in the settings file and the host settings UI.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::UserNickId => "user-nick-id",
            DisplayMode::NickUserId => "nick-user-id",
            DisplayMode::IdUserNick => "id-user-nick",
            DisplayMode::IdNickUser => "id-nick-user",
            DisplayMode::UserIdNick => "user-id-nick",
            DisplayMode::NickIdUser => "nick-id-user",
            DisplayMode::UserId => "user-id",
            DisplayMode::UserNick => "user-nick",
            DisplayMode::NickUser => "nick-user",
            DisplayMode::IdUser => "id-user",
            DisplayMode::User => "user",
        }
    }

    /// Parse a stable identifier. Unknown identifiers yield `None`.
    pub fn parse(s: &str) -> Option<DisplayMode> {
        DisplayMode::ALL.into_iter().find(|mode| mode.as_str() == s)
    }

    /// Human-readable option label for the host settings UI.
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::UserNickId => "Username then nickname and id",
            DisplayMode::NickUserId => "Nickname then username and id",
            DisplayMode::IdUserNick => "Id then username and nickname",
            DisplayMode::IdNickUser => "Id then nickname and username",
            DisplayMode::UserIdNick => "Username then id and nickname",
            DisplayMode::NickIdUser => "Nickname then id and username",
            DisplayMode::UserId => "Username then id",
            DisplayMode::UserNick => "Username then nickname",
            DisplayMode::NickUser => "Nickname then username",
            DisplayMode::IdUser => "Id then username",
            DisplayMode::User => "Username only",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DisplayMode {
    // Unknown identifiers fall back to the default mode rather than failing
    // the whole settings load.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DisplayMode::parse(&s).unwrap_or_default())
    }
}

/// Label composition settings.
///
/// The host owns the settings lifecycle and passes a snapshot into every
/// compose call, so edits made in the settings UI show up on the next
/// rendered message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Segment ordering for composed labels.
    #[serde(default)]
    pub mode: DisplayMode,
    /// Use display names in place of usernames.
    #[serde(default)]
    pub display_names: bool,
    /// Also apply functionality to reply previews.
    #[serde(default)]
    pub in_replies: bool,
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "nicklabel", "nicklabel") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).unwrap();
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.mode, DisplayMode::UserNickId);
        assert!(!settings.display_names);
        assert!(!settings.in_replies);
    }

    #[test]
    fn test_mode_identifier_round_trip() {
        for mode in DisplayMode::ALL {
            assert_eq!(DisplayMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(DisplayMode::parse("nick-user-id"), Some(DisplayMode::NickUserId));
        assert_eq!(DisplayMode::parse("bogus"), None);
        assert_eq!(DisplayMode::parse(""), None);
    }

    #[test]
    fn test_mode_labels_distinct() {
        for (i, a) in DisplayMode::ALL.iter().enumerate() {
            assert!(!a.label().is_empty());
            for b in &DisplayMode::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = Settings {
            mode: DisplayMode::NickIdUser,
            display_names: true,
            in_replies: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"nick-id-user\""));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_default() {
        let settings: Settings =
            serde_json::from_str(r#"{"mode":"no-such-mode"}"#).unwrap();
        assert_eq!(settings.mode, DisplayMode::UserNickId);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings =
            serde_json::from_str(r#"{"mode":"id-user"}"#).unwrap();
        assert_eq!(settings.mode, DisplayMode::IdUser);
        assert!(!settings.display_names);
        assert!(!settings.in_replies);
    }
}
