//! Label composition core.
//!
//! Builds the ordered sequence of styled segments shown next to a chat
//! message: username, context nickname and numeric user id, arranged per
//! the user-selected [`DisplayMode`]. The host renderer maps segment kinds
//! to visual styling; ordering and text are decided here.

use crate::identity::UserIdentity;
use crate::settings::{DisplayMode, Settings};

/// Styling role of one piece of a composed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// The literal `@` shown before mention-style labels.
    Prefix,
    /// Main name text.
    Primary,
    /// De-emphasised companion name, rendered in a suffix style.
    Secondary,
    /// Raw numeric user id.
    Id,
}

/// One styled, ordered piece of a composed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    fn prefix() -> Self {
        Self {
            kind: SegmentKind::Prefix,
            text: "@".into(),
        }
    }

    fn primary(text: &str) -> Self {
        Self {
            kind: SegmentKind::Primary,
            text: text.into(),
        }
    }

    fn secondary(text: &str) -> Self {
        Self {
            kind: SegmentKind::Secondary,
            text: text.into(),
        }
    }

    fn id(text: &str) -> Self {
        Self {
            kind: SegmentKind::Id,
            text: text.into(),
        }
    }
}

/// Per-call rendering flags from the host message renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    /// Whether this label sits inside a reply preview.
    pub is_reply_preview: bool,
    /// Whether the label should lead with an `@` mention prefix.
    pub with_mention_prefix: bool,
}

/// Per-message inputs from the host renderer.
///
/// Either the labelled user or the nickname may be absent when the host
/// hands over incomplete data; the composer then degrades to a bare
/// nickname render instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelRequest<'a> {
    /// Message author.
    pub author: Option<&'a UserIdentity>,
    /// User to label in place of the author (e.g. the replied-to user in a
    /// reply preview).
    pub user_override: Option<&'a UserIdentity>,
    /// Context-scoped nickname for the labelled user.
    pub nick: Option<&'a str>,
}

/// Compose the ordered label segments for one rendered message.
///
/// `settings` is an immutable snapshot; the host re-reads its settings
/// store and passes the current value on every call, so edits take effect
/// on the next rendered message.
pub fn compose(request: &LabelRequest<'_>, settings: &Settings, ctx: RenderContext) -> Vec<Segment> {
    let user = request.user_override.or(request.author);
    let (Some(user), Some(nick)) = (user, request.nick) else {
        // Malformed host input: degrade to the bare nickname.
        return vec![Segment::primary(request.nick.unwrap_or(""))];
    };

    let username = user.effective_username(settings.display_names);
    let id = user.id.as_str();

    let mut segments = Vec::with_capacity(4);
    if ctx.with_mention_prefix {
        segments.push(Segment::prefix());
    }

    // A nickname suppressed for reply previews, or one that matches the
    // username, is redundant. Only the user-id mode short-circuits on
    // redundancy; every other mode runs the normal dispatch below with
    // nick == username.
    let nick_redundant = (ctx.is_reply_preview && !settings.in_replies)
        || username.to_lowercase() == nick.to_lowercase();
    if nick_redundant && settings.mode == DisplayMode::UserId {
        segments.push(Segment::primary(username));
        segments.push(Segment::id(id));
        return segments;
    }

    match settings.mode {
        DisplayMode::NickUserId => {
            segments.push(Segment::primary(nick));
            segments.push(Segment::secondary(username));
            segments.push(Segment::id(id));
        }
        DisplayMode::IdUserNick => {
            segments.push(Segment::id(id));
            segments.push(Segment::primary(username));
            segments.push(Segment::secondary(nick));
        }
        DisplayMode::IdNickUser => {
            segments.push(Segment::id(id));
            segments.push(Segment::primary(nick));
            segments.push(Segment::secondary(username));
        }
        DisplayMode::UserIdNick => {
            segments.push(Segment::primary(username));
            segments.push(Segment::id(id));
            segments.push(Segment::secondary(nick));
        }
        DisplayMode::NickIdUser => {
            segments.push(Segment::primary(nick));
            segments.push(Segment::id(id));
            segments.push(Segment::primary(username));
        }
        DisplayMode::IdUser => {
            segments.push(Segment::id(id));
            segments.push(Segment::primary(username));
        }
        DisplayMode::UserNick => {
            segments.push(Segment::primary(username));
            segments.push(Segment::secondary(nick));
            segments.push(Segment::id(id));
        }
        DisplayMode::NickUser => {
            // The only mode without an id segment.
            segments.push(Segment::primary(nick));
            segments.push(Segment::secondary(username));
        }
        DisplayMode::UserNickId => {
            segments.push(Segment::primary(username));
            segments.push(Segment::secondary(nick));
            segments.push(Segment::id(id));
        }
        DisplayMode::User | DisplayMode::UserId => {
            segments.push(Segment::primary(username));
            segments.push(Segment::id(id));
        }
    }

    segments
}

/// Concatenate segment text in order, ignoring styling kinds.
///
/// This is the form hosts use for unstyled surfaces such as tooltips or
/// copy-to-clipboard.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
