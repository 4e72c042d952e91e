//! Closed tag enumerations and the synonym tables that feed the detectors.
//!
//! Every tag the detectors can ever return lives in one of the three enums
//! below. Free-form strings never leave this module: callers either get a
//! variant or a "none"/"unknown" outcome.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Canonical tag for a creatable content format or content-adjacent action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Shot,
    Snip,
    Ssup,
    Collab,
    EditingAShot,
    InviteFriends,
    Feedback,
    MultipleAccounts,
    AccountOverview,
    StoreDraft,
    ChangePassword,
    Notification,
    ChangeTheme,
    Report,
    Moment,
    DeletePost,
    PostInsights,
    SavedPosts,
    EditProfile,
    EditPost,
    BlockUnblockUser,
    HideUnhideUsers,
    Messages,
    Discovery,
    EditingASsup,
    InteractiveSnip,
    Flix,
    CreateAPlaylist,
    EditingAFlix,
    EditingASnip,
}

impl ContentType {
    /// All content types, in declaration order.
    pub const ALL: &'static [ContentType] = &[
        ContentType::Shot,
        ContentType::Snip,
        ContentType::Ssup,
        ContentType::Collab,
        ContentType::EditingAShot,
        ContentType::InviteFriends,
        ContentType::Feedback,
        ContentType::MultipleAccounts,
        ContentType::AccountOverview,
        ContentType::StoreDraft,
        ContentType::ChangePassword,
        ContentType::Notification,
        ContentType::ChangeTheme,
        ContentType::Report,
        ContentType::Moment,
        ContentType::DeletePost,
        ContentType::PostInsights,
        ContentType::SavedPosts,
        ContentType::EditProfile,
        ContentType::EditPost,
        ContentType::BlockUnblockUser,
        ContentType::HideUnhideUsers,
        ContentType::Messages,
        ContentType::Discovery,
        ContentType::EditingASsup,
        ContentType::InteractiveSnip,
        ContentType::Flix,
        ContentType::CreateAPlaylist,
        ContentType::EditingAFlix,
        ContentType::EditingASnip,
    ];

    /// The canonical lowercase tag string.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ContentType::Shot => "shot",
            ContentType::Snip => "snip",
            ContentType::Ssup => "ssup",
            ContentType::Collab => "collab",
            ContentType::EditingAShot => "editing a shot",
            ContentType::InviteFriends => "invite friends",
            ContentType::Feedback => "feedback",
            ContentType::MultipleAccounts => "multiple accounts",
            ContentType::AccountOverview => "account overview",
            ContentType::StoreDraft => "store draft",
            ContentType::ChangePassword => "change password",
            ContentType::Notification => "notification",
            ContentType::ChangeTheme => "change theme",
            ContentType::Report => "report",
            ContentType::Moment => "moment",
            ContentType::DeletePost => "delete post",
            ContentType::PostInsights => "post insights",
            ContentType::SavedPosts => "saved posts",
            ContentType::EditProfile => "edit profile",
            ContentType::EditPost => "edit post",
            ContentType::BlockUnblockUser => "block/unblock user",
            ContentType::HideUnhideUsers => "hide/unhide users",
            ContentType::Messages => "messages",
            ContentType::Discovery => "discovery",
            ContentType::EditingASsup => "editing a ssup",
            ContentType::InteractiveSnip => "interactive snip",
            ContentType::Flix => "flix",
            ContentType::CreateAPlaylist => "create a playlist",
            ContentType::EditingAFlix => "editing a flix",
            ContentType::EditingASnip => "editing a snip",
        }
    }

    /// Exact (case-insensitive) tag lookup.
    pub fn from_tag(s: &str) -> Option<ContentType> {
        let lower = s.to_lowercase();
        Self::ALL.iter().copied().find(|ct| ct.as_tag() == lower)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor;
        impl Visitor<'_> for TagVisitor {
            type Value = ContentType;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a canonical content type tag")
            }
            fn visit_str<E: de::Error>(self, v: &str) -> Result<ContentType, E> {
                ContentType::from_tag(v)
                    .ok_or_else(|| E::custom(format!("unknown content type: {v}")))
            }
        }
        deserializer.deserialize_str(TagVisitor)
    }
}

/// Canonical tag for a platform trouble category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueType {
    Login,
    Upload,
    Notification,
    Privacy,
    Account,
    Payment,
    Content,
    Technical,
    App,
    Video,
    Audio,
    Connection,
    Quality,
    Blocking,
    Reporting,
    Messaging,
    Password,
    Theme,
}

impl IssueType {
    /// All issue types, in declaration order. Declaration order matters for
    /// the FAQ shorthand parse and the secondary keyword scan.
    pub const ALL: &'static [IssueType] = &[
        IssueType::Login,
        IssueType::Upload,
        IssueType::Notification,
        IssueType::Privacy,
        IssueType::Account,
        IssueType::Payment,
        IssueType::Content,
        IssueType::Technical,
        IssueType::App,
        IssueType::Video,
        IssueType::Audio,
        IssueType::Connection,
        IssueType::Quality,
        IssueType::Blocking,
        IssueType::Reporting,
        IssueType::Messaging,
        IssueType::Password,
        IssueType::Theme,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            IssueType::Login => "login",
            IssueType::Upload => "upload",
            IssueType::Notification => "notification",
            IssueType::Privacy => "privacy",
            IssueType::Account => "account",
            IssueType::Payment => "payment",
            IssueType::Content => "content",
            IssueType::Technical => "technical",
            IssueType::App => "app",
            IssueType::Video => "video",
            IssueType::Audio => "audio",
            IssueType::Connection => "connection",
            IssueType::Quality => "quality",
            IssueType::Blocking => "blocking",
            IssueType::Reporting => "reporting",
            IssueType::Messaging => "messaging",
            IssueType::Password => "password",
            IssueType::Theme => "theme",
        }
    }

    pub fn from_tag(s: &str) -> Option<IssueType> {
        let lower = s.to_lowercase();
        Self::ALL.iter().copied().find(|it| it.as_tag() == lower)
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Canonical tag for a navigable app area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformSection {
    Profile,
    Messages,
    Settings,
    Shot,
    Snip,
    Ssup,
    Collab,
    Discovery,
    Saved,
    Drafts,
    Notifications,
    Feedback,
    Moments,
    Playlist,
    Flix,
    Account,
    Insights,
    Themes,
    Blocking,
    Hiding,
    Reporting,
    Editing,
    Interactive,
}

impl PlatformSection {
    /// All sections, in declaration order. The router scans this in order,
    /// first substring hit wins.
    pub const ALL: &'static [PlatformSection] = &[
        PlatformSection::Profile,
        PlatformSection::Messages,
        PlatformSection::Settings,
        PlatformSection::Shot,
        PlatformSection::Snip,
        PlatformSection::Ssup,
        PlatformSection::Collab,
        PlatformSection::Discovery,
        PlatformSection::Saved,
        PlatformSection::Drafts,
        PlatformSection::Notifications,
        PlatformSection::Feedback,
        PlatformSection::Moments,
        PlatformSection::Playlist,
        PlatformSection::Flix,
        PlatformSection::Account,
        PlatformSection::Insights,
        PlatformSection::Themes,
        PlatformSection::Blocking,
        PlatformSection::Hiding,
        PlatformSection::Reporting,
        PlatformSection::Editing,
        PlatformSection::Interactive,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            PlatformSection::Profile => "profile",
            PlatformSection::Messages => "messages",
            PlatformSection::Settings => "settings",
            PlatformSection::Shot => "shot",
            PlatformSection::Snip => "snip",
            PlatformSection::Ssup => "ssup",
            PlatformSection::Collab => "collab",
            PlatformSection::Discovery => "discovery",
            PlatformSection::Saved => "saved",
            PlatformSection::Drafts => "drafts",
            PlatformSection::Notifications => "notifications",
            PlatformSection::Feedback => "feedback",
            PlatformSection::Moments => "moments",
            PlatformSection::Playlist => "playlist",
            PlatformSection::Flix => "flix",
            PlatformSection::Account => "account",
            PlatformSection::Insights => "insights",
            PlatformSection::Themes => "themes",
            PlatformSection::Blocking => "blocking",
            PlatformSection::Hiding => "hiding",
            PlatformSection::Reporting => "reporting",
            PlatformSection::Editing => "editing",
            PlatformSection::Interactive => "interactive",
        }
    }
}

impl fmt::Display for PlatformSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Synonym table: free-text phrase → canonical content type. Many-to-one.
///
/// Declaration order is irrelevant for detection (the detector sorts by
/// descending phrase length), so entries are grouped by target tag for
/// readability.
pub const SYNONYMS: &[(&str, ContentType)] = &[
    // shot
    ("photo", ContentType::Shot),
    ("picture", ContentType::Shot),
    ("image", ContentType::Shot),
    ("pic", ContentType::Shot),
    ("pics", ContentType::Shot),
    ("photograph", ContentType::Shot),
    ("snapshot", ContentType::Shot),
    ("photography", ContentType::Shot),
    ("pictures", ContentType::Shot),
    ("shot photo", ContentType::Shot),
    ("create shot", ContentType::Shot),
    ("make shot", ContentType::Shot),
    ("how to shot", ContentType::Shot),
    ("how to create shot", ContentType::Shot),
    ("how to make shot", ContentType::Shot),
    ("how to create a shot", ContentType::Shot),
    ("how to make a shot", ContentType::Shot),
    // snip (interactive excluded, see below)
    ("video", ContentType::Snip),
    ("clip", ContentType::Snip),
    ("reel", ContentType::Snip),
    ("short", ContentType::Snip),
    ("shorts", ContentType::Snip),
    ("reels", ContentType::Snip),
    ("videos", ContentType::Snip),
    ("short video", ContentType::Snip),
    ("short-form video", ContentType::Snip),
    ("tiktok-style", ContentType::Snip),
    ("create snip", ContentType::Snip),
    ("make snip", ContentType::Snip),
    ("how to snip", ContentType::Snip),
    ("how to create snip", ContentType::Snip),
    ("how to make snip", ContentType::Snip),
    ("how to create a snip", ContentType::Snip),
    ("how to make a snip", ContentType::Snip),
    // ssup
    ("story", ContentType::Ssup),
    ("stories", ContentType::Ssup),
    ("temporary", ContentType::Ssup),
    ("24 hour", ContentType::Ssup),
    ("vanishing", ContentType::Ssup),
    ("disappearing", ContentType::Ssup),
    ("temporary post", ContentType::Ssup),
    ("daily update", ContentType::Ssup),
    ("status update", ContentType::Ssup),
    ("instagram-style story", ContentType::Ssup),
    ("status", ContentType::Ssup),
    ("create ssup", ContentType::Ssup),
    ("make ssup", ContentType::Ssup),
    ("how to ssup", ContentType::Ssup),
    ("how to create ssup", ContentType::Ssup),
    ("how to make ssup", ContentType::Ssup),
    ("how to create a ssup", ContentType::Ssup),
    ("how to make a ssup", ContentType::Ssup),
    // collab
    ("collaboration", ContentType::Collab),
    ("together", ContentType::Collab),
    ("partner", ContentType::Collab),
    ("joint", ContentType::Collab),
    ("group", ContentType::Collab),
    ("duo", ContentType::Collab),
    ("team", ContentType::Collab),
    ("cooperative", ContentType::Collab),
    ("with friend", ContentType::Collab),
    ("with someone", ContentType::Collab),
    ("create collab", ContentType::Collab),
    ("make collab", ContentType::Collab),
    ("how to collab", ContentType::Collab),
    ("how to create collab", ContentType::Collab),
    ("how to make collab", ContentType::Collab),
    ("how to create a collab", ContentType::Collab),
    ("how to make a collab", ContentType::Collab),
    ("how to collaborate", ContentType::Collab),
    // flix
    ("create flix", ContentType::Flix),
    ("flix video", ContentType::Flix),
    ("long video", ContentType::Flix),
    ("episode", ContentType::Flix),
    ("make flix", ContentType::Flix),
    ("how to flix", ContentType::Flix),
    ("how to create flix", ContentType::Flix),
    ("how to make flix", ContentType::Flix),
    ("how to create a flix", ContentType::Flix),
    ("how to make a flix", ContentType::Flix),
    // editing a shot
    ("edit shot", ContentType::EditingAShot),
    ("modify shot", ContentType::EditingAShot),
    ("editing shot", ContentType::EditingAShot),
    ("how to edit shot", ContentType::EditingAShot),
    ("how to edit a shot", ContentType::EditingAShot),
    ("how to modify shot", ContentType::EditingAShot),
    ("how to modify a shot", ContentType::EditingAShot),
    // editing a snip
    ("edit snip", ContentType::EditingASnip),
    ("modify snip", ContentType::EditingASnip),
    ("change snip", ContentType::EditingASnip),
    ("editing snip", ContentType::EditingASnip),
    ("how to edit snip", ContentType::EditingASnip),
    ("how to edit a snip", ContentType::EditingASnip),
    ("how to modify snip", ContentType::EditingASnip),
    ("how to modify a snip", ContentType::EditingASnip),
    ("how to change snip", ContentType::EditingASnip),
    ("how to change a snip", ContentType::EditingASnip),
    // editing a ssup
    ("edit ssup", ContentType::EditingASsup),
    ("modify ssup", ContentType::EditingASsup),
    ("change ssup", ContentType::EditingASsup),
    ("editing ssup", ContentType::EditingASsup),
    ("how to edit ssup", ContentType::EditingASsup),
    ("how to edit a ssup", ContentType::EditingASsup),
    ("how to modify ssup", ContentType::EditingASsup),
    ("how to modify a ssup", ContentType::EditingASsup),
    ("how to change ssup", ContentType::EditingASsup),
    ("how to change a ssup", ContentType::EditingASsup),
    // editing a flix
    ("edit flix", ContentType::EditingAFlix),
    ("modify flix", ContentType::EditingAFlix),
    ("change flix", ContentType::EditingAFlix),
    ("editing flix", ContentType::EditingAFlix),
    ("how to edit flix", ContentType::EditingAFlix),
    ("how to edit a flix", ContentType::EditingAFlix),
    ("how to modify flix", ContentType::EditingAFlix),
    ("how to modify a flix", ContentType::EditingAFlix),
    ("how to change flix", ContentType::EditingAFlix),
    ("how to change a flix", ContentType::EditingAFlix),
    // interactive snip
    ("interactive video", ContentType::InteractiveSnip),
    ("interactive", ContentType::InteractiveSnip),
    ("add button", ContentType::InteractiveSnip),
    ("clickable", ContentType::InteractiveSnip),
    ("interactive snip video", ContentType::InteractiveSnip),
    ("create interactive", ContentType::InteractiveSnip),
    ("make interactive", ContentType::InteractiveSnip),
    ("create interactive snip", ContentType::InteractiveSnip),
    ("make interactive snip", ContentType::InteractiveSnip),
    ("how to interactive", ContentType::InteractiveSnip),
    ("how to interactive snip", ContentType::InteractiveSnip),
    ("how to create interactive", ContentType::InteractiveSnip),
    ("how to make interactive", ContentType::InteractiveSnip),
    ("how to create interactive snip", ContentType::InteractiveSnip),
    ("how to make interactive snip", ContentType::InteractiveSnip),
    ("how to create an interactive snip", ContentType::InteractiveSnip),
    ("how to make an interactive snip", ContentType::InteractiveSnip),
    // invite friends
    ("invite friend", ContentType::InviteFriends),
    ("add friend", ContentType::InviteFriends),
    ("add friends", ContentType::InviteFriends),
    ("how to invite friend", ContentType::InviteFriends),
    ("how to invite friends", ContentType::InviteFriends),
    ("how to add friend", ContentType::InviteFriends),
    ("how to add friends", ContentType::InviteFriends),
    ("how do i invite my friends", ContentType::InviteFriends),
    ("how do i share bigshorts", ContentType::InviteFriends),
    ("how to invite friends on bigshorts", ContentType::InviteFriends),
    // feedback
    ("give feedback", ContentType::Feedback),
    ("submit feedback", ContentType::Feedback),
    ("suggestion", ContentType::Feedback),
    ("how to give feedback", ContentType::Feedback),
    ("how to submit feedback", ContentType::Feedback),
    ("how to provide feedback", ContentType::Feedback),
    // multiple accounts
    ("multiple account", ContentType::MultipleAccounts),
    ("switch account", ContentType::MultipleAccounts),
    ("add account", ContentType::MultipleAccounts),
    ("how to add account", ContentType::MultipleAccounts),
    ("how to add multiple accounts", ContentType::MultipleAccounts),
    ("how to switch account", ContentType::MultipleAccounts),
    ("how to switch accounts", ContentType::MultipleAccounts),
    ("how to manage multiple accounts", ContentType::MultipleAccounts),
    ("multiple profile", ContentType::MultipleAccounts),
    ("multiple profiles", ContentType::MultipleAccounts),
    ("switch profile", ContentType::MultipleAccounts),
    ("second account", ContentType::MultipleAccounts),
    // account overview
    ("account stats", ContentType::AccountOverview),
    ("overview", ContentType::AccountOverview),
    ("analytics", ContentType::AccountOverview),
    ("how to view account stats", ContentType::AccountOverview),
    ("how to check analytics", ContentType::AccountOverview),
    ("how to see account overview", ContentType::AccountOverview),
    // store draft
    ("save draft", ContentType::StoreDraft),
    ("draft", ContentType::StoreDraft),
    ("save content", ContentType::StoreDraft),
    ("how to save draft", ContentType::StoreDraft),
    ("how to store draft", ContentType::StoreDraft),
    ("how to save content", ContentType::StoreDraft),
    // change password
    ("password", ContentType::ChangePassword),
    ("update password", ContentType::ChangePassword),
    ("new password", ContentType::ChangePassword),
    ("how to change password", ContentType::ChangePassword),
    ("how to update password", ContentType::ChangePassword),
    ("how to reset password", ContentType::ChangePassword),
    // notification
    ("notifications", ContentType::Notification),
    ("alerts", ContentType::Notification),
    ("notice", ContentType::Notification),
    ("how to check notifications", ContentType::Notification),
    ("how to view notifications", ContentType::Notification),
    ("how to manage notifications", ContentType::Notification),
    // change theme
    ("theme", ContentType::ChangeTheme),
    ("dark mode", ContentType::ChangeTheme),
    ("light mode", ContentType::ChangeTheme),
    ("appearance", ContentType::ChangeTheme),
    ("how to change theme", ContentType::ChangeTheme),
    ("how to switch theme", ContentType::ChangeTheme),
    ("how to change appearance", ContentType::ChangeTheme),
    ("how to change app colour", ContentType::ChangeTheme),
    ("app colour", ContentType::ChangeTheme),
    ("app color", ContentType::ChangeTheme),
    // report
    ("flag content", ContentType::Report),
    ("report content", ContentType::Report),
    ("report user", ContentType::Report),
    ("abuse", ContentType::Report),
    ("how to report", ContentType::Report),
    ("how to flag content", ContentType::Report),
    ("how to report content", ContentType::Report),
    ("how to report a user", ContentType::Report),
    // moment
    ("create moment", ContentType::Moment),
    ("moments", ContentType::Moment),
    ("memory", ContentType::Moment),
    ("memories", ContentType::Moment),
    ("highlight", ContentType::Moment),
    ("highlights", ContentType::Moment),
    ("story highlight", ContentType::Moment),
    ("story highlights", ContentType::Moment),
    ("ssup highlight", ContentType::Moment),
    ("ssup highlights", ContentType::Moment),
    ("save story", ContentType::Moment),
    ("save ssup", ContentType::Moment),
    ("save stories", ContentType::Moment),
    ("save ssups", ContentType::Moment),
    ("archived story", ContentType::Moment),
    ("archived stories", ContentType::Moment),
    ("archived ssup", ContentType::Moment),
    ("archived ssups", ContentType::Moment),
    ("permanent story", ContentType::Moment),
    ("permanent ssup", ContentType::Moment),
    ("how to create moment", ContentType::Moment),
    ("how to make moment", ContentType::Moment),
    ("how to create a moment", ContentType::Moment),
    ("how to make a moment", ContentType::Moment),
    ("how to save story", ContentType::Moment),
    ("how to save ssup", ContentType::Moment),
    ("how to create highlight", ContentType::Moment),
    ("how to make highlight", ContentType::Moment),
    // delete post
    ("remove post", ContentType::DeletePost),
    ("erase post", ContentType::DeletePost),
    ("delete content", ContentType::DeletePost),
    ("how to delete post", ContentType::DeletePost),
    ("how to remove post", ContentType::DeletePost),
    ("how to delete a post", ContentType::DeletePost),
    ("how to remove a post", ContentType::DeletePost),
    // post insights
    ("insights", ContentType::PostInsights),
    ("stats", ContentType::PostInsights),
    ("performance", ContentType::PostInsights),
    ("how to view insights", ContentType::PostInsights),
    ("how to check stats", ContentType::PostInsights),
    ("how to see post insights", ContentType::PostInsights),
    ("how to check post performance", ContentType::PostInsights),
    // saved posts
    ("bookmark", ContentType::SavedPosts),
    ("save post", ContentType::SavedPosts),
    ("saved content", ContentType::SavedPosts),
    ("how to save post", ContentType::SavedPosts),
    ("how to bookmark", ContentType::SavedPosts),
    ("how to save posts", ContentType::SavedPosts),
    ("how to bookmark posts", ContentType::SavedPosts),
    ("how to view saved posts", ContentType::SavedPosts),
    // edit profile
    ("profile", ContentType::EditProfile),
    ("update profile", ContentType::EditProfile),
    ("change profile", ContentType::EditProfile),
    ("how to edit profile", ContentType::EditProfile),
    ("how to update profile", ContentType::EditProfile),
    ("how to change profile", ContentType::EditProfile),
    // edit post
    ("update post", ContentType::EditPost),
    ("modify post", ContentType::EditPost),
    ("change post", ContentType::EditPost),
    ("how to edit post", ContentType::EditPost),
    ("how to update post", ContentType::EditPost),
    ("how to modify post", ContentType::EditPost),
    ("how to change post", ContentType::EditPost),
    // block/unblock user
    ("block", ContentType::BlockUnblockUser),
    ("unblock", ContentType::BlockUnblockUser),
    ("restrict user", ContentType::BlockUnblockUser),
    ("how to block", ContentType::BlockUnblockUser),
    ("how to unblock", ContentType::BlockUnblockUser),
    ("how to block user", ContentType::BlockUnblockUser),
    ("how to unblock user", ContentType::BlockUnblockUser),
    ("how to block a user", ContentType::BlockUnblockUser),
    ("how to unblock a user", ContentType::BlockUnblockUser),
    // hide/unhide users
    ("hide user", ContentType::HideUnhideUsers),
    ("unhide user", ContentType::HideUnhideUsers),
    ("hide content", ContentType::HideUnhideUsers),
    ("how to hide", ContentType::HideUnhideUsers),
    ("how to unhide", ContentType::HideUnhideUsers),
    ("how to hide user", ContentType::HideUnhideUsers),
    ("how to unhide user", ContentType::HideUnhideUsers),
    ("how to hide a user", ContentType::HideUnhideUsers),
    ("how to unhide a user", ContentType::HideUnhideUsers),
    // messages
    ("message", ContentType::Messages),
    ("dm", ContentType::Messages),
    ("direct message", ContentType::Messages),
    ("chat", ContentType::Messages),
    ("how to message", ContentType::Messages),
    ("how to send message", ContentType::Messages),
    ("how to send messages", ContentType::Messages),
    ("how to dm", ContentType::Messages),
    ("how to direct message", ContentType::Messages),
    ("how to chat", ContentType::Messages),
    // discovery
    ("discover", ContentType::Discovery),
    ("explore", ContentType::Discovery),
    ("find content", ContentType::Discovery),
    ("search", ContentType::Discovery),
    ("how to discover", ContentType::Discovery),
    ("how to explore", ContentType::Discovery),
    ("how to find content", ContentType::Discovery),
    ("how to search", ContentType::Discovery),
    // create a playlist
    ("playlist", ContentType::CreateAPlaylist),
    ("series", ContentType::CreateAPlaylist),
    ("collection", ContentType::CreateAPlaylist),
    ("create playlist", ContentType::CreateAPlaylist),
    ("make playlist", ContentType::CreateAPlaylist),
    ("how to playlist", ContentType::CreateAPlaylist),
    ("how to create playlist", ContentType::CreateAPlaylist),
    ("how to make playlist", ContentType::CreateAPlaylist),
    ("how to create a playlist", ContentType::CreateAPlaylist),
    ("how to make a playlist", ContentType::CreateAPlaylist),
];

/// Secondary issue-keyword groups, scanned in declaration order after the
/// direct tag containment check fails. First group with a hit wins — this is
/// deliberately NOT length-sorted (pinned by a regression test).
pub const ISSUE_KEYWORDS: &[(IssueType, &[&str])] = &[
    (
        IssueType::Login,
        &["sign in", "can't log in", "login failed", "authentication", "account access"],
    ),
    (
        IssueType::Upload,
        &["can't upload", "upload failed", "posting problem", "sharing issue", "file problem"],
    ),
    (
        IssueType::Notification,
        &["alerts", "not getting notifications", "notification settings", "push notifications"],
    ),
    (
        IssueType::Privacy,
        &["who can see", "visibility", "hidden", "public", "private", "settings"],
    ),
    (
        IssueType::Account,
        &["profile", "username", "email", "verification", "account locked"],
    ),
    (
        IssueType::Payment,
        &["billing", "purchase", "subscription", "transaction", "payment failed"],
    ),
    (
        IssueType::Technical,
        &["app crash", "freezing", "not loading", "error message", "bug"],
    ),
    (
        IssueType::Video,
        &["playback", "buffering", "video quality", "can't play videos"],
    ),
    (
        IssueType::Audio,
        &["sound", "volume", "no audio", "can't hear", "music"],
    ),
    (
        IssueType::Connection,
        &["offline", "internet", "wifi", "data", "connectivity"],
    ),
    (
        IssueType::Password,
        &["forgot password", "reset password", "change password", "password reset"],
    ),
    (
        IssueType::Theme,
        &["dark mode", "light mode", "appearance", "display", "color scheme"],
    ),
];

/// Denylist for the off-topic gate. Any hit rejects the query outright,
/// before the allowlist is consulted.
pub const OFF_TOPIC_KEYWORDS: &[&str] = &[
    "politics", "news", "weather", "sports", "dating", "games", "gaming",
    "stock", "investment", "medical", "health", "drugs", "violence",
    "who is", "what is", "how many", "where is", "when did", "why does",
    "history", "science", "math", "religion", "war", "climate", "economy",
    "celebrity", "actor", "singer", "movie", "book", "covid", "virus",
    "recipe", "food", "diet", "exercise", "workout", "travel", "vacation",
    "website", "president", "election", "government", "tax", "taxes",
    "credit", "loan", "insurance", "legal", "law", "crime", "police",
];

/// Brand/action words that count as in-domain on top of the three tag
/// enumerations.
pub const ON_TOPIC_EXTRAS: &[&str] = &[
    "bigshorts", "platform", "app", "create", "upload", "share", "post",
];

/// Exact-match greeting phrases (compared after trim + lowercase).
pub const GREETINGS: &[&str] = &[
    "hello", "hi", "hey", "greetings", "howdy", "wassup", "whats up", "yo",
    "sup", "hiya", "heya", "hola", "bonjour", "ciao", "g'day", "good morning",
    "good afternoon", "good evening", "good day", "evening", "morning",
    "afternoon", "hello there", "hi there", "hey there", "what's happening",
    "what's good", "how are you", "how's it going", "how are things",
    "how's everything", "what's new", "what's up", "yo yo", "aloha",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for ct in ContentType::ALL {
            assert_eq!(ContentType::from_tag(ct.as_tag()), Some(*ct));
        }
        for it in IssueType::ALL {
            assert_eq!(IssueType::from_tag(it.as_tag()), Some(*it));
        }
    }

    #[test]
    fn from_tag_is_case_insensitive() {
        assert_eq!(ContentType::from_tag("SNIP"), Some(ContentType::Snip));
        assert_eq!(
            ContentType::from_tag("Editing a Flix"),
            Some(ContentType::EditingAFlix)
        );
        assert_eq!(ContentType::from_tag("selfie"), None);
    }

    #[test]
    fn synonym_keys_are_lowercase() {
        for (phrase, _) in SYNONYMS {
            assert_eq!(*phrase, phrase.to_lowercase(), "phrase must be lowercase");
        }
    }

    #[test]
    fn content_type_serde_uses_canonical_tag() {
        let json = serde_json::to_string(&ContentType::InteractiveSnip).unwrap();
        assert_eq!(json, "\"interactive snip\"");
        let back: ContentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContentType::InteractiveSnip);
    }

    // Pins the declaration order the secondary issue scan depends on:
    // "profile" must resolve to account via the account group, because
    // privacy is declared before account but does not list "profile".
    #[test]
    fn issue_keyword_declaration_order_is_stable() {
        let first = ISSUE_KEYWORDS
            .iter()
            .find(|(_, kws)| kws.contains(&"profile"))
            .map(|(it, _)| *it);
        assert_eq!(first, Some(IssueType::Account));
        assert_eq!(ISSUE_KEYWORDS[0].0, IssueType::Login);
        assert_eq!(ISSUE_KEYWORDS[3].0, IssueType::Privacy);
    }
}
