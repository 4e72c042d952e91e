//! Canned-content repository: guides, explanations, solutions, trending.
//!
//! All lookups are total over the taxonomy enums or return `Option`; a
//! missing key is a normal not-found outcome, never an error. The router
//! composes these into [`BotResponse`] values.

use serde::{Deserialize, Serialize};

use crate::response::{ButtonsContent, Faq, GuideContent, GuideStep, SuggestionButton};
use crate::taxonomy::{ContentType, IssueType, PlatformSection};

mod guides;

// ── Creation guides ──

/// Build the guide payload for a canonical content type.
///
/// Every tag except `create a playlist` has a guide in the corpus; the
/// playlist tag is accepted by detection but ships no steps yet, so its
/// lookup yields the per-type not-found payload.
pub fn creation_guide(tag: ContentType) -> GuideContent {
    match guides::guide_for(tag) {
        Some(guide) => GuideContent {
            title: guide.title.to_string(),
            steps: guide
                .steps
                .iter()
                .map(|s| GuideStep {
                    step: s.step,
                    description: s.description.to_string(),
                    image_path: s.image_path.to_string(),
                    tips: s.tips.map(str::to_string),
                })
                .collect(),
        },
        None => GuideContent {
            title: format!("Guide for {} not found", tag.as_tag()),
            steps: Vec::new(),
        },
    }
}

/// Guide lookup from free text. Unrecognized input gets the generic
/// not-found payload rather than an error.
pub fn creation_guide_for_text(text: &str) -> GuideContent {
    match crate::detect::standardize(text) {
        crate::detect::Standardized::Tag(tag) => creation_guide(tag),
        crate::detect::Standardized::Raw(_) => GuideContent {
            title: "Content Type Not Found".to_string(),
            steps: Vec::new(),
        },
    }
}

// ── Issue solutions ──

/// Canned solution text for an issue type. `Payment` is recognized by the
/// classifier but has no solution text in the corpus.
pub fn solution_for(issue: IssueType) -> Option<&'static str> {
    match issue {
        IssueType::Login => Some("If you're having trouble logging in:\n1. Check your username/password\n2. Clear Application cache\n3. Reset password if needed"),
        IssueType::Upload => Some("For upload issues:\n1. Check file size (max 20MB)\n2. Ensure supported format\n3. Check internet connection"),
        IssueType::Notification => Some("For notification problems:\n1. Check app permissions\n2. Verify notification settings\n3. Restart the app"),
        IssueType::Privacy => Some("To adjust privacy settings:\n1. Go to Settings > Privacy\n2. Choose who can see your content\n3. Save changes"),
        IssueType::Account => Some("For account issues:\n1. Verify your email is confirmed\n2. Check if your account meets community guidelines\n3. Contact support if problems persist"),
        IssueType::Payment => None,
        IssueType::Content => Some("For content issues:\n1. Check your internet connection\n2. Ensure content meets guidelines\n3. Try uploading again after restarting the app"),
        IssueType::Technical => Some("For technical issues:\n1. Update to the latest app version\n2. Restart your device\n3. Clear Application cache\n4. Reinstall the app if problems persist"),
        IssueType::App => Some("For app performance issues:\n1. Close background apps\n2. Free up device storage\n3. Update to the latest version\n4. Reinstall the app if problems persist"),
        IssueType::Video => Some("For video playback issues:\n1. Check your internet connection\n2. Clear Application cache\n3. Reduce video quality in Settings > Data Usage"),
        IssueType::Audio => Some("For audio issues:\n1. Check device volume\n2. Toggle device mute switch\n3. Check if headphones are properly connected\n4. Restart the app"),
        IssueType::Connection => Some("For connection issues:\n1. Switch between WiFi and mobile data\n2. Toggle airplane mode\n3. Restart your router\n4. Check if Bigshorts servers are down"),
        IssueType::Quality => Some("For content quality issues:\n1. Upload original high-quality files\n2. Check internet bandwidth\n3. Wait for processing to complete\n4. Adjust quality settings in the app"),
        IssueType::Blocking => Some("For blocking issues:\n1. Go to Me > hamburger menu > Blocked Users\n2. Find the user you want to unblock\n3. Tap Unblock\n4. For new blocks, go to the user's profile and select Block"),
        IssueType::Reporting => Some("For reporting issues:\n1. Find the content you want to report\n2. Tap the three dots\n3. Select Report\n4. Choose the appropriate category\n5. Add details and submit"),
        IssueType::Messaging => Some("For messaging issues:\n1. Check your internet connection\n2. Verify the user hasn't blocked you\n3. Clear chat history\n4. Restart the app"),
        IssueType::Password => Some("For password issues:\n1. Use the Forgot Password feature\n2. Check your email for reset instructions\n3. Create a strong new password\n4. Update password in all logged-in devices"),
        IssueType::Theme => Some("For theme issues:\n1. Go to Me > hamburger menu > App Theme Preference\n2. Select a different theme\n3. If theme isn't applying, restart the app\n4. Clear Application cache if problems persist"),
    }
}

pub const ISSUE_NOT_FOUND: &str = "I don't have a solution for that issue. Try asking about 'login', 'upload', 'notification', 'privacy', 'account', 'content', 'technical', 'app', 'video', 'audio', 'connection', 'quality', 'blocking', 'reporting', 'messaging', 'password', or 'theme'.";

// ── Platform section explanations ──

/// Short explanation of a platform section, phrased as an offer to show
/// the matching guide. Sections without an explanation fall through to
/// [`SECTION_NOT_FOUND`].
pub fn section_explanation(section: PlatformSection) -> Option<&'static str> {
    match section {
        PlatformSection::Shot => Some("SHOT is our platform's photo sharing feature. Would you like me to show you how to create a SHOT on our platform?"),
        PlatformSection::Snip => Some("SNIP is our platform's short video feature (similar to reels). Would you like me to show you how to create a SNIP on our platform?"),
        PlatformSection::Ssup => Some("SSUP is our platform's stories feature for temporary 24-hour content. Would you like me to show you how to create a SSUP on our platform?"),
        PlatformSection::Collab => Some("Our collaboration features let you create content with other users. Would you like me to show you how to use collaboration features on our platform?"),
        PlatformSection::Discovery => Some("The Discovery page helps you find trending content and creators. Would you like me to show you how to navigate the Discovery page?"),
        PlatformSection::Saved => Some("The Saved section lets you access content you've bookmarked. Would you like me to show you how to view your saved posts?"),
        PlatformSection::Drafts => Some("The Drafts section contains content you've started but haven't published yet. Would you like me to show you how to manage your drafts?"),
        PlatformSection::Notifications => Some("The Notifications section shows all activity related to your account. Would you like me to show you how to check your notifications?"),
        PlatformSection::Feedback => Some("You can provide feedback about the platform to help us improve. Would you like me to show you how to submit feedback?"),
        PlatformSection::Moments => Some("Moments are collections of your archived content. Would you like me to show you how to create and manage Moments?"),
        PlatformSection::Playlist => Some("Playlists allow you to organize multiple FLIX videos. Would you like me to show you how to create a playlist?"),
        PlatformSection::Flix => Some("FLIX is our platform's longer video format. Would you like me to show you how to create a FLIX?"),
        PlatformSection::Account => Some("Account settings let you manage your profile details. Would you like me to show you how to access account settings?"),
        PlatformSection::Insights => Some("Insights provide analytics about your content performance. Would you like me to show you how to view your insights?"),
        PlatformSection::Themes => Some("You can customize the app's appearance with different themes. Would you like me to show you how to change themes?"),
        PlatformSection::Blocking => Some("Blocking prevents specific users from interacting with you. Would you like me to show you how to block or unblock users?"),
        PlatformSection::Hiding => Some("Hiding lets you remove specific users' content from your feed. Would you like me to show you how to hide or unhide users?"),
        PlatformSection::Reporting => Some("Reporting helps keep the community safe by flagging inappropriate content. Would you like me to show you how to report content?"),
        PlatformSection::Editing => Some("Our platform offers various editing tools for your content. Would you like me to show you specific editing features?"),
        PlatformSection::Interactive => Some("Interactive elements make your SNIP videos more engaging. Would you like me to show you how to create interactive SNIPs?"),
        PlatformSection::Profile | PlatformSection::Messages | PlatformSection::Settings => None,
    }
}

pub const SECTION_NOT_FOUND: &str = "I don't have information about that section. Perhaps you're interested in creating content? Try asking about 'SHOT', 'SNIP', 'SSUP', 'FLIX', or 'collab', or other platform features like 'editing', 'moments', or 'playlists'.";

// ── Content type explanations ──

/// One-paragraph explanation of a content type. Total over the enum.
pub fn content_explanation(tag: ContentType) -> &'static str {
    match tag {
        ContentType::Shot => "SHOT is our platform's photo content format. It lets you share pictures and photo collections with your followers.",
        ContentType::Snip => "SNIP is our platform's short-form video content, similar to reels on other platforms. It's perfect for creating engaging short videos.",
        ContentType::Ssup => "SSUP is our platform's stories feature - temporary content that disappears after 24 hours, perfect for quick updates and daily moments.",
        ContentType::Collab => "Collaborative content allows you to create content together with other creators on our platform.",
        ContentType::EditingAShot => "Our platform offers powerful tools to edit your SHOT photos, including filters, effects, adjustments, and more.",
        ContentType::InviteFriends => "You can easily invite friends to join you on Bigshorts and grow your network.",
        ContentType::Feedback => "We value your input! You can submit feedback about the platform to help us improve.",
        ContentType::MultipleAccounts => "Bigshorts allows you to manage multiple accounts and easily switch between them.",
        ContentType::AccountOverview => "Account overview provides analytics and statistics about your Bigshorts performance.",
        ContentType::StoreDraft => "The draft feature lets you save content you're working on to finish and publish later.",
        ContentType::ChangePassword => "You can easily update your password to keep your account secure.",
        ContentType::Notification => "Notifications keep you updated about activities related to your account and content.",
        ContentType::ChangeTheme => "Personalize your Bigshorts experience by choosing from different app themes.",
        ContentType::Report => "The reporting feature helps maintain community standards by flagging inappropriate content.",
        ContentType::Moment => "Moments are collections of your archived SSUPs (stories) that you can showcase permanently on your profile - similar to Story Highlights on other platforms. They let you group and save your temporary SSUP content into themed collections that won't disappear after 24 hours.",
        ContentType::DeletePost => "You can remove any of your content from the platform if you no longer want it visible.",
        ContentType::PostInsights => "Insights provide detailed analytics about how your individual posts are performing.",
        ContentType::SavedPosts => "You can bookmark content you like to easily find and revisit it later.",
        ContentType::EditProfile => "Profile editing lets you customize your bio, avatar, and other public information.",
        ContentType::EditPost => "You can modify your existing posts to update captions, tags, or other details.",
        ContentType::BlockUnblockUser => "Blocking prevents specific users from interacting with you or seeing your content.",
        ContentType::HideUnhideUsers => "Hiding users removes their content from your feed without blocking them completely.",
        ContentType::Messages => "Our direct messaging system lets you chat privately with other Bigshorts users.",
        ContentType::Discovery => "The discovery page helps you find new content, creators, and trending topics.",
        ContentType::EditingASsup => "You can enhance your SSUP stories with various editing tools, effects, and interactive elements.",
        ContentType::InteractiveSnip => "Interactive SNIPs allow viewers to engage with your videos through buttons and other clickable elements.",
        ContentType::Flix => "FLIX is our platform's longer-form video format, perfect for more in-depth content.",
        ContentType::CreateAPlaylist => "Playlists let you organize multiple FLIX videos into collections for your audience.",
        ContentType::EditingAFlix => "Our FLIX editing tools help you create professional-quality longer videos.",
        ContentType::EditingASnip => "SNIP editing features let you create polished, engaging short-form videos.",
    }
}

/// Verb-phrase form of a content type, used in yes/no guide prompts
/// ("Would you like to see the step-by-step guide to {phrase}?").
pub fn natural_phrasing(tag: ContentType) -> &'static str {
    match tag {
        ContentType::Shot => "create a SHOT",
        ContentType::Snip => "create a SNIP",
        ContentType::Ssup => "create a SSUP",
        ContentType::Collab => "collaborate with other users",
        ContentType::EditingAShot => "edit your SHOT",
        ContentType::InviteFriends => "invite your friends",
        ContentType::Feedback => "give feedback",
        ContentType::MultipleAccounts => "manage multiple accounts",
        ContentType::AccountOverview => "check your account overview",
        ContentType::StoreDraft => "store a draft",
        ContentType::ChangePassword => "change your password",
        ContentType::Notification => "manage notifications",
        ContentType::ChangeTheme => "change the app theme",
        ContentType::Report => "report content",
        ContentType::Moment => "create a Moment",
        ContentType::DeletePost => "delete a post",
        ContentType::PostInsights => "view post insights",
        ContentType::SavedPosts => "manage saved posts",
        ContentType::EditProfile => "edit your profile",
        ContentType::EditPost => "edit a post",
        ContentType::BlockUnblockUser => "block or unblock a user",
        ContentType::HideUnhideUsers => "hide or unhide users",
        ContentType::Messages => "send messages",
        ContentType::Discovery => "discover new content",
        ContentType::EditingASsup => "edit a SSUP",
        ContentType::InteractiveSnip => "create an interactive SNIP",
        ContentType::Flix => "create a FLIX",
        ContentType::CreateAPlaylist => "create a playlist",
        ContentType::EditingAFlix => "edit a FLIX",
        ContentType::EditingASnip => "edit a SNIP",
    }
}

// ── Canned reply pools ──

pub const GREETING_RESPONSES: &[&str] = &[
    "Hello! 😀 Welcome to Bigshorts! Ready to create some awesome content today?",
    "Hey there! 😃 The Bigshorts community has been buzzing with creativity. What would you like to create today?",
    "Hi! 😊 Looking to make a SHOT, SNIP, SSUP, or Collab on Bigshorts today?",
    "Greetings! 👋 Your Bigshorts assistant is ready to help you shine on the platform!",
    "Wassup! 😎 Ready to level up your Bigshorts content? I can help with SHOT, SNIP, SSUP, or Collab!",
    "Hey! 🚀 Trending content on Bigshorts is getting millions of views today. Want to create something awesome?",
    "Hello there! 🤗 What type of Bigshorts content are you looking to create today?",
    "Hi! ✨ Your Bigshorts creative journey starts here - what can I help you with?",
    "Hey! 🔥 The best Bigshorts creators start with great ideas. Need help creating your next viral content?",
    "What's up! 🎬 Bigshorts is waiting for your amazing content. Need help getting started?",
    "Yo! 🎤 Ready to make some fire content on Bigshorts? I'm here to help!",
    "Hiya! 🎉 Bigshorts creators are killing it today! Want to join them?",
    "G'day! 🌞 Let's make your Bigshorts profile stand out with some amazing content!",
    "Good morning! ☀️ Start your day with some fresh Bigshorts content creation!",
    "Good afternoon! 🌤 Perfect time to create some Bigshorts content that will trend tonight!",
    "Good evening! 🌙 Night time is prime time for Bigshorts engagement. Need help creating content?",
    "Howdy! 🤠 Your Bigshorts creative partner is here to assist with any content needs!",
    "Bonjour! 🇫🇷 Bigshorts is going global, and I'm here to help you create content that connects!",
    "Aloha! 🌺 Bring some sunshine to Bigshorts with your next SHOT, SNIP, SSUP, or Collab!",
    "Heya! 🎨 The Bigshorts algorithm loves fresh content. What would you like to create today?",
    "Sup! 🏆 Bigshorts is all about authentic content. Need help making yours stand out?",
    "How's it going? 💡 Ready to explore some creative ideas for your next Bigshorts post?",
    "What's happening! 🚀 Bigshorts is buzzing today. Let's get your content in the mix!",
    "How are you? 💬 However you're feeling, expressing it through Bigshorts content can connect with others!",
    "Ciao! 🇮🇹 Style and substance make the best Bigshorts content. Need help with either?",
    "What's good! 🏅 The best Bigshorts creators post consistently. Ready to plan your next content piece?",
    "Hi there! 🎭 Discover what's trending on Bigshorts or create something completely new!",
    "Hey hey! 🎬 Your Bigshorts assistant is ready to help with SHOT photos, SNIP videos, SSUP stories, or Collabs!",
    "Yo yo! 🚀 Bigshorts creators are changing the game! Want to join the revolution?",
    "How are things? 🛠 Whether you need help with Bigshorts creation or troubleshooting, I've got you covered!",
];

pub const OFF_TOPIC_RESPONSES: &[&str] = &[
    "I'm your Bigshorts assistant! I can help you create amazing content (SHOT, SNIP, SSUP, Collab), troubleshoot any platform issues, or discover trending content. What would you like to explore today?",
    "Let's focus on making your Bigshorts experience amazing! I can guide you through creating content, solve platform issues, or show you what's trending. How can I enhance your Bigshorts journey today?",
    "Welcome to Bigshorts support! I'm here to help you create standout content, fix any platform issues, or discover what's trending. What aspect of Bigshorts would you like assistance with?",
    "As your Bigshorts assistant, I can help you create stunning SHOT photos, viral SNIP videos, engaging SSUP stories, or collaborative content. I can also troubleshoot any platform issues. What interests you most?",
];

pub const FALLBACK_RESPONSE: &str = "I can help you with creating content like SHOT, SNIP, SSUP, or Collab, as well as handling common platform issues. What would you like help with today?";

pub const IDEA_PREFIX: &str = "Here's an interactive idea for your Snip: ";

pub const INTERACTIVE_IDEAS: &[&str] = &[
    "Create a Snip where viewers can click a button to watch a related tutorial video.",
    "Add an interactive button that redirects viewers to a behind-the-scenes video of your content creation process.",
    "Create a Snip where viewers can choose which type of content they want to watch next (e.g., comedy, tech, beauty).",
    "Embed a button that lets viewers explore different topics you've covered in your videos.",
    "Add a button that takes viewers to a Q&A session you've recorded, where they can learn more about you.",
    "Let viewers jump to a video that reveals a surprise ending or twist to your current Snip.",
    "Create a video where viewers can choose to see a blooper reel or extra footage with the click of a button.",
    "Add an interactive button that takes viewers to a related series of videos, forming a mini-series experience.",
    "Create a Snip where viewers can click a button to vote for their favorite content style and influence what you post next.",
    "Use an interactive button to send viewers to a product review or demo video linked to your current Snip's theme.",
];

/// The fixed FAQ list attached to every greeting response.
pub fn faqs() -> Vec<Faq> {
    [
        ("How do I create a SHOT?", "shot", "How to create a shot"),
        ("How do I create a SNIP?", "snip", "How to create a snip"),
        ("How do I create a SSUP?", "ssup", "How to create a ssup"),
        ("How do I make a Collab post?", "collab", "How to collaborate"),
        ("How do I edit my profile?", "edit profile", "How to edit profile"),
        ("How do I see my notifications?", "notification", "How to check notifications"),
        ("How do I change the app theme?", "change theme", "How to change theme"),
        ("How do I save a post?", "saved posts", "How to save posts"),
    ]
    .into_iter()
    .map(|(question, content_type, query)| Faq {
        question: question.to_string(),
        content_type: content_type.to_string(),
        query: query.to_string(),
    })
    .collect()
}

// ── Trending ──

/// Which slice of trending data a query asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingKind {
    Snips,
    Creators,
    Shots,
    All,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingSnip {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub views: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingCreator {
    pub id: String,
    pub name: String,
    pub followers: u64,
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingShot {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub likes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingContent {
    pub trending_snips: Vec<TrendingSnip>,
    pub trending_creators: Vec<TrendingCreator>,
    pub trending_shots: Vec<TrendingShot>,
}

/// Mock trending data; a production build would query the content service.
pub fn trending_content() -> TrendingContent {
    let snip = |id: &str, title: &str, creator: &str, views| TrendingSnip {
        id: id.to_string(),
        title: title.to_string(),
        creator: creator.to_string(),
        views,
    };
    let creator = |id: &str, name: &str, followers, content_type: &str| TrendingCreator {
        id: id.to_string(),
        name: name.to_string(),
        followers,
        content_type: content_type.to_string(),
    };
    let shot = |id: &str, title: &str, by: &str, likes| TrendingShot {
        id: id.to_string(),
        title: title.to_string(),
        creator: by.to_string(),
        likes,
    };
    TrendingContent {
        trending_snips: vec![
            snip("snip1", "Morning Routine", "FitnessPro", 1_200_000),
            snip("snip2", "Easy Recipe Hack", "ChefMaster", 980_000),
            snip("snip3", "Makeup Tips", "BeautyGuru", 875_000),
        ],
        trending_creators: vec![
            creator("creator1", "TechWhiz", 2_500_000, "tech reviews"),
            creator("creator2", "FashionForward", 2_100_000, "fashion"),
            creator("creator3", "TravelBug", 1_800_000, "travel vlogs"),
        ],
        trending_shots: vec![
            shot("shot1", "Sunset Beach", "NaturePhotographer", 350_000),
            shot("shot2", "City Lights", "UrbanShots", 310_000),
            shot("shot3", "Mountain Peaks", "AdventureSeeker", 290_000),
        ],
    }
}

/// Redirect buttons for the requested trending slice.
pub fn suggest_trending(kind: TrendingKind) -> ButtonsContent {
    let button = |text: &str, destination: &str| SuggestionButton {
        text: text.to_string(),
        action: "redirect".to_string(),
        destination: destination.to_string(),
    };

    let mut buttons = Vec::new();
    if matches!(kind, TrendingKind::Snips | TrendingKind::All) {
        buttons.push(button("Check Trending Snips", "/trending/snips"));
    }
    if matches!(kind, TrendingKind::Creators | TrendingKind::All) {
        buttons.push(button("Discover Popular Creators", "/trending/creators"));
    }
    if matches!(kind, TrendingKind::Shots | TrendingKind::All) {
        buttons.push(button("See Trending Shots", "/trending/shots"));
    }

    ButtonsContent {
        message: "Check out what's trending on Bigshorts! 📈".to_string(),
        buttons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_lookup_covers_every_tag() {
        for ct in ContentType::ALL {
            let guide = creation_guide(*ct);
            if *ct == ContentType::CreateAPlaylist {
                assert_eq!(guide.title, "Guide for create a playlist not found");
                assert!(guide.steps.is_empty());
            } else {
                assert!(!guide.steps.is_empty(), "{ct} guide is empty");
            }
        }
    }

    #[test]
    fn guide_from_text_standardizes_synonyms() {
        let guide = creation_guide_for_text("how do I make a reel");
        assert_eq!(guide.title, "Creating a Bigshorts SNIP");

        let miss = creation_guide_for_text("underwater basket weaving");
        assert_eq!(miss.title, "Content Type Not Found");
        assert!(miss.steps.is_empty());
    }

    #[test]
    fn payment_is_the_only_issue_without_a_solution() {
        for it in IssueType::ALL {
            let solution = solution_for(*it);
            if *it == IssueType::Payment {
                assert!(solution.is_none());
            } else {
                assert!(solution.is_some(), "{it} has no solution text");
            }
        }
    }

    #[test]
    fn legacy_sections_have_no_explanation() {
        assert!(section_explanation(PlatformSection::Profile).is_none());
        assert!(section_explanation(PlatformSection::Messages).is_none());
        assert!(section_explanation(PlatformSection::Settings).is_none());
        assert!(section_explanation(PlatformSection::Snip).is_some());
    }

    #[test]
    fn canned_pools_are_populated() {
        assert_eq!(GREETING_RESPONSES.len(), 30);
        assert_eq!(OFF_TOPIC_RESPONSES.len(), 4);
        assert_eq!(INTERACTIVE_IDEAS.len(), 10);
        assert_eq!(faqs().len(), 8);
    }

    #[test]
    fn trending_buttons_respect_the_requested_slice() {
        assert_eq!(suggest_trending(TrendingKind::All).buttons.len(), 3);
        let snips = suggest_trending(TrendingKind::Snips);
        assert_eq!(snips.buttons.len(), 1);
        assert_eq!(snips.buttons[0].destination, "/trending/snips");
    }
}
