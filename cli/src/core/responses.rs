//! # MindMate Supportive Replies
//!
//! File: cli/src/core/responses.rs
//!
//! ## Overview
//!
//! The response selector: a fixed table from emotion label to a supportive
//! reply, plus a fallback used for any label the table does not know. Both
//! the console and the web driver read from the same table.
//!
//! ```rust
//! use crate::core::responses;
//!
//! let reply = responses::select("joy");
//! let fallback = responses::select("unknown_tag");
//! assert_eq!(fallback, responses::FALLBACK_REPLY);
//! ```
//!

/// Reply used when no entry matches the detected label.
pub const FALLBACK_REPLY: &str = "I’m here with you. You can share as much or as little as you feel comfortable.\n\
     What’s on your mind right now?";

/// Emotion label to reply text.
pub const RESPONSES: [(&str, &str); 7] = [
    (
        "sadness",
        "I'm really sorry you're going through this. It’s okay to feel how you feel.\n\
         You don’t have to handle everything alone.\n\
         If it feels right, try expressing what part of today felt the heaviest.\n\
         Or type: journal — I’ll gently guide your thoughts.",
    ),
    (
        "anger",
        "I can sense how overwhelming this feels. Your emotions are valid.\n\
         Let’s slow the body down, just for a moment.\n\
         Type: breath — and I’ll walk you through a calming breathing exercise.",
    ),
    (
        "fear",
        "It sounds like things feel uncertain or intense right now.\n\
         You’re safe here. I’m with you.\n\
         Try grounding yourself: look around and name 3 things you can see.\n\
         If you'd like deeper support, type: journal — we can explore gently.",
    ),
    (
        "joy",
        "That’s wonderful to hear. Please take a moment to notice how that feels inside your body.\n\
         What made this moment meaningful for you?",
    ),
    (
        "love",
        "Your heart feels warm today — that’s something to treasure.\n\
         Maybe let that warmth touch someone else today. Even a small message counts.",
    ),
    (
        "surprise",
        "Wow — that was unexpected!\n\
         How did that moment make you feel emotionally?",
    ),
    (
        "disgust",
        "That sounds uncomfortable, and it’s okay to feel this way.\n\
         You can share more when you’re ready. I’m here with patience.",
    ),
];

/// Returns the reply for `emotion`, or [`FALLBACK_REPLY`] if it has none.
///
/// Labels are matched exactly; the classifier emits lowercase labels.
pub fn select(emotion: &str) -> &'static str {
    RESPONSES
        .iter()
        .find(|(label, _)| *label == emotion)
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}
