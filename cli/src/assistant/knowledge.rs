//! # Assistant Knowledge Base
//!
//! File: cli/src/assistant/knowledge.rs
//!
//! The compiled-in topic table: every topic the assistant can answer and the
//! canned text it answers with. The table is immutable and process-wide;
//! there is no way to add, edit, or remove topics at runtime.
//!
use serde::Serialize;
use std::fmt;

/// Stable identifier of a canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Pricing,
    Packages,
    Distribution,
    Timeline,
    Ownership,
    Playlists,
    Marketing,
    Support,
    Ai,
    Payment,
    Refunds,
    Contact,
}

impl Topic {
    /// Every topic, in table order.
    pub const ALL: [Topic; 12] = [
        Topic::Pricing,
        Topic::Packages,
        Topic::Distribution,
        Topic::Timeline,
        Topic::Ownership,
        Topic::Playlists,
        Topic::Marketing,
        Topic::Support,
        Topic::Ai,
        Topic::Payment,
        Topic::Refunds,
        Topic::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Topic::Pricing => "pricing",
            Topic::Packages => "packages",
            Topic::Distribution => "distribution",
            Topic::Timeline => "timeline",
            Topic::Ownership => "ownership",
            Topic::Playlists => "playlists",
            Topic::Marketing => "marketing",
            Topic::Support => "support",
            Topic::Ai => "ai",
            Topic::Payment => "payment",
            Topic::Refunds => "refunds",
            Topic::Contact => "contact",
        }
    }

    pub fn answer(self) -> &'static str {
        match self {
            Topic::Pricing => "We offer three packages: Basic ($50-$75), Pro ($150-$200), and Deluxe ($300-$500). All packages are one-time payments with lifetime distribution. The Pro package is our most popular option and includes professional cover art design and playlist pitching.",
            Topic::Packages => "Basic includes distribution to 150+ platforms, metadata optimization, and email support. Pro adds cover art design, playlist pitching, and priority support. Deluxe includes everything plus comprehensive marketing, monthly analytics, and VIP support.",
            Topic::Distribution => "Distribution typically takes 7-14 days. We recommend submitting releases 3-4 weeks before your target date. We distribute to 150+ platforms including Spotify, Apple Music, Amazon, Tidal, YouTube Music, and more.",
            Topic::Timeline => "Submit your music → We review and optimize metadata (2-3 days) → Distribution to platforms (7-14 days) → Your music goes live → Ongoing support and analytics.",
            Topic::Ownership => "Yes! You keep 100% ownership of your masters and compositions. We simply distribute your music - you retain all rights and royalties forever.",
            Topic::Playlists => "While we can't guarantee placements, our Pro and Deluxe packages include strategic pitching to 500+ verified curators. Our success rate is significantly higher than DIY submissions.",
            Topic::Marketing => "Pro and Deluxe packages include marketing support: 30-day timelines, pre-save campaigns, social media content, and release strategy consultations.",
            Topic::Support => "Basic: Email support (24-48 hours). Pro: Priority email & chat (12 hours). Deluxe: VIP support including phone, email, and chat with dedicated account manager.",
            Topic::Ai => "All packages include access to our AI Powerhouse Toolkit with 7 tools: Cover Art Generator, Marketing Copy Writer, Release Strategy Assistant, Metadata Optimizer, Analytics Insights, Social Content Generator, and Music Recommendations Engine.",
            Topic::Payment => "We accept all major credit cards through secure Stripe payment processing. Payment is due before distribution begins. All sales are one-time payments with no recurring fees.",
            Topic::Refunds => "We offer refunds if we haven't started distribution yet. Once your music is submitted to platforms, refunds are not available. Contact support for specific cases.",
            Topic::Contact => "Email us at breonjohnson20x@gmail.com or use the support chat in your dashboard after signing up.",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Answer returned when no rule matches.
pub const FALLBACK_ANSWER: &str = "I'm not sure about that specific question, but I'd love to help! You can ask me about pricing, packages, distribution process, ownership rights, playlists, marketing, AI tools, or support. Or email us at breonjohnson20x@gmail.com for personalized assistance.";

/// First bot message of every conversation.
pub const GREETING: &str = "Hey! I'm your Elevated Media House assistant. Ask me anything about our services, pricing, or the distribution process!";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_lowercase() {
        let keys: HashSet<_> = Topic::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), Topic::ALL.len());
        for key in keys {
            assert_eq!(key, key.to_lowercase());
        }
    }

    #[test]
    fn answers_are_distinct() {
        let answers: HashSet<_> = Topic::ALL.iter().map(|t| t.answer()).collect();
        assert_eq!(answers.len(), Topic::ALL.len());
        assert!(!answers.contains(FALLBACK_ANSWER));
    }

    #[test]
    fn topic_serializes_as_key() {
        let json = serde_json::to_string(&Topic::Ai).unwrap();
        assert_eq!(json, "\"ai\"");
        assert_eq!(Topic::Playlists.to_string(), "playlists");
    }
}
