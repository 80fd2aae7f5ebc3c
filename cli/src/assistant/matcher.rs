//! # Intent Matcher
//!
//! File: cli/src/assistant/matcher.rs
//!
//! ## Overview
//!
//! Maps a free-text question to exactly one canned answer. The question is
//! lowercased (Unicode, locale independent, no trimming) and tested against an
//! ordered rule table; the first rule with any trigger contained in the
//! question wins. When nothing matches, the fallback answer is returned.
//!
//! The matcher is total, synchronous and side-effect free. The rule table is
//! static data, so the matcher can be called from any number of sessions or
//! request handlers at once.
//!
//! ## Precedence
//!
//! Order is part of the contract. `support` lists "contact" among its
//! triggers and sits ahead of `contact`, so any question mentioning
//! "contact" gets the support answer. The other `contact` trigger, "email",
//! contains "ai" and is caught by the `ai` rule first, which leaves the
//! `contact` rule unreachable. The table is kept as is.
//!
use super::knowledge::{Topic, FALLBACK_ANSWER};
use serde::Serialize;
use tracing::trace;

/// One entry of the rule table: a topic and the substrings that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
}

static RULES: [Rule; 12] = [
    Rule { topic: Topic::Pricing, triggers: &["price", "cost", "pricing"] },
    Rule { topic: Topic::Packages, triggers: &["package", "plan"] },
    Rule { topic: Topic::Distribution, triggers: &["distribution", "distribute", "platform"] },
    Rule { topic: Topic::Timeline, triggers: &["timeline", "how long", "process"] },
    Rule { topic: Topic::Ownership, triggers: &["ownership", "rights", "keep", "own"] },
    Rule { topic: Topic::Playlists, triggers: &["playlist", "curator", "guarantee"] },
    Rule { topic: Topic::Marketing, triggers: &["marketing", "promote", "campaign"] },
    Rule { topic: Topic::Support, triggers: &["support", "help", "contact"] },
    Rule { topic: Topic::Ai, triggers: &["ai", "tool"] },
    Rule { topic: Topic::Payment, triggers: &["payment", "pay"] },
    Rule { topic: Topic::Refunds, triggers: &["refund", "cancel"] },
    Rule { topic: Topic::Contact, triggers: &["contact", "email"] },
];

/// The rule table in evaluation order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

impl Rule {
    fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }
}

/// Returns the topic of the first matching rule, or `None` for the fallback.
pub fn classify(question: &str) -> Option<Topic> {
    let normalized = question.to_lowercase();
    let topic = RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.topic);
    trace!(?topic, "classified question");
    topic
}

/// Answers a question with its topic's canned text or the fallback answer.
pub fn find_answer(question: &str) -> &'static str {
    classify(question).map_or(FALLBACK_ANSWER, Topic::answer)
}
