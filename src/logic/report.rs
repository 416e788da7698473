//! Verdict Presentation
//!
//! User-facing messages (Markdown) for a verdict, as sent back to the chat.

use super::signal::{Category, ShapeLabel, Source, Verdict};

pub const WELCOME_MESSAGE: &str = "👋 *Welcome to PhishSniff!* 🧠\n\n\
Send me a URL or an email text to analyze.\n\n\
Examples:\n\
`https://secure-bank-login.example`\n\
`Dear user, your account has been suspended...`\n\n\
I'll detect whether it's *phishing* or *safe*.";

pub const UNKNOWN_MESSAGE: &str = "Couldn't analyze that input 😕 Try again!";

/// Format a verdict for display
pub fn format_verdict(verdict: &Verdict) -> String {
    let pct = verdict.confidence_percent;

    match (verdict.shape, verdict.source, verdict.category) {
        (_, _, Category::Unknown) | (_, Source::None, _) => UNKNOWN_MESSAGE.to_string(),

        (ShapeLabel::Url, Source::Heuristic, Category::Phishing) => format!(
            "⚠️ *Suspicious Link (heuristic)*\nEstimated phishing probability: {:.2}%",
            pct
        ),
        (ShapeLabel::Url, Source::Heuristic, Category::Safe) => format!(
            "✅ *Likely Safe Link (heuristic)*\nEstimated phishing probability: {:.2}%",
            pct
        ),

        (ShapeLabel::Url, _, Category::Phishing) => {
            format!("⚠️ *Phishing URL Detected!*\nConfidence: {:.2}%", pct)
        }
        (ShapeLabel::Url, _, Category::Safe) => format!("✅ *Safe URL*\nConfidence: {:.2}%", pct),

        (ShapeLabel::Email, _, Category::Phishing) => {
            format!("🚨 *Phishing Email Detected!*\nConfidence: {:.2}%", pct)
        }
        (ShapeLabel::Email, _, Category::Safe) => {
            format!("✅ *Safe Email*\nConfidence: {:.2}%", pct)
        }
    }
}
