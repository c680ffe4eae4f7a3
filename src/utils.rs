//! Text helpers shared by term extraction.

use crate::constants::terms::{LINK_MARKER, MENTION_PREFIX, RETWEET_MARKER};

/// True for tokens that never count as words: links, mentions, and the retweet marker.
pub fn is_noise_token(token: &str) -> bool {
    token.contains(LINK_MARKER) || token.starts_with(MENTION_PREFIX) || token == RETWEET_MARKER
}

/// Whitespace tokens of `text` with noise tokens removed.
pub fn content_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| !is_noise_token(token))
}
