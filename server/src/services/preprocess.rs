//! Preprocessing transforms: tokenize, pad, embed.
//!
//! DESIGN
//! ======
//! `tokenize` follows the basic-english convention: lowercase, punctuation
//! split into standalone tokens, whitespace collapsed. `pad` fixes the
//! token sequence at [`PAD_LENGTH`] entries. `embed` maps each token to a
//! deterministic pseudo-embedding so the same token always produces the
//! same vector without carrying a pretrained table.

#[cfg(test)]
#[path = "preprocess_test.rs"]
mod preprocess_test;

use wire::PreprocessMode;

/// Token appended when padding a short sequence.
pub const PAD_TOKEN: &str = "<pad>";

/// Fixed sequence length produced by the `pad` mode.
pub const PAD_LENGTH: usize = 10;

/// Dimension of the pseudo-embedding vectors.
pub const EMBED_DIM: usize = 8;

/// Apply a preprocessing mode to `text`, returning the rendered result.
#[must_use]
pub fn apply(mode: PreprocessMode, text: &str) -> String {
    let tokens = tokenize(text);
    match mode {
        PreprocessMode::Tokenize => tokens.join(" "),
        PreprocessMode::Pad => pad(tokens).join(" "),
        PreprocessMode::Embed => render_embeddings(&tokens),
    }
}

/// Basic-english tokenization: lowercase, punctuation as standalone
/// tokens, split on whitespace.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            flush(&mut current, &mut tokens);
        } else if ch.is_alphanumeric() {
            current.extend(ch.to_lowercase());
        } else {
            flush(&mut current, &mut tokens);
            tokens.push(ch.to_string());
        }
    }
    flush(&mut current, &mut tokens);
    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

/// Pad or truncate a token sequence to exactly [`PAD_LENGTH`] entries.
#[must_use]
pub fn pad(mut tokens: Vec<String>) -> Vec<String> {
    tokens.truncate(PAD_LENGTH);
    while tokens.len() < PAD_LENGTH {
        tokens.push(PAD_TOKEN.to_owned());
    }
    tokens
}

/// Deterministic pseudo-embedding for a single token.
///
/// Each dimension is derived from an FNV-1a hash of the token seeded by
/// the dimension index, scaled into `[-1, 1]`.
#[must_use]
pub fn embed_token(token: &str) -> [f32; EMBED_DIM] {
    let mut vector = [0.0f32; EMBED_DIM];
    for (dim, slot) in vector.iter_mut().enumerate() {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325 ^ (dim as u64).wrapping_mul(0x9e37_79b9);
        for byte in token.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        // Map the top 24 bits into [-1, 1].
        let unit = (hash >> 40) as f32 / ((1u64 << 24) - 1) as f32;
        *slot = unit.mul_add(2.0, -1.0);
    }
    vector
}

fn render_embeddings(tokens: &[String]) -> String {
    let rows: Vec<String> = tokens
        .iter()
        .map(|token| {
            let values: Vec<String> =
                embed_token(token).iter().map(|v| format!("{v:.4}")).collect();
            format!("[{}]", values.join(", "))
        })
        .collect();
    format!("[{}]", rows.join(", "))
}
