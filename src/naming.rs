/// Sanitized stems are capped at this many characters. Two phrases sharing a
/// 30-character normalized prefix would collide; the current phrase set has
/// no such pair.
const MAX_STEM_CHARS: usize = 30;

/// Derives the on-disk filename for a phrase. Pure function of the pair
/// `(index, text)`: everything except letters, digits, spaces, hyphens and
/// underscores is dropped, surrounding whitespace is trimmed, spaces become
/// underscores, the result is lowercased and truncated to [`MAX_STEM_CHARS`],
/// then prefixed with the zero-padded index.
///
/// Index 12 with text `"Welcome!"` maps to `phrase_12_welcome.mp3`.
pub fn audio_filename(index: usize, text: &str) -> String {
    let safe: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe = safe.trim().to_lowercase().replace(' ', "_");
    let stem: String = safe.chars().take(MAX_STEM_CHARS).collect();
    format!("phrase_{index:02}_{stem}.mp3")
}
