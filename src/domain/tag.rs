use super::version::{cmp_precedence, coerce, parse_strict};
use semver::Version;

/// How a tag came to be accepted as a version candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    /// The prefix-stripped tag is strict semver
    Strict,
    /// A version triple was coerced out of the raw tag
    Coerced,
}

/// A git tag accepted into the ranking set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCandidate {
    /// The raw tag name, exactly as listed
    pub name: String,
    /// The version used for ranking
    pub version: Version,
    pub interpretation: Interpretation,
}

impl TagCandidate {
    /// Interpret a raw tag as a version candidate.
    ///
    /// Returns `None` for tags that do not carry `prefix` or that neither
    /// parse strictly (after stripping the prefix) nor coerce.
    pub fn interpret(name: &str, prefix: &str) -> Option<Self> {
        let stripped = name.strip_prefix(prefix)?;

        let (version, interpretation) = match parse_strict(stripped) {
            Some(version) => (version, Interpretation::Strict),
            None => (coerce(name)?, Interpretation::Coerced),
        };

        Some(TagCandidate {
            name: name.to_string(),
            version,
            interpretation,
        })
    }
}

/// Split raw tag-listing output into trimmed, non-empty tag names.
pub fn split_tag_list(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Filter and rank raw tag names, highest precedence first.
///
/// Equal-precedence candidates keep their listing order.
pub fn rank_tags<'a, I>(tags: I, prefix: &str) -> Vec<TagCandidate>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut candidates: Vec<TagCandidate> = tags
        .into_iter()
        .filter_map(|tag| TagCandidate::interpret(tag, prefix))
        .collect();

    candidates.sort_by(|a, b| cmp_precedence(&b.version, &a.version));
    candidates
}
