use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, LazyLock};

use ammonia::Builder;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Tags whose whole content ammonia drops. They can never be allowed.
pub const CONTENT_STRIPPED_TAGS: [&str; 2] = ["script", "style"];

static TAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("tag name pattern is valid"));

/// What happens to markup that is not on the allow list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizeMode {
    /// Remove disallowed tags, keeping their text.
    #[default]
    Strip,
    /// Encode markup as entities so it is displayed, never parsed.
    Escape,
}

impl std::str::FromStr for SanitizeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strip" => Ok(SanitizeMode::Strip),
            "escape" => Ok(SanitizeMode::Escape),
            other => Err(AppError::InvalidConfig(format!(
                "Unknown sanitize mode '{}', expected 'strip' or 'escape'",
                other
            ))),
        }
    }
}

/// Options passed to the clean operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Tags kept in the output. Empty means no markup survives.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub mode: SanitizeMode,
}

impl CleanOptions {
    /// No tags permitted, disallowed content stripped.
    pub fn strict() -> Self {
        Self::default()
    }
}

/// A clean operation bound to a validated set of options.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    options: CleanOptions,
    builder: Arc<Builder<'static>>,
}

impl Sanitizer {
    /// Validates `options` before they ever reach ammonia, which panics on
    /// some contradictory builder settings.
    pub fn new(options: CleanOptions) -> Result<Self, AppError> {
        let safe_tags = Builder::default().clone_tags();
        let mut tags: HashSet<&'static str> = HashSet::new();

        for tag in &options.tags {
            if !TAG_NAME.is_match(tag) {
                return Err(AppError::InvalidConfig(format!(
                    "'{}' is not a valid lowercase tag name",
                    tag
                )));
            }
            if CONTENT_STRIPPED_TAGS.contains(&tag.as_str()) {
                return Err(AppError::InvalidConfig(format!(
                    "<{}> can not be allowed",
                    tag
                )));
            }
            match safe_tags.get(tag.as_str()) {
                Some(known) => {
                    tags.insert(*known);
                }
                None => {
                    return Err(AppError::InvalidConfig(format!(
                        "<{}> is not on ammonia's list of safe tags",
                        tag
                    )));
                }
            }
        }

        if options.mode == SanitizeMode::Escape && !options.tags.is_empty() {
            return Err(AppError::InvalidConfig(
                "Escape mode encodes all markup and does not take allowed tags".to_string(),
            ));
        }

        let mut builder = Builder::default();
        builder.tags(tags);

        Ok(Self {
            options,
            builder: Arc::new(builder),
        })
    }

    pub fn strict() -> Self {
        STRICT.clone()
    }

    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    pub fn clean(&self, input: &str) -> String {
        let output = match self.options.mode {
            // The serializer writes U+00A0 as `&nbsp;`, which is not markup.
            // A CR only survives parsing as `&#13;`; keep it encoded so a
            // second pass does not fold it into LF.
            SanitizeMode::Strip => self
                .builder
                .clean(input)
                .to_string()
                .replace("&nbsp;", "\u{a0}")
                .replace('\r', "&#13;"),
            SanitizeMode::Escape => ammonia::clean_text(input),
        };

        if output != input {
            tracing::debug!(
                mode = ?self.options.mode,
                input_len = input.len(),
                output_len = output.len(),
                "Sanitizer rewrote input"
            );
        }

        output
    }

    /// True when cleaning `input` would leave it untouched.
    pub fn is_clean(&self, input: &str) -> bool {
        self.clean(input) == input
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::strict()
    }
}

static STRICT: LazyLock<Sanitizer> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder.tags(HashSet::new());

    Sanitizer {
        options: CleanOptions::strict(),
        builder: Arc::new(builder),
    }
});

/// Remove every tag from `input`, keeping plain text only.
///
/// Note:
/// 1. The content of <script> and <style> is dropped together with the tag.
/// 2. Stray `<`, `>` and `&` in text come back as entities, so the result
///    never holds a raw `<`.
/// 3. The result is stable: cleaning it again returns it unchanged.
pub fn strip_all(input: &str) -> String {
    STRICT.clean(input)
}
