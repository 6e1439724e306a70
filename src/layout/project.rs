//! Content projection: which semantic lines are visible for a display
//! mode, and what text occupies each.
//!
//! Pure function of its inputs. Language policy (which source languages
//! keep separate transliteration/translation lines) is configuration,
//! not a hardcoded check.

use std::collections::BTreeMap;

use crate::content::{DisplayMode, SlideContent};
use crate::hebrew::format_bible_reference;
use crate::theme::LineRole;

/// Projection policy configuration.
#[derive(Debug, Clone)]
pub struct ProjectorConfig {
    /// Source languages whose songs keep transliteration/translation as
    /// separate lines. Songs in any other language collapse those roles
    /// into `original` so one theme serves every language.
    pub transliterated_languages: Vec<String>,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        ProjectorConfig {
            transliterated_languages: vec!["he".to_string(), "ar".to_string()],
        }
    }
}

/// Per-role projection result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Projection {
    pub visible: bool,
    pub text: Option<String>,
}

/// Everything the projector needs for one slide.
#[derive(Debug, Clone, Copy)]
pub struct ProjectorInput<'a> {
    pub content: &'a SlideContent,
    pub mode: DisplayMode,
    /// The theme's effective line order (legacy themes may list
    /// `translationOverflow` as its own line).
    pub line_order: &'a [LineRole],
    /// In original mode, multiple source slides reviewed together:
    /// their original texts replace the current slide's.
    pub combined_originals: &'a [String],
}

fn join_present(parts: &[Option<&str>]) -> Option<String> {
    let joined: Vec<&str> = parts.iter().filter_map(|p| *p).collect();
    if joined.is_empty() {
        None
    } else {
        Some(joined.join("\n"))
    }
}

/// Project slide content through the display mode into per-role
/// visibility and text. Every supported role appears in the output map.
pub fn project(input: ProjectorInput<'_>, cfg: &ProjectorConfig) -> BTreeMap<LineRole, Projection> {
    let ProjectorInput {
        content,
        mode,
        line_order,
        combined_originals,
    } = input;

    let single_language = content
        .original_language
        .as_deref()
        .map(|lang| {
            !cfg.transliterated_languages
                .iter()
                .any(|t| t.eq_ignore_ascii_case(lang))
        })
        .unwrap_or(false);

    // Legacy themes carry translationOverflow as its own line; text is
    // then suppressed outright instead of appended to translation.
    let legacy_overflow = line_order.contains(&LineRole::TranslationOverflow);

    let mut original = content.original.clone();
    let mut translation = content.translation.clone();

    if single_language {
        original = join_present(&[
            content.original.as_deref(),
            content.transliteration.as_deref(),
            content.translation.as_deref(),
            content.translation_overflow.as_deref(),
        ]);
    } else if !legacy_overflow {
        if let Some(overflow) = content.translation_overflow.as_deref() {
            translation = join_present(&[translation.as_deref(), Some(overflow)]);
        }
    }

    if mode == DisplayMode::Original && !combined_originals.is_empty() {
        original = Some(combined_originals.join("\n"));
    }

    use DisplayMode::{Bilingual, Original, Translation};
    let mut out = BTreeMap::new();
    for role in LineRole::ALL {
        let (visible, text) = match role {
            LineRole::Original => (matches!(mode, Bilingual | Original), original.clone()),
            LineRole::Transliteration => (
                mode == Bilingual && !single_language,
                content.transliteration.clone(),
            ),
            LineRole::Translation => (
                matches!(mode, Bilingual | Translation) && !single_language,
                translation.clone(),
            ),
            // never rendered standalone: merged into translation, or
            // suppressed on the legacy path
            LineRole::TranslationOverflow => (false, content.translation_overflow.clone()),
            LineRole::Title => (true, content.title.clone()),
            LineRole::TitleTranslation => (mode == Bilingual, content.title_translation.clone()),
            LineRole::Subtitle => (matches!(mode, Original | Bilingual), content.subtitle.clone()),
            LineRole::SubtitleTranslation => {
                (mode == Bilingual, content.subtitle_translation.clone())
            }
            LineRole::Description => {
                (matches!(mode, Original | Bilingual), content.description.clone())
            }
            LineRole::DescriptionTranslation => {
                (mode == Bilingual, content.description_translation.clone())
            }
            LineRole::Reference => (
                true,
                content
                    .reference
                    .as_deref()
                    .map(|raw| format_bible_reference(raw, mode)),
            ),
            LineRole::ReferenceTranslation => {
                (mode == Bilingual, content.reference_translation.clone())
            }
            LineRole::ReferenceEnglish => (
                matches!(mode, Bilingual | Translation),
                content.reference_english.clone(),
            ),
        };
        out.insert(role, Projection { visible, text });
    }
    out
}
