use tracing::{debug, debug_span};

use super::glyph_map::{GlyphKind, GlyphMap, VowelOrder};
use crate::settings::{settings, TransliterationSettings};

/// Shape of the last rendered glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    /// Sixth-order consonant waiting for a possible vowel.
    BareConsonant,
    /// Consonant already combined with a vowel.
    Fused,
    /// Standalone vowel, punctuation or pass-through character.
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
}

/// One input session: the raw keystrokes and the Ethiopic text they render to.
///
/// `spans[i]` is the number of keystrokes behind the i-th rendered glyph, so
/// `spans.len()` equals the rendered glyph count and the spans sum to the
/// keystroke count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransliterationState {
    latin: String,
    rendered: String,
    spans: Vec<usize>,
}

impl TransliterationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `text` keystroke by keystroke with the global map and settings.
    pub fn from_latin(text: &str) -> Self {
        text.chars().fold(Self::new(), Self::step)
    }

    pub fn latin(&self) -> &str {
        &self.latin
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn spans(&self) -> &[usize] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn into_rendered(self) -> String {
        self.rendered
    }

    pub fn phase(&self, map: &GlyphMap) -> Phase {
        let Some(last) = self.rendered.chars().last() else {
            return Phase::Empty;
        };
        match map.inverse(last) {
            Some(GlyphKind::Consonant {
                order: VowelOrder::Base,
                ..
            }) => Phase::BareConsonant,
            Some(GlyphKind::Consonant { .. }) => Phase::Fused,
            _ => Phase::Plain,
        }
    }

    /// Feed one keystroke using the global glyph map and settings.
    pub fn step(self, key: char) -> Self {
        self.step_with(GlyphMap::global(), &settings().transliteration, key)
    }

    pub fn step_with(mut self, map: &GlyphMap, opts: &TransliterationSettings, key: char) -> Self {
        let _span = debug_span!("step", %key).entered();
        let resolved = map.classify_key(key, opts.case_sensitive);

        if let Some((k, kind)) = &resolved {
            if let Some(glyph) = self.fuse(map, opts, *k, kind) {
                self.rendered.pop();
                self.rendered.push(glyph);
                self.latin.push(key);
                if let Some(span) = self.spans.last_mut() {
                    *span += 1;
                }
                return self;
            }
        }

        let glyph = match resolved.and_then(|(_, kind)| map.standalone_glyph(&kind)) {
            Some(glyph) => glyph,
            None => {
                debug!(%key, "unmapped keystroke, passing through");
                key
            }
        };
        self.rendered.push(glyph);
        self.latin.push(key);
        self.spans.push(1);
        self
    }

    /// Glyph that replaces the last rendered one when `key` combines with it.
    fn fuse(
        &self,
        map: &GlyphMap,
        opts: &TransliterationSettings,
        key: char,
        kind: &GlyphKind,
    ) -> Option<char> {
        let last = self.rendered.chars().last()?;
        let GlyphKind::Consonant {
            key: row_key,
            order,
        } = map.inverse(last)?
        else {
            return None;
        };
        let row = map.row(row_key)?;
        let is_vowel = matches!(kind, GlyphKind::Vowel(_));

        match order {
            VowelOrder::Base if is_vowel => VowelOrder::from_vowel_key(key).map(|o| row.get(o)),
            VowelOrder::Base if opts.digraphs => map.base_glyph(&format!("{row_key}{key}")),
            // A second `e` moves the first-order ä to the fifth-order e.
            VowelOrder::Ae if is_vowel && key == 'e' => Some(row.get(VowelOrder::E)),
            _ => None,
        }
    }

    /// Remove the last glyph together with every keystroke that produced it.
    pub fn backspace(mut self) -> Self {
        let _span = debug_span!("backspace").entered();
        if let Some(span) = self.spans.pop() {
            self.rendered.pop();
            for _ in 0..span {
                self.latin.pop();
            }
        }
        self
    }

    pub fn apply(self, keystroke: Keystroke) -> Self {
        match keystroke {
            Keystroke::Char(c) => self.step(c),
            Keystroke::Backspace => self.backspace(),
        }
    }
}

/// Convert a whole Latin string at once. Identical to replaying it through
/// [`TransliterationState::step_with`].
pub fn transliterate_with(map: &GlyphMap, opts: &TransliterationSettings, text: &str) -> String {
    text.chars()
        .fold(TransliterationState::new(), |state, c| {
            state.step_with(map, opts, c)
        })
        .into_rendered()
}

/// [`transliterate_with`] using the global glyph map and settings.
pub fn transliterate_full_text(text: &str) -> String {
    let _span = debug_span!("transliterate_full_text", len = text.len()).entered();
    transliterate_with(GlyphMap::global(), &settings().transliteration, text)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn typed(keys: &str) -> TransliterationState {
        TransliterationState::from_latin(keys)
    }

    #[test]
    fn test_consonant_vowel_fusion() {
        let s = typed("h");
        assert_eq!(s.rendered(), "ህ");
        let s = s.step('u');
        assert_eq!(s.rendered(), "ሁ");
        assert_eq!(s.rendered().chars().count(), 1);
        assert_eq!(s.latin(), "hu");
    }

    #[test]
    fn test_backspace_removes_fused_glyph() {
        let s = typed("hu").backspace();
        assert_eq!(s.rendered(), "");
        assert_eq!(s.latin(), "");
        assert!(s.is_empty());
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let s = TransliterationState::new().backspace();
        assert_eq!(s, TransliterationState::new());
    }

    #[test]
    fn test_all_orders() {
        assert_eq!(transliterate_full_text("he"), "ሀ");
        assert_eq!(transliterate_full_text("hu"), "ሁ");
        assert_eq!(transliterate_full_text("hi"), "ሂ");
        assert_eq!(transliterate_full_text("ha"), "ሃ");
        assert_eq!(transliterate_full_text("hee"), "ሄ");
        assert_eq!(transliterate_full_text("h"), "ህ");
        assert_eq!(transliterate_full_text("ho"), "ሆ");
    }

    #[test]
    fn test_words() {
        assert_eq!(transliterate_full_text("selam"), "ሰላም");
        assert_eq!(transliterate_full_text("abebe"), "አበበ");
        let sensitive = TransliterationSettings {
            case_sensitive: true,
            ..Default::default()
        };
        assert_eq!(
            transliterate_with(GlyphMap::global(), &sensitive, "ityoPya"),
            "ኢትዮጵያ"
        );
    }

    #[test]
    fn test_capitalized_word_uses_lowercase_row() {
        assert_eq!(transliterate_full_text("Selam"), "ሰላም");
        assert_eq!(transliterate_full_text("Hu"), "ሁ");
        assert_eq!(transliterate_full_text("ityoPya"), "ኢትዮፕያ");
    }

    #[test]
    fn test_third_e_starts_a_new_vowel() {
        assert_eq!(transliterate_full_text("heee"), "ሄእ");
    }

    #[test]
    fn test_standalone_vowels_do_not_fuse() {
        assert_eq!(transliterate_full_text("aa"), "አአ");
        assert_eq!(transliterate_full_text("hua"), "ሁአ");
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(transliterate_full_text("sh"), "ሽ");
        assert_eq!(transliterate_full_text("sha"), "ሻ");
        assert_eq!(transliterate_full_text("nya"), "ኛ");
        let s = typed("sh");
        assert_eq!(s.spans(), &[2]);
        assert!(s.backspace().is_empty());
    }

    #[test]
    fn test_digraphs_disabled() {
        let opts = TransliterationSettings {
            digraphs: false,
            ..Default::default()
        };
        assert_eq!(transliterate_with(GlyphMap::global(), &opts, "sh"), "ስህ");
    }

    #[test]
    fn test_case_handling() {
        let map = GlyphMap::global();
        let sensitive = TransliterationSettings {
            case_sensitive: true,
            ..Default::default()
        };
        let insensitive = TransliterationSettings {
            case_sensitive: false,
            digraphs: true,
        };
        assert_eq!(transliterate_with(map, &sensitive, "Ha"), "ሓ");
        assert_eq!(transliterate_with(map, &insensitive, "Ha"), "ሃ");
        // No uppercase row for L; falls back to l.
        assert_eq!(transliterate_with(map, &sensitive, "La"), "ላ");
    }

    #[test]
    fn test_punctuation_and_passthrough() {
        assert_eq!(transliterate_full_text("selam."), "ሰላም።");
        assert_eq!(transliterate_full_text("a, b"), "አ፣ ብ");
        assert_eq!(transliterate_full_text("la 42"), "ላ 42");
        assert_eq!(transliterate_full_text(""), "");
    }

    #[test]
    fn test_phase() {
        let map = GlyphMap::global();
        assert_eq!(TransliterationState::new().phase(map), Phase::Empty);
        assert_eq!(typed("l").phase(map), Phase::BareConsonant);
        assert_eq!(typed("la").phase(map), Phase::Fused);
        assert_eq!(typed("a").phase(map), Phase::Plain);
        assert_eq!(typed("l1").phase(map), Phase::Plain);
    }

    #[test]
    fn test_apply_replays_keystrokes() {
        let keys = [
            Keystroke::Char('s'),
            Keystroke::Char('e'),
            Keystroke::Char('l'),
            Keystroke::Backspace,
            Keystroke::Char('l'),
            Keystroke::Char('a'),
            Keystroke::Char('m'),
        ];
        let s = keys
            .into_iter()
            .fold(TransliterationState::new(), TransliterationState::apply);
        assert_eq!(s.rendered(), "ሰላም");
        assert_eq!(s.latin(), "selam");
        assert_eq!(s.spans(), &[2, 2, 1]);
    }

    #[test]
    fn test_full_text_matches_incremental() {
        for text in ["selam", "ityoPya", "sh ny zh", "heee."] {
            assert_eq!(transliterate_full_text(text), typed(text).rendered());
        }
    }

    fn keystroke() -> impl Strategy<Value = Keystroke> {
        prop_oneof![
            4 => prop::sample::select(vec!['h', 's', 'n', 'y', 'l', 'S', 'a', 'e', 'i', 'o', 'u', '.', ' ', '7'])
                .prop_map(Keystroke::Char),
            1 => Just(Keystroke::Backspace),
        ]
    }

    proptest! {
        #[test]
        fn prop_spans_track_buffers(keys in prop::collection::vec(keystroke(), 0..40)) {
            let s = keys.into_iter().fold(TransliterationState::new(), TransliterationState::apply);
            prop_assert_eq!(s.spans().len(), s.rendered().chars().count());
            prop_assert_eq!(s.spans().iter().sum::<usize>(), s.latin().chars().count());
            prop_assert!(s.spans().iter().all(|&n| n >= 1));
        }

        #[test]
        fn prop_state_is_replay_of_latin(keys in prop::collection::vec(keystroke(), 0..40)) {
            let s = keys.into_iter().fold(TransliterationState::new(), TransliterationState::apply);
            prop_assert_eq!(TransliterationState::from_latin(s.latin()), s);
        }
    }
}
