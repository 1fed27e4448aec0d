/// Localization builder — flat `key=value` `.lang` files, one per
/// locale.
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::BuildError;

/// A locale code the consumer ships translations for. `Custom` covers
/// codes the enumeration has not caught up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locale {
    EnUs,
    EnGb,
    PtBr,
    PtPt,
    EsEs,
    EsMx,
    FrFr,
    FrCa,
    DeDe,
    ItIt,
    JaJp,
    KoKr,
    RuRu,
    ZhCn,
    ZhTw,
    NlNl,
    Custom(String),
}

impl Locale {
    pub fn code(&self) -> &str {
        match self {
            Self::EnUs => "en_US",
            Self::EnGb => "en_GB",
            Self::PtBr => "pt_BR",
            Self::PtPt => "pt_PT",
            Self::EsEs => "es_ES",
            Self::EsMx => "es_MX",
            Self::FrFr => "fr_FR",
            Self::FrCa => "fr_CA",
            Self::DeDe => "de_DE",
            Self::ItIt => "it_IT",
            Self::JaJp => "ja_JP",
            Self::KoKr => "ko_KR",
            Self::RuRu => "ru_RU",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::NlNl => "nl_NL",
            Self::Custom(code) => code,
        }
    }
}

/// Accumulates translation lines. Unlike the JSON builders, `build`
/// borrows rather than consumes: the same accumulated entries are
/// typically written for several locales in turn, adding translations
/// between calls.
#[derive(Debug, Default)]
pub struct LangBuilder {
    lines: Vec<String>,
}

impl LangBuilder {
    pub fn new() -> LangBuilder {
        LangBuilder::default()
    }

    /// Append one `key=value` line; append-only, duplicate keys are
    /// kept in call order (the consumer takes the last occurrence).
    pub fn add_entry(mut self, key: &str, value: &str) -> Self {
        self.lines.push(format!("{}={}", key, value));
        self
    }

    /// Write `texts/<locale>.lang`: lines joined by `\n`, no trailing
    /// newline.
    pub fn build(&self, locale: Locale, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let mut report = EmitReport::default();
        emitter.write_text(
            Category::Texts,
            &format!("{}.lang", locale.code()),
            &self.lines.join("\n"),
            &mut report,
        );
        Ok(report)
    }
}
