use crate::errors::RECOVERED_MESSAGE;

/// The fixed texts a description is assembled from.
///
/// Each phrase is a single constant for the lifetime of a [`Context`]; the
/// empty sentinel in particular must never collide with real data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrasebook {
    /// Substituted for any zero/empty value.
    pub empty: &'static str,
    /// Returned when nothing worth describing was found.
    pub unchanged: &'static str,
    /// Returned after a contained fault.
    pub recovered: &'static str,
    /// `<name> changed from <old> to <new>`, split around the two values.
    pub changed_from: &'static str,
    pub changed_to: &'static str,
    /// `<name> value is <value> ` (note the trailing space in the reference locale).
    pub value_is: &'static str,
    pub value_tail: &'static str,
    /// Label for fields whose values must not be revealed.
    pub changed_only: &'static str,
    pub delimiter: &'static str,
}

impl Phrasebook {
    pub fn zh() -> Self {
        Self {
            empty: "空",
            unchanged: "无任何关键数据发生变更",
            recovered: RECOVERED_MESSAGE,
            changed_from: "从",
            changed_to: "变更为",
            value_is: "值为",
            value_tail: " ",
            changed_only: "发生了变更",
            delimiter: "; ",
        }
    }

    pub fn en() -> Self {
        Self {
            empty: "<empty>",
            unchanged: "no key data changed",
            recovered: "recovered from a fault while describing changes, no diff recorded",
            changed_from: "changed from",
            changed_to: "to",
            value_is: "value is",
            value_tail: " ",
            changed_only: "changed",
            delimiter: "; ",
        }
    }

    pub fn for_lang(lang: Lang) -> Self {
        match lang {
            Lang::Zh => Self::zh(),
            Lang::En => Self::en(),
        }
    }

    pub(crate) fn change(&self, name: &str, old: &str, new: &str) -> String {
        format!("{name} {} {old} {} {new}", self.changed_from, self.changed_to)
    }

    pub(crate) fn value(&self, name: &str, value: &str) -> String {
        format!("{name} {} {value}{}", self.value_is, self.value_tail)
    }

    pub(crate) fn special(&self, name: &str) -> String {
        format!("{name} {}", self.changed_only)
    }
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self::zh()
    }
}

/// Output language; also the `--lang` value of the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

/// Per-engine options. Cheap to clone; nothing in here is mutated during a call.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub phrases: Phrasebook,
}

impl Context {
    pub fn new(lang: Lang) -> Self {
        Self { phrases: Phrasebook::for_lang(lang) }
    }
}
