//! HowLongToBeat completion-time categories.

/// One of the four completion-time categories.
///
/// Only [`FieldName::MainExtras`] is surfaced to callers; the rest are asked
/// for in multi-field modes so the model has the full row to anchor on.
///
/// # Examples
///
/// ```
/// use playtime_core::FieldName;
///
/// assert_eq!(FieldName::MainExtras.json_key(), "Main + Extras");
/// assert_eq!(FieldName::MainExtras.line_label(), "Extras");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum FieldName {
    /// Main story only
    #[display("Main Story")]
    MainStory,
    /// Main story plus side content
    #[default]
    #[display("Main + Extras")]
    MainExtras,
    /// Everything in the game
    #[display("Completionist")]
    Completionist,
    /// Average across all play styles
    #[display("All Styles")]
    AllStyles,
}

impl FieldName {
    /// Key used for this field in JSON mode.
    pub fn json_key(&self) -> &'static str {
        match self {
            FieldName::MainStory => "Main Story",
            FieldName::MainExtras => "Main + Extras",
            FieldName::Completionist => "Completionist",
            FieldName::AllStyles => "All Styles",
        }
    }

    /// Label used for this field in labeled-line mode (without the colon).
    pub fn line_label(&self) -> &'static str {
        match self {
            FieldName::MainStory => "Main",
            FieldName::MainExtras => "Extras",
            FieldName::Completionist => "100%",
            FieldName::AllStyles => "All",
        }
    }
}
