//! Prompt templates, one per response mode.

use playtime_core::{FieldName, ResponseMode};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

const TITLE_PLACEHOLDER: &str = "{title}";

const SEARCH_PREAMBLE: &str = "Search HowLongToBeat.com for \"{title}\"";

const TIE_BREAK: &str = "If multiple games match, use the base game entry rather than \
a collection, bundle, or DLC, unless the title itself names a collection.";

/// A prompt template bound to the response mode it was written for.
///
/// Templates contain a `{title}` placeholder that [`PromptSpec::render`]
/// replaces with the game title.
///
/// # Examples
///
/// ```
/// use playtime_core::ResponseMode;
/// use playtime_grammar::PromptSpec;
///
/// let spec = PromptSpec::for_mode(ResponseMode::PlainText);
/// let prompt = spec.render("Hades");
/// assert!(prompt.contains("\"Hades\""));
/// assert!(prompt.contains("Main + Extras"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptSpec {
    template: String,
    response_mode: ResponseMode,
}

impl PromptSpec {
    /// The template for `mode`.
    pub fn for_mode(mode: ResponseMode) -> Self {
        let template = match mode {
            ResponseMode::PlainText => plain_text_template(),
            ResponseMode::LabeledLine => labeled_line_template(),
            ResponseMode::Json => json_template(),
        };
        Self {
            template,
            response_mode: mode,
        }
    }

    /// Raw template text, placeholder included.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Mode this template asks the model to answer in.
    pub fn response_mode(&self) -> ResponseMode {
        self.response_mode
    }

    /// Substitute the title into the template.
    pub fn render(&self, game_title: &str) -> String {
        self.template.replace(TITLE_PLACEHOLDER, game_title)
    }
}

/// Build the prompt for `game_title` in `mode`.
///
/// The title is embedded verbatim; callers reject empty titles beforehand.
#[instrument(skip(game_title), fields(title_len = game_title.len()))]
pub fn build(game_title: &str, mode: ResponseMode) -> String {
    let prompt = PromptSpec::for_mode(mode).render(game_title);
    debug!(mode = %mode, prompt_len = prompt.len(), "Built prompt");
    prompt
}

fn plain_text_template() -> String {
    format!(
        "{SEARCH_PREAMBLE} and extract the \"{}\" completion time. \
         Respond ONLY with the time (e.g., \"30h 15m\", \"N/A (No data yet)\", \"70-75h (approx.)\"). \
         {TIE_BREAK}",
        FieldName::MainExtras.json_key()
    )
}

fn labeled_line_template() -> String {
    let line = FieldName::iter()
        .map(|field| format!("{}: [time]", field.line_label()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{SEARCH_PREAMBLE} and extract all of its completion times. \
         Respond ONLY with a single line in exactly this format: \"{line}\". \
         Write each time like \"30h 15m\" or \"70-75h\", and use 'N/A' for any time that is not available. \
         {TIE_BREAK}"
    )
}

fn json_template() -> String {
    let keys = FieldName::iter()
        .map(|field| format!("\"{}\"", field.json_key()))
        .collect::<Vec<_>>()
        .join(", ");
    let example = [
        (FieldName::MainStory, "25h"),
        (FieldName::MainExtras, "38h 30m"),
        (FieldName::Completionist, "70-75h"),
        (FieldName::AllStyles, "N/A"),
    ]
    .iter()
    .map(|(field, time)| format!("\"{}\": \"{}\"", field.json_key(), time))
    .collect::<Vec<_>>()
    .join(", ");
    format!(
        "{SEARCH_PREAMBLE} and extract all of its completion times. \
         Respond ONLY with a JSON object that has exactly these keys: {keys}. \
         Each value must be a time string such as \"30h 15m\" or \"70-75h\", or \"N/A\" if that time is not available. \
         Example: {{{example}}}. \
         {TIE_BREAK}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_placeholder_once() {
        for mode in ResponseMode::iter() {
            let spec = PromptSpec::for_mode(mode);
            assert_eq!(spec.template().matches(TITLE_PLACEHOLDER).count(), 1);
            assert_eq!(spec.response_mode(), mode);
        }
    }

    #[test]
    fn test_json_example_is_valid_json() {
        let template = json_template();
        let start = template.find("Example: ").map(|i| i + "Example: ".len()).unwrap();
        let end = template[start..].find('}').map(|i| start + i + 1).unwrap();
        let example: serde_json::Value = serde_json::from_str(&template[start..end]).unwrap();
        assert_eq!(example["Main + Extras"], "38h 30m");
    }
}
