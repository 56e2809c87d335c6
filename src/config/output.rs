use serde::Deserialize;

/// Rendering of command results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSection {
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawOutputSection {
    pub pretty: Option<bool>,
}

pub fn parse_output_section(raw: Option<RawOutputSection>) -> OutputSection {
    let output_raw = raw.unwrap_or_default();
    OutputSection {
        pretty: output_raw.pretty.unwrap_or(false),
    }
}
