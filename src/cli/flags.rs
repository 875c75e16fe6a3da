#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub save: bool,
    pub no_special: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    /// Replacement selection, in the order given.
    pub only: Option<Vec<String>>,
}

impl CliFlags {
    /// True when any flag changes the stored settings for this run.
    pub fn changes_settings(&self) -> bool {
        self.length.is_some() || self.only.is_some() || self.no_special
    }
}
