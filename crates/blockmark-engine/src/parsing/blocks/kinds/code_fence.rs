pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If `trimmed` opens a fence, returns its language tag (possibly empty).
    pub fn opens(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::BACKTICKS).map(str::trim)
    }

    /// Any line starting with the fence marker closes an open fence.
    pub fn closes(line: &str) -> bool {
        line.trim_start().starts_with(Self::BACKTICKS)
    }

    pub fn open_line(language: &str) -> String {
        format!("{}{}", Self::BACKTICKS, language)
    }
}
