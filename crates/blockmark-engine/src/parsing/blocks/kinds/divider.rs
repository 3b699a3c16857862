/// Thematic break: a line consisting solely of `---`, `***` or `___`.
pub struct Divider;

impl Divider {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];
    /// Marker emitted by the serializer.
    pub const CANONICAL: &'static str = "---";

    pub fn matches(trimmed: &str) -> bool {
        Self::MARKERS.contains(&trimmed)
    }
}
