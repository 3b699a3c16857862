/// Bullet marker shared by plain and check items.
pub struct BulletItem;

impl BulletItem {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];
    /// Marker emitted by the serializer.
    pub const CANONICAL: &'static str = "- ";

    /// A bare `-` or `*` is an empty item: trimming drops the marker's space.
    pub fn strip_marker(trimmed: &str) -> Option<&str> {
        if Self::MARKERS.iter().any(|m| trimmed == m.trim_end()) {
            return Some("");
        }
        Self::MARKERS.iter().find_map(|m| trimmed.strip_prefix(m))
    }
}

/// Checklist item: a bullet marker immediately followed by `[ ]`, `[x]` or `[X]`.
pub struct CheckItem;

impl CheckItem {
    pub const UNCHECKED: &'static str = "[ ]";
    pub const CHECKED: [&'static str; 2] = ["[x]", "[X]"];

    /// Returns `(checked, text)` for a checklist line.
    pub fn parse(trimmed: &str) -> Option<(bool, &str)> {
        let body = BulletItem::strip_marker(trimmed)?;
        let (checked, rest) = if let Some(rest) = body.strip_prefix(Self::UNCHECKED) {
            (false, rest)
        } else {
            (true, Self::CHECKED.iter().find_map(|m| body.strip_prefix(m))?)
        };
        Some((checked, rest.trim_start()))
    }

    pub fn prefix(checked: bool) -> String {
        let indicator = if checked { Self::CHECKED[0] } else { Self::UNCHECKED };
        format!("{}{} ", BulletItem::CANONICAL, indicator)
    }
}

/// Numbered item: one or more digits, a period and a space.
pub struct NumberedItem;

impl NumberedItem {
    pub const TERMINATOR: &'static str = ". ";
    /// Every numbered item is re-emitted with this marker; there is no running counter.
    pub const CANONICAL: &'static str = "1. ";

    pub fn strip_marker(trimmed: &str) -> Option<&str> {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = &trimmed[digits..];
        if rest == Self::TERMINATOR.trim_end() {
            return Some("");
        }
        rest.strip_prefix(Self::TERMINATOR)
    }
}
