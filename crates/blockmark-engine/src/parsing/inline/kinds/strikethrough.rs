/// Strikethrough delimited by double tildes: `~~gone~~`.
pub struct Strikethrough;

impl Strikethrough {
    pub const TILDE: u8 = b'~';
    pub const DELIM: &'static [u8; 2] = b"~~";
}
