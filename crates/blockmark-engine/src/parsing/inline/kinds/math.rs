/// Inline math formula delimited by single dollar signs: `$x^2$`.
pub struct Math;

impl Math {
    pub const DOLLAR: u8 = b'$';
    pub const DELIM: &'static [u8; 1] = b"$";
    /// A doubled dollar is literal text, never an (empty) formula.
    pub const DOUBLED: &'static [u8; 2] = b"$$";
}
