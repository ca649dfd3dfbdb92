/// Bold emphasis, `**strong**`.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";
}

/// Italic emphasis, `*em*` or `_em_`.
///
/// Star runs before underscore; both run after [`Bold`] so a `**` pair is
/// never read as two empty italic spans.
pub struct Italic;

impl Italic {
    pub const STAR: &'static str = "*";
    pub const UNDERSCORE: &'static str = "_";
}
