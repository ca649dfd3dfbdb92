/// Code span inline type with owned delimiter constant.
///
/// The code pass runs last, so delimiters inside backticks have already been
/// interpreted by the emphasis passes.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
