/// Engine flags applied when compiling a built pattern.
///
/// Rendered as an inline flag group ahead of the pattern text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
}

impl CompileOptions {
    pub fn inline_flags(&self) -> String {
        let flags: String = [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
        ]
        .into_iter()
        .filter_map(|(on, flag)| on.then_some(flag))
        .collect();
        if flags.is_empty() {
            flags
        } else {
            format!("(?{flags})")
        }
    }
}
