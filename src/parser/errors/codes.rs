//! Syntax error codes
//!
//! Codes are grouped by the hundreds digit:
//! - E01xx: lexical
//! - E02xx: structural (stray lines, unterminated blocks)
//! - E05xx: import lines
//! - E06xx: QnA blocks

use std::fmt;

macro_rules! error_codes {
    ($($(#[$doc:meta])* $code:ident: $category:literal, $message:literal;)*) => {
        /// Categorized code carried by every syntax error
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $($(#[$doc])* $code,)*
        }

        impl ErrorCode {
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$code),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$code => stringify!($code),)*
                }
            }

            /// Group name, e.g. `"import"` for `E0501`
            pub fn category(&self) -> &'static str {
                match self {
                    $(Self::$code => $category,)*
                }
            }

            /// Message used when the parser supplies none
            pub fn default_message(&self) -> &'static str {
                match self {
                    $(Self::$code => $message,)*
                }
            }
        }
    };
}

error_codes! {
    /// Input the lexer could not classify
    E0101: "lexical", "invalid character";
    /// Answer fence opened but never closed
    E0201: "structural", "unterminated answer block";
    /// Line that belongs to no section
    E0202: "structural", "unexpected line outside of any section";
    /// Import line not of the shape `[description](path)`
    E0501: "import", "invalid import line";
    /// Import path missing its closing `)`
    E0502: "import", "unclosed import path";
    /// `# ?` header without question text
    E0601: "qna", "missing question";
    /// Filter line without `=`
    E0602: "qna", "invalid filter line";
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
