#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::student::ScoreEntry;

peg::parser! {
    /// includes grammars for subject files and command-line score entries.
    pub grammar parser() for str {
        /// matches any sequence of 1 or more numbers, optionally negative
        rule integer() -> i64
            = n:$("-"? ['0'..='9']+) {? n.parse().or(Err("i64")) }

        /// matches a decimal number such as `80`, `77.5` or `.5`
        rule decimal() -> f64
            = n:$(("-"? ['0'..='9']+ ("." ['0'..='9']*)?) / ("-"? "." ['0'..='9']+))
            {? n.parse().or(Err("f64")) }

        /// matches spaces and tabs
        rule whitespace() = quiet!{[' ' | '\t']+}

        /// matches a single line terminator
        rule line_end() = "\r\n" / "\n" / "\r"

        /// matches `""` (an escaped quote) or anything but a quote
        rule quoted_char() -> char
            = "\"\"" { '"' }
            / c:[^'"'] { c }

        /// matches a double-quoted field, which may span commas and lines.
        /// Text between the closing quote and the next separator is appended,
        /// so `"Ma"th` reads as `Math`.
        rule quoted_field() -> String
            = "\"" c:quoted_char()* "\"" rest:$([^',' | '\r' | '\n']*)
            {
                let mut field = c.into_iter().collect::<String>();
                field.push_str(rest);
                field
            }

        /// matches an unquoted field, possibly empty. A field opening with a
        /// quote that never closes matches neither rule.
        rule bare_field() -> String
            = !"\"" f:$([^',' | '\r' | '\n']*) { f.to_string() }

        /// matches one field of a record
        rule field() -> String
            = quoted_field() / bare_field()

        /// parses the first record of a comma separated document, every field
        /// is kept verbatim. Anything after the first line terminator is ignored.
        pub rule first_record() -> Vec<String>
            = ![_] { Vec::new() }
            / line_end() [_]* { Vec::new() }
            / f:(field() ++ ",") (line_end() [_]*)? { f }

        /// parses `SUBJECT:GRADE:RESULT`, eg. `Math:4:80`
        pub rule score_entry() -> ScoreEntry
            = subject:$([^':']+)
              ":"
              whitespace()? grade:integer() whitespace()?
              ":"
              whitespace()? test_result:decimal() whitespace()?
            { ScoreEntry::new(subject, grade, test_result) }
    }
}
