//! Rewrite autoheader-style header templates into cmake configuration files.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;

/// Matches a `#undef` template line declaring a configuration symbol
const REGEX_UNDEF_TEMPLATE: &str = r"^#undef ([A-Z0-9_]+)$";

/// Extracts the configuration symbol from a single template line.
///
/// The line may carry its trailing newline; it is ignored for matching.
/// A carriage return is not stripped, so CRLF-terminated lines never match.
fn template_symbol<'a>(undef_regex: &Regex, line: &'a str) -> Option<&'a str> {
    let body = line.strip_suffix('\n').unwrap_or(line);
    undef_regex
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|symbol| symbol.as_str())
}

/// Collects the configuration symbols declared in a header template.
///
/// This function scans the template for `#undef SYMBOL` lines and returns
/// the symbol names in input order, duplicates preserved. Only lines that
/// [`rewrite_template`] would rewrite are reported.
///
/// # Arguments
///
/// * `content` - Content of the header template to scan
///
/// # Returns
///
/// The symbol names of all `#undef` template lines
pub fn config_symbols(content: &str) -> Vec<String> {
    let undef_regex = Regex::new(REGEX_UNDEF_TEMPLATE).unwrap();

    content
        .split_inclusive('\n')
        .filter_map(|line| template_symbol(&undef_regex, line))
        .map(|symbol| symbol.to_string())
        .collect()
}

/// Rewrites `#undef` template lines into cmake configuration directives.
///
/// This function processes the template strictly line by line:
/// 1. a line of the exact form `#undef SYMBOL`, with the symbol drawn from
///    uppercase letters, digits and underscore, becomes
///    `#cmakedefine SYMBOL @SYMBOL@` followed by a newline.
/// 2. every other line is copied through byte-identical, including its
///    original line terminator (or lack of one on the final line).
///
/// Line order and line count are preserved. Commented-out or indented
/// `#undef` lines, lowercase symbols and trailing junk all fail the anchored
/// match and pass through verbatim.
///
/// # Arguments
///
/// * `content` - Content of the header template to rewrite
///
/// # Returns
///
/// The rewritten template content
pub fn rewrite_template(content: &str) -> String {
    let undef_regex = Regex::new(REGEX_UNDEF_TEMPLATE).unwrap();

    let mut rewritten = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        match template_symbol(&undef_regex, line) {
            Some(symbol) => {
                rewritten.push_str("#cmakedefine ");
                rewritten.push_str(symbol);
                rewritten.push_str(" @");
                rewritten.push_str(symbol);
                rewritten.push_str("@\n");
            }
            None => rewritten.push_str(line),
        }
    }
    rewritten
}

/// Rewrites a header template file into a cmake configuration file.
///
/// Reads the template at `input`, applies [`rewrite_template`] and writes
/// the result to `output`, creating or truncating it as needed. Both files
/// are closed when this function returns, on success and on error alike.
///
/// # Arguments
///
/// * `input` - Path to the header template to read
/// * `output` - Path to the cmake configuration file to write
pub fn rewrite_template_file(input: &Path, output: &Path) -> io::Result<()> {
    let content = fs::read_to_string(input)?;
    fs::write(output, rewrite_template(&content))
}
