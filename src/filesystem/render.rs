use std::str::FromStr;

use colored::Colorize;
use snafu::Snafu;

use crate::filesystem::DirectoryView;

/// Indentation unit emitted once per depth level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(width) => " ".repeat(*width),
        }
    }
}

impl FromStr for Indent {
    type Err = IndentParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("tab") {
            return Ok(Indent::Tab);
        }
        match value.parse::<usize>() {
            Ok(width) if width > 0 => Ok(Indent::Spaces(width)),
            _ => Err(IndentParseError::InvalidIndent {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum IndentParseError {
    #[snafu(display(
        "Invalid indent '{}': expected 'tab' or a positive number of spaces",
        value
    ))]
    InvalidIndent { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub indent: Indent,
    /// Paint directory names with ANSI colors
    pub colorize: bool,
}

/// Writes `directory` and its subtree into `output`, one line per node.
///
/// Files of a directory come first, then its subdirectories, each one level
/// deeper than the directory itself.
pub(crate) fn render_directory(
    output: &mut String,
    directory: DirectoryView<'_>,
    depth: usize,
    options: &RenderOptions,
) {
    let unit = options.indent.unit();
    let mut stack = vec![(directory, depth)];

    while let Some((directory, depth)) = stack.pop() {
        push_line(
            output,
            &unit,
            depth,
            &directory_label(directory.name(), options.colorize),
        );

        for file in directory.files() {
            push_line(output, &unit, depth + 1, file.name());
        }

        let children: Vec<_> = directory.directories().collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }
}

fn directory_label(name: &str, colorize: bool) -> String {
    if colorize {
        name.blue().bold().to_string()
    } else {
        name.to_string()
    }
}

fn push_line(output: &mut String, unit: &str, depth: usize, text: &str) {
    output.push_str(&unit.repeat(depth));
    output.push_str(text);
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("tab", Indent::Tab)]
    #[case("TAB", Indent::Tab)]
    #[case("2", Indent::Spaces(2))]
    #[case("4", Indent::Spaces(4))]
    fn indent_parses_valid_values(#[case] input: &str, #[case] expected: Indent) {
        assert_eq!(input.parse::<Indent>().unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("tabs")]
    #[case("")]
    fn indent_rejects_invalid_values(#[case] input: &str) {
        let result = input.parse::<Indent>();
        assert!(matches!(
            result,
            Err(IndentParseError::InvalidIndent { value }) if value == input
        ));
    }

    #[test]
    fn indent_units() {
        assert_eq!(Indent::Tab.unit(), "\t");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
    }

    #[test]
    fn push_line_repeats_unit_per_depth() {
        let mut output = String::new();
        push_line(&mut output, "--", 3, "name");
        assert_eq!(output, "------name\n");
    }

    #[test]
    fn directory_label_is_plain_without_color() {
        assert_eq!(directory_label("docs", false), "docs");
    }
}
