//! Shell quoting for generated command lines.

/// Characters that force an argument into double quotes, besides whitespace.
const QUOTE_TRIGGERS: &[char] = &['"', '\'', '<', '>', '|', '&', ';'];

fn needs_quoting(arg: &str) -> bool {
    arg.chars()
        .any(|c| c.is_whitespace() || QUOTE_TRIGGERS.contains(&c))
}

/// Quote `arg` for a POSIX-ish shell.
///
/// Arguments that need quoting are wrapped in double quotes with every `\`
/// and `"` escaped. Everything else is returned verbatim.
///
/// # Examples
///
/// ```
/// use mcpverse::install::quote_arg;
///
/// assert_eq!(quote_arg("hello"), "hello");
/// assert_eq!(quote_arg("hello world"), "\"hello world\"");
/// assert_eq!(quote_arg(r#"say "hi""#), r#""say \"hi\"""#);
/// ```
pub fn quote_arg(arg: &str) -> String {
    if !needs_quoting(arg) {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '\\' || c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Join `command` and its quoted arguments with single spaces.
pub fn join_command_line(command: &str, args: &[String]) -> String {
    std::iter::once(command.to_string())
        .chain(args.iter().map(|arg| quote_arg(arg)))
        .collect::<Vec<_>>()
        .join(" ")
}
