//! Argument forwarding.
//!
//! The launcher hands its arguments to the target as one parameter string:
//! every argument wrapped in double quotes and followed by a single space.
//! Embedded quotes and backslashes are not escaped, so an argument that
//! contains a `"` is re-split by the target's command-line parser.

/// Build the parameter string for the target.
///
/// # Example
///
/// ```
/// use netlaunch::launch::quote_args;
///
/// let args = vec!["-p".to_string(), "C:\\My Projects".to_string()];
/// assert_eq!(quote_args(&args), "\"-p\" \"C:\\My Projects\" ");
/// assert_eq!(quote_args::<&str>(&[]), "");
/// ```
pub fn quote_args<S: AsRef<str>>(args: &[S]) -> String {
    let mut out = String::new();
    for arg in args {
        out.push('"');
        out.push_str(arg.as_ref());
        out.push_str("\" ");
    }
    out
}

/// Split a parameter string back into arguments.
///
/// Double quotes toggle quoting and are dropped, whitespace outside
/// quotes separates arguments. A quoted empty string yields an empty
/// argument. Used where no shell parses the string for us.
pub fn split_forwarded(params: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut in_quotes = false;

    for c in params.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    args.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }

    if started {
        args.push(current);
    }

    args
}
