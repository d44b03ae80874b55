// spatialmedia-cli/src/long_only.rs
//
// Single-dash long options.
//
// The tool has always accepted `-projection cubemap` and `-crop=...` next to
// the double-dash forms. clap only understands `--name`, so tokens are
// rewritten before parsing: a single-dash token whose name part (at least two
// characters, up to '=') is an exact or unique prefix of a long option
// becomes `--<long>`. Everything else is left alone, including short clusters
// such as `-ia`, option values and anything after `--`.

use crate::options::{self, OptionAction, OptionSpec};

/// Rewrites single-dash long options into double-dash form.
///
/// The first element is the program name and is never touched. The output
/// always has as many elements as the input.
pub fn normalize(args: Vec<String>) -> Vec<String> {
    let mut normalized = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();
    normalized.extend(iter.next());

    let mut value_pending = false;
    let mut operands_only = false;

    for token in iter {
        if operands_only || value_pending {
            value_pending = false;
            normalized.push(token);
            continue;
        }
        if token == "--" {
            operands_only = true;
            normalized.push(token);
            continue;
        }

        let token = rewrite(token);
        value_pending = expects_separate_value(&token);
        normalized.push(token);
    }

    normalized
}

/// True when a help spelling appears in option position of `args`
/// (already normalized, program name first).
///
/// Option values and everything after `--` are skipped. The scan does not
/// depend on the rest of the line being valid, so help still wins over an
/// unknown option or a missing value.
pub fn requests_help(args: &[String]) -> bool {
    let mut value_pending = false;

    for token in args.iter().skip(1) {
        if value_pending {
            value_pending = false;
            continue;
        }
        if token == "--" {
            return false;
        }

        if let Some(long) = token.strip_prefix("--") {
            let name = long.split_once('=').map_or(long, |(name, _)| name);
            if options::resolve_long(name).is_some_and(is_help) {
                return true;
            }
        } else if let Some(cluster) = token.strip_prefix('-') {
            let mut chars = cluster.chars();
            while let Some(c) = chars.next() {
                match options::find_short(c) {
                    Some(spec) if is_help(spec) => return true,
                    // the rest of the cluster is this option's value
                    Some(spec) if spec.takes_value() => break,
                    _ => continue,
                }
            }
        }

        value_pending = expects_separate_value(token);
    }

    false
}

fn is_help(spec: &OptionSpec) -> bool {
    matches!(spec.action, OptionAction::Help)
}

fn rewrite(token: String) -> String {
    let Some(body) = token.strip_prefix('-') else {
        return token;
    };
    if body.starts_with('-') {
        return token;
    }

    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    if name.chars().count() < 2 {
        return token;
    }

    match options::resolve_long(name) {
        Some(spec) => match value {
            Some(value) => format!("--{}={}", spec.long, value),
            None => format!("--{}", spec.long),
        },
        None => token,
    }
}

/// True when the token is an option whose value is the next token.
fn expects_separate_value(token: &str) -> bool {
    if let Some(long) = token.strip_prefix("--") {
        if long.contains('=') {
            return false;
        }
        return options::resolve_long(long).is_some_and(OptionSpec::takes_value);
    }

    let Some(cluster) = token.strip_prefix('-') else {
        return false;
    };
    let mut chars = cluster.chars();
    while let Some(c) = chars.next() {
        match options::find_short(c) {
            Some(spec) if spec.takes_value() => return chars.as_str().is_empty(),
            Some(_) => continue,
            None => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        std::iter::once("spatialmedia")
            .chain(tokens.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_single_dash_long_options_are_rewritten() {
        assert_eq!(
            normalize(args(&["-projection", "cubemap", "-crop=1:2:3:4:5:6"])),
            args(&["--projection", "cubemap", "--crop=1:2:3:4:5:6"])
        );
    }

    #[test]
    fn test_unique_prefixes_expand() {
        assert_eq!(
            normalize(args(&["-proj", "cubemap", "-inj"])),
            args(&["--projection", "cubemap", "--inject"])
        );
    }

    #[test]
    fn test_short_clusters_are_untouched() {
        assert_eq!(normalize(args(&["-ia", "-h"])), args(&["-ia", "-h"]));
        // 'st' is ambiguous between stereo and stitching-software
        assert_eq!(normalize(args(&["-st"])), args(&["-st"]));
    }

    #[test]
    fn test_values_are_never_rewritten() {
        assert_eq!(
            normalize(args(&["--stitching-software", "-crop", "-s", "-inject"])),
            args(&["--stitching-software", "-crop", "-s", "-inject"])
        );
        assert_eq!(
            normalize(args(&["-ac", "-stereo"])),
            args(&["-ac", "-stereo"])
        );
    }

    #[test]
    fn test_attached_short_value_does_not_consume_next_token() {
        assert_eq!(
            normalize(args(&["-c1:2:3:4:5:6", "-inject"])),
            args(&["-c1:2:3:4:5:6", "--inject"])
        );
    }

    #[test]
    fn test_double_dash_ends_rewriting() {
        assert_eq!(
            normalize(args(&["--", "-inject", "out.mp4"])),
            args(&["--", "-inject", "out.mp4"])
        );
    }

    #[test]
    fn test_requests_help_in_option_position() {
        assert!(requests_help(&args(&["-h"])));
        assert!(requests_help(&args(&["-i", "-?"])));
        assert!(requests_help(&args(&["-ah"])));
        assert!(requests_help(&args(&["--he"])));
        assert!(requests_help(&args(&["-h", "--bogus"])));
        assert!(requests_help(&args(&["-h", "-s"])));
    }

    #[test]
    fn test_requests_help_skips_values_and_operands() {
        assert!(!requests_help(&args(&["-i", "in.mp4", "out.mp4"])));
        assert!(!requests_help(&args(&["--stereo", "-h"])));
        assert!(!requests_help(&args(&["-s-h"])));
        assert!(!requests_help(&args(&["--stitching-software=-h"])));
        assert!(!requests_help(&args(&["--", "-h"])));
    }

    #[test]
    fn test_program_name_and_length_preserved() {
        let input = args(&["-inject", "in.mp4", "out.mp4"]);
        let output = normalize(input.clone());
        assert_eq!(output.len(), input.len());
        assert_eq!(output[0], "spatialmedia");
    }
}
