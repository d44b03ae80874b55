// spatialmedia-cli/src/parser.rs
//
// Turns the process argument vector into a spatialmedia-core Configuration.
//
// Responsibilities:
// - Normalizing single-dash long options before clap sees them.
// - Giving help priority over every other option.
// - Applying each option's handler from the option table, per occurrence,
//   so the last occurrence wins and a malformed crop anywhere is fatal.
// - Deriving input/output paths from the tail of the argument vector.

use std::process;

use log::{debug, trace};
use spatialmedia_core::{Configuration, ConfigurationBuilder};

use crate::error::{CliError, CliResult};
use crate::long_only;
use crate::options::{self, FILES_ID, OPTIONS, OptionAction};

/// Parses `args` (program name first) into a Configuration.
///
/// # Errors
///
/// - [`CliError::UsageRequested`] when a help flag is present.
/// - [`CliError::UnrecognizedOption`] for anything clap rejects.
/// - [`CliError::Config`] when a crop argument is malformed.
pub fn try_parse<I, T>(args: I) -> CliResult<Configuration>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let argc = args.len();
    let args = long_only::normalize(args);
    trace!("Arguments after long option normalization: {:?}", args);

    // help wins even when clap would reject something else on the line
    if long_only::requests_help(&args) {
        return Err(CliError::UsageRequested);
    }

    let matches = options::build_command()
        .try_get_matches_from(args.iter())
        .map_err(|err| CliError::UnrecognizedOption(first_line(&err)))?;

    let mut builder = ConfigurationBuilder::new();
    for spec in OPTIONS {
        match spec.action {
            OptionAction::Help => {}
            OptionAction::Flag(apply) => {
                if matches.get_count(spec.id) > 0 {
                    debug!("Option --{} set", spec.long);
                    builder = apply(builder);
                }
            }
            OptionAction::Value(apply) => {
                for value in matches.get_many::<String>(spec.id).into_iter().flatten() {
                    debug!("Option --{} = {:?}", spec.long, value);
                    builder = apply(builder, value)?;
                }
            }
        }
    }

    let files: Vec<String> = matches
        .get_many::<String>(FILES_ID)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let (input, output) = operand_paths(argc, &files);
    debug!("Input file: {:?}, output file: {:?}", input, output);

    if let Some(input) = input {
        builder = builder.input_path(input);
    }
    if let Some(output) = output {
        builder = builder.output_path(output);
    }

    Ok(builder.build())
}

/// Parses `args` into a Configuration, or reports and exits.
///
/// Help exits with status 0 after printing the listing. Unrecognized
/// options print the listing and a malformed crop prints a targeted
/// diagnostic; both exit with status 2.
pub fn parse<I, T>(args: I) -> Configuration
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    match try_parse(args) {
        Ok(config) => config,
        Err(err) => {
            debug!("No configuration produced: {}", err);
            err.report();
            process::exit(err.exit_code());
        }
    }
}

/// Picks input and output paths from the tail of the argument vector.
///
/// getopt permutes operands to the end of argv, so counting from the end of
/// argv is counting from the end of the operand list. `argc` includes the
/// program name: more than two arguments yield an input path (second to
/// last), more than three also an output path (last). A slot that falls on an
/// option token rather than an operand stays empty, so an output path can be
/// present without an input path (`-i -a in.mp4` yields only an output).
fn operand_paths(argc: usize, files: &[String]) -> (Option<&str>, Option<&str>) {
    let from_end = |n: usize| {
        files
            .len()
            .checked_sub(n)
            .map(|index| files[index].as_str())
            .filter(|path| !path.is_empty())
    };

    let input = if argc > 2 { from_end(2) } else { None };
    let output = if argc > 3 { from_end(1) } else { None };
    (input, output)
}

/// First line of a clap error, without its "error: " prefix.
fn first_line(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
