// spatialmedia-cli/src/options.rs
//
// Declarative option table and the clap command generated from it.
//
// Each record names a flag's short and long spellings, whether it takes a
// value, and the handler that folds it into a ConfigurationBuilder. The
// parser walks this table; nothing else knows about individual options.

use clap::{Arg, ArgAction, Command};
use spatialmedia_core::{ConfigResult, ConfigurationBuilder, Crop, Projection, StereoMode};

/// Argument id under which operands (input/output files) are collected.
pub const FILES_ID: &str = "files";

/// What an option does when it appears on the command line.
#[derive(Clone, Copy)]
pub enum OptionAction {
    /// Print the help listing and stop.
    Help,
    /// Switch without a value.
    Flag(fn(ConfigurationBuilder) -> ConfigurationBuilder),
    /// Option taking one required value.
    Value(fn(ConfigurationBuilder, &str) -> ConfigResult<ConfigurationBuilder>),
}

/// One row of the option table.
pub struct OptionSpec {
    pub id: &'static str,
    pub short: Option<char>,
    pub short_aliases: &'static [char],
    pub long: &'static str,
    pub value_name: Option<&'static str>,
    pub action: OptionAction,
}

impl OptionSpec {
    pub fn takes_value(&self) -> bool {
        matches!(self.action, OptionAction::Value(_))
    }

    fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.id).long(self.long);
        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        if !self.short_aliases.is_empty() {
            arg = arg.short_aliases(self.short_aliases.iter().copied());
        }
        match self.action {
            // counted so that repeating a switch is never an error
            OptionAction::Help | OptionAction::Flag(_) => arg.action(ArgAction::Count),
            // getopt hands over the next token verbatim, even when it starts with '-'
            OptionAction::Value(_) => arg
                .value_name(self.value_name.unwrap_or(self.id))
                .num_args(1)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        }
    }
}

/// Every option understood by `spatialmedia`.
pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        id: "help",
        short: Some('h'),
        short_aliases: &['?'],
        long: "help",
        value_name: None,
        action: OptionAction::Help,
    },
    OptionSpec {
        id: "inject",
        short: Some('i'),
        short_aliases: &[],
        long: "inject",
        value_name: None,
        action: OptionAction::Flag(|builder| builder.inject(true)),
    },
    OptionSpec {
        id: "projection",
        short: Some('p'),
        short_aliases: &[],
        long: "projection",
        value_name: Some("PROJECTION"),
        action: OptionAction::Value(|builder, value| {
            Ok(builder.projection(Projection::from_arg(value)))
        }),
    },
    OptionSpec {
        id: "stitching-software",
        short: Some('t'),
        short_aliases: &[],
        long: "stitching-software",
        value_name: Some("STITCHING_SOFTWARE"),
        action: OptionAction::Value(|builder, value| Ok(builder.stitching_software(value))),
    },
    OptionSpec {
        id: "stereo",
        short: Some('s'),
        short_aliases: &[],
        long: "stereo",
        value_name: Some("STEREO-MODE"),
        action: OptionAction::Value(|builder, value| {
            Ok(builder.stereo_mode(StereoMode::from_arg(value)))
        }),
    },
    OptionSpec {
        id: "crop",
        short: Some('c'),
        short_aliases: &[],
        long: "crop",
        value_name: Some("CROP"),
        action: OptionAction::Value(|builder, value| Ok(builder.crop(Crop::parse(value)?))),
    },
    OptionSpec {
        id: "spatial-audio",
        short: Some('a'),
        short_aliases: &[],
        long: "spatial-audio",
        value_name: None,
        action: OptionAction::Flag(|builder| builder.spatial_audio(true)),
    },
];

/// Looks up an option by its short spelling or one of its short aliases.
pub fn find_short(c: char) -> Option<&'static OptionSpec> {
    OPTIONS
        .iter()
        .find(|spec| spec.short == Some(c) || spec.short_aliases.contains(&c))
}

/// Resolves a long option name the way getopt does: an exact match wins,
/// otherwise the name must be a prefix of exactly one option.
pub fn resolve_long(name: &str) -> Option<&'static OptionSpec> {
    if name.is_empty() {
        return None;
    }
    if let Some(exact) = OPTIONS.iter().find(|spec| spec.long == name) {
        return Some(exact);
    }
    let mut candidates = OPTIONS.iter().filter(|spec| spec.long.starts_with(name));
    match (candidates.next(), candidates.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

/// Builds the clap command from [`OPTIONS`].
///
/// clap's own help and version handling is disabled: the help listing is a
/// fixed text printed by [`crate::help`].
pub fn build_command() -> Command {
    let command = Command::new("spatialmedia")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .infer_long_args(true)
        .arg(
            Arg::new(FILES_ID)
                .value_name("file")
                .num_args(1..)
                .action(ArgAction::Append),
        );

    OPTIONS
        .iter()
        .fold(command, |command, spec| command.arg(spec.to_arg()))
}
