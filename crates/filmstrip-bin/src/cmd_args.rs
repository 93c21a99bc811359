use std::ffi::OsString;

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum MmapOptions
{
    No,
    Always,
    Auto
}

impl ValueEnum for MmapOptions
{
    fn value_variants<'a>() -> &'a [Self]
    {
        &[Self::No, Self::Auto, Self::Always]
    }

    fn to_possible_value(&self) -> Option<PossibleValue>
    {
        Some(match self
        {
            Self::No => PossibleValue::new("no"),
            Self::Always => PossibleValue::new("always"),
            Self::Auto => PossibleValue::new("auto")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("filmstrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Carry any file as a sequence of grayscale PNG images")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("mmap")
            .long("mmap")
            .help_heading("ADVANCED")
            .help("Influence the use of memory maps")
            .long_help("Change use of memory maps and how they are used for reading input files.\nMemory maps are preferred for large files to keep memory usage low.")
            .value_parser(value_parser!(MmapOptions))
            .global(true))
        .args(add_logging_options())
        .subcommand(Command::new("encode")
            .about("Encode a file into a ZIP bundle of grayscale PNG images")
            .arg(Arg::new("in")
                .short('i')
                .long("input")
                .help("Input file to encode")
                .value_parser(value_parser!(OsString))
                .required(true))
            .arg(Arg::new("out")
                .short('o')
                .long("out")
                .help("Bundle to write, defaults to <stem>_images.zip beside the input")
                .value_parser(value_parser!(OsString)))
            .arg(Arg::new("frame-side")
                .long("frame-side")
                .help("Side length of the square frames")
                .value_parser(value_parser!(usize))))
        .subcommand(Command::new("decode")
            .about("Reconstruct the original file from a bundle or loose PNG images")
            .arg(Arg::new("in")
                .short('i')
                .long("input")
                .help("A ZIP bundle, a directory of PNG images, or the images themselves in order")
                .action(ArgAction::Append)
                .value_parser(value_parser!(OsString))
                .required(true))
            .arg(Arg::new("out")
                .short('o')
                .long("out")
                .help("File or directory to write the reconstruction to")
                .value_parser(value_parser!(OsString)))
            .arg(Arg::new("frame-side")
                .long("frame-side")
                .help("Side length the frames are expected to have")
                .value_parser(value_parser!(usize)))
            .arg(Arg::new("ignore-metadata")
                .long("ignore-metadata")
                .help("Skip the _metadata.json entry entirely, even when it is malformed")
                .action(ArgAction::SetTrue))
            .arg(Arg::new("strict-tail")
                .long("strict-tail")
                .help("Reject truncated sequences instead of zero filling the missing tail")
                .action(ArgAction::SetTrue))
            .arg(Arg::new("max-file-size")
                .long("max-file-size")
                .help("Largest payload size in bytes the embedded prefix may claim")
                .value_parser(value_parser!(u64))))
}

fn add_logging_options() -> [Arg; 3]
{
    [
        Arg::new("debug")
            .long("debug")
            .help_heading("LOGGING")
            .help("Display debug information and higher")
            .action(ArgAction::SetTrue)
            .global(true),
        Arg::new("trace")
            .long("trace")
            .help_heading("LOGGING")
            .help("Display very verbose information")
            .action(ArgAction::SetTrue)
            .global(true),
        Arg::new("quiet")
            .long("quiet")
            .help_heading("LOGGING")
            .help("Only display errors")
            .action(ArgAction::SetTrue)
            .global(true)
    ]
}

pub fn setup_logger(options: &ArgMatches)
{
    let level = if options.get_flag("trace")
    {
        LevelFilter::Trace
    }
    else if options.get_flag("debug")
    {
        LevelFilter::Debug
    }
    else if options.get_flag("quiet")
    {
        LevelFilter::Error
    }
    else
    {
        LevelFilter::Info
    };

    SimpleLogger::new()
        .with_colors(true)
        .with_level(level)
        .init()
        .unwrap();
}
