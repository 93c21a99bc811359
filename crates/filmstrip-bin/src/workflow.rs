use std::ffi::OsString;
use std::fs::{read, read_dir, write, File};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use filmstrip_bundle::{
    frames_from_named_images, read_bundle, write_bundle, Bundle, BundleReadOptions, NamedImage,
    METADATA_NAME
};
use filmstrip_core::{
    DecoderOptions, EncoderOptions, SequenceDecoder, SequenceEncoder, DEFAULT_FRAME_SIDE
};
use log::{debug, info};
use memmap2::Mmap;

use crate::cmd_args::MmapOptions;
use crate::errors::CliErrors;

pub(crate) fn run(options: &ArgMatches) -> Result<(), CliErrors>
{
    match options.subcommand()
    {
        Some(("encode", args)) => encode_command(args),
        Some(("decode", args)) => decode_command(args),
        _ => Err(CliErrors::Generic(String::from("No command given")))
    }
}

fn mmap_choice(args: &ArgMatches) -> MmapOptions
{
    args.get_one::<MmapOptions>("mmap")
        .copied()
        .unwrap_or(MmapOptions::Auto)
}

fn frame_side(args: &ArgMatches) -> usize
{
    args.get_one::<usize>("frame-side")
        .copied()
        .unwrap_or(DEFAULT_FRAME_SIDE)
}

fn encode_command(args: &ArgMatches) -> Result<(), CliErrors>
{
    let in_file = PathBuf::from(args.get_one::<OsString>("in").unwrap());

    let filename = in_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliErrors::Generic(format!("No file name in input path {in_file:?}")))?;

    // file i/o, mmap unless told otherwise, empty files cannot be mapped
    let mut fd = File::open(&in_file)?;
    let mmap_opt = mmap_choice(args);
    let use_mmap = mmap_opt != MmapOptions::No && fd.metadata()?.len() > 0;

    let mmap;
    let mut buf = Vec::new();

    let data: &[u8] = if use_mmap
    {
        info!("Reading file via memory maps");
        mmap = unsafe { Mmap::map(&fd)? };
        &mmap
    }
    else
    {
        info!("Reading file to memory");
        fd.read_to_end(&mut buf)?;
        &buf
    };

    let options = EncoderOptions::default().set_frame_side(frame_side(args));

    let encoded = SequenceEncoder::new_with_options(data, &filename, options).encode()?;

    info!(
        "Encoded {} byte(s) of {filename} into {} frame(s)",
        data.len(),
        encoded.frames().len()
    );

    let out_file = args
        .get_one::<OsString>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_bundle_path(&in_file));

    let sink = File::create(&out_file)?;
    write_bundle(&encoded, sink)?;

    info!("Wrote bundle to {out_file:?}");

    Ok(())
}

fn decode_command(args: &ArgMatches) -> Result<(), CliErrors>
{
    let inputs: Vec<PathBuf> = args
        .get_many::<OsString>("in")
        .unwrap()
        .map(PathBuf::from)
        .collect();

    let ignore_metadata = args.get_flag("ignore-metadata");

    // a broken manifest should not stop decoding when it is ignored anyway
    let read_options =
        BundleReadOptions::default().set_skip_malformed_metadata(ignore_metadata);

    let bundle = collect_bundle(args, &inputs, read_options)?;

    let (frames, mut manifest) = bundle.into_parts();

    if ignore_metadata
    {
        manifest = None;
    }

    let mut decoder_options = DecoderOptions::default()
        .set_frame_side(frame_side(args))
        .set_tolerate_truncated_tail(!args.get_flag("strict-tail"));

    if let Some(limit) = args.get_one::<u64>("max-file-size")
    {
        decoder_options = decoder_options.set_max_file_size(*limit);
    }

    let mut decoder = SequenceDecoder::new_with_options(&frames, decoder_options);

    if let Some(ref manifest) = manifest
    {
        decoder.set_manifest(manifest);
    }

    let decoded = decoder.decode()?;

    let out_file = match args.get_one::<OsString>("out").map(PathBuf::from)
    {
        Some(path) if path.is_dir() => path.join(decoded.suggested_name()),
        Some(path) => path,
        None => PathBuf::from(decoded.suggested_name())
    };

    write(&out_file, decoded.data())?;

    info!(
        "Reconstructed {} byte(s) into {out_file:?}",
        decoded.data().len()
    );

    Ok(())
}

/// Gather frames from whatever the inputs are: a ZIP bundle, a directory of
/// images, or the image files themselves.
fn collect_bundle(
    args: &ArgMatches, inputs: &[PathBuf], read_options: BundleReadOptions
) -> Result<Bundle, CliErrors>
{
    if inputs.len() == 1 && inputs[0].is_dir()
    {
        debug!("Treating {:?} as a directory of images", inputs[0]);

        let mut images = Vec::new();

        for entry in read_dir(&inputs[0])?
        {
            let path = entry?.path();

            if !path.is_file()
            {
                continue;
            }
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned())
            else
            {
                continue;
            };

            if name == METADATA_NAME || is_png(&path)
            {
                images.push(NamedImage {
                    name,
                    data: read(&path)?
                });
            }
        }

        return Ok(frames_from_named_images(images, read_options)?);
    }

    if inputs.len() == 1 && has_extension(&inputs[0], "zip")
    {
        debug!("Treating {:?} as a ZIP bundle", inputs[0]);

        let mut fd = File::open(&inputs[0])?;
        let mmap_opt = mmap_choice(args);
        let use_mmap = mmap_opt != MmapOptions::No && fd.metadata()?.len() > 0;

        let mmap;
        let mut buf = Vec::new();

        let data: &[u8] = if use_mmap
        {
            info!("Reading bundle via memory maps");
            mmap = unsafe { Mmap::map(&fd)? };
            &mmap
        }
        else
        {
            info!("Reading bundle to memory");
            fd.read_to_end(&mut buf)?;
            &buf
        };

        return Ok(read_bundle(Cursor::new(data), read_options)?);
    }

    debug!("Treating inputs as loose image files");

    let mut images = Vec::new();

    for path in inputs
    {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CliErrors::Generic(format!("No file name in input path {path:?}")))?;

        images.push(NamedImage {
            name,
            data: read(path)?
        });
    }

    Ok(frames_from_named_images(images, read_options)?)
}

/// Bundle path used when none is given, `report.pdf` encodes to
/// `report_images.zip` beside it.
fn default_bundle_path(input: &Path) -> PathBuf
{
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = name.split('.').next().unwrap_or("file");

    input.with_file_name(format!("{stem}_images.zip"))
}

fn is_png(path: &Path) -> bool
{
    has_extension(path, "png")
}

fn has_extension(path: &Path, wanted: &str) -> bool
{
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}
