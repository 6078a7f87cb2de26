use anyhow::{bail, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::str::FromStr;
use thiserror::Error;

/// Where the scores end up.
pub enum Destination {
    Terminal,
    File,
}

#[derive(Debug, Error)]
#[error("Invalid output_destination. Use 'terminal' or 'file'.")]
pub struct InvalidDestination;

impl FromStr for Destination {
    type Err = InvalidDestination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(Destination::Terminal),
            "file" => Ok(Destination::File),
            _ => Err(InvalidDestination),
        }
    }
}

/// On-file encoding of the scores. Terminal output ignores this and always
/// uses the labelled form.
pub enum OutputFormat {
    Csv,
    Txt,
}

#[derive(Debug, Error)]
#[error("Invalid output format. Use '--format csv' or '--format txt'.")]
pub struct InvalidFormat;

impl FromStr for OutputFormat {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "txt" => Ok(OutputFormat::Txt),
            _ => Err(InvalidFormat),
        }
    }
}

/// Routes the score list to its destination.
///
/// # Errors
///
/// This function will return an error if:
/// * The destination is neither `terminal` nor `file`.
/// * The destination is `file` but no output path was given.
/// * Writing the scores fails part-way.
///
/// An invalid format and an unopenable output file are reported on standard
/// error but are *not* errors here; see `write_file`.
pub fn route(scores: &[i64], destination: &str, format: &str, output: Option<&str>) -> Result<()> {
    match destination.parse()? {
        Destination::Terminal => {
            let mut stdout = stdout().lock();
            write_labelled(&mut stdout, scores)?;
            stdout.flush()?;
        }
        Destination::File => {
            let path = match output {
                Some(p) if !p.is_empty() => p,
                _ => bail!("Missing output file argument."),
            };
            write_file(scores, path, format)?;
        }
    }
    Ok(())
}

/// Writes the scores to `path` in the requested format.
///
/// The output file is created (and truncated) before the format is checked,
/// so an invalid format still leaves an empty file behind. Both an invalid
/// format and a file that cannot be created are reported but deliberately
/// not fatal, to keep the exit-code behaviour this tool has always had.
pub fn write_file(scores: &[i64], path: &str, format: &str) -> Result<()> {
    let file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            error!("Unable to open the output file.");
            error!("  because: {}", e);
            return Ok(());
        }
    };
    let mut writer = BufWriter::new(file);

    match format.parse::<OutputFormat>() {
        Ok(OutputFormat::Csv) => write_bare(&mut writer, scores)?,
        Ok(OutputFormat::Txt) => write_labelled(&mut writer, scores)?,
        Err(e) => error!("{e}"),
    }

    writer.flush()?;
    Ok(())
}

/// One `Phred Quality Score: <n>` line per score. Used for terminal output
/// and for the `txt` file format.
fn write_labelled(writer: &mut impl Write, scores: &[i64]) -> std::io::Result<()> {
    for score in scores {
        writeln!(writer, "Phred Quality Score: {score}")?;
    }
    Ok(())
}

/// One bare integer per line, a single-column headerless csv.
fn write_bare(writer: &mut impl Write, scores: &[i64]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    for score in scores {
        wtr.serialize(score)?;
    }
    wtr.flush()?;
    Ok(())
}
