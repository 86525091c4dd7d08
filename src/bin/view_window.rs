use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat};
use stabping_view::{
    logging, records_in_window, segments, IndexFile, Record, RecordReader, SENTINEL_ERROR,
    SENTINEL_NODATA,
};
use std::collections::BTreeSet;
use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;

const USAGE: &str =
    "Usage: view-window [--from=SECS] [--to=SECS] [--index=PATH] [--segments] [--] <file.dat>";

struct Args {
    file_path: PathBuf,
    lower: i32,
    upper: i32,
    index_path: Option<PathBuf>,
    show_segments: bool,
}

fn main() {
    logging::init();

    let args = match parse_args(env::args_os().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = try_main(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

// Flags must be UTF-8; the data path may be any OS string.
fn parse_args<I: Iterator<Item = OsString>>(raw: I) -> std::result::Result<Args, String> {
    let mut file_path = None;
    let mut lower = i32::MIN;
    let mut upper = i32::MAX;
    let mut index_path = None;
    let mut show_segments = false;
    let mut flags_done = false;

    for arg in raw {
        let flag = if flags_done { None } else { arg.to_str().filter(|s| s.starts_with("--")) };
        match flag {
            None => {
                if file_path.is_some() {
                    return Err(format!("Unexpected argument {}", arg.to_string_lossy()));
                }
                file_path = Some(PathBuf::from(arg));
            }
            Some("--") => flags_done = true,
            Some("--segments") => show_segments = true,
            Some(s) if s.starts_with("--from=") => lower = parse_bound(s, "--from=")?,
            Some(s) if s.starts_with("--to=") => upper = parse_bound(s, "--to=")?,
            Some(s) if s.starts_with("--index=") => {
                index_path = Some(PathBuf::from(s.trim_start_matches("--index=")));
            }
            Some(s) => return Err(format!("Unknown option {}", s)),
        }
    }

    let file_path = file_path.ok_or_else(|| "Missing data file".to_string())?;
    Ok(Args {
        file_path,
        lower,
        upper,
        index_path,
        show_segments,
    })
}

fn parse_bound(arg: &str, prefix: &str) -> std::result::Result<i32, String> {
    arg.trim_start_matches(prefix)
        .parse()
        .map_err(|e| format!("Invalid {}: {}", arg, e))
}

fn try_main(args: Args) -> Result<()> {
    let index = match &args.index_path {
        Some(p) => Some(
            IndexFile::from_path(p).with_context(|| format!("loading index {}", p.display()))?,
        ),
        None => None,
    };

    let records = RecordReader::open(&args.file_path)
        .and_then(|mut r| r.read_and_collect())
        .with_context(|| format!("reading {}", args.file_path.display()))?;
    let window = records_in_window(&records, args.lower, args.upper);
    debug!(
        total = records.len(),
        selected = window.len(),
        lower = args.lower,
        upper = args.upper,
        "window selected"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.show_segments {
        write_segments(&mut out, window, index.as_ref())?;
    } else {
        for record in window {
            write_record(&mut out, record, index.as_ref())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn format_time(time: i32) -> String {
    DateTime::from_timestamp(i64::from(time), 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| time.to_string())
}

fn label(index: Option<&IndexFile>, i: i32) -> String {
    index
        .and_then(|idx| idx.get_addr(i))
        .map(str::to_owned)
        .unwrap_or_else(|| format!("#{}", i))
}

fn write_record<W: Write>(out: &mut W, record: &Record, index: Option<&IndexFile>) -> io::Result<()> {
    let value = match record.value {
        SENTINEL_NODATA => "nodata".to_string(),
        SENTINEL_ERROR => "error".to_string(),
        v => v.to_string(),
    };
    writeln!(out, "{} {} {}", format_time(record.time), label(index, record.index), value)
}

fn write_segments<W: Write>(out: &mut W, window: &[Record], index: Option<&IndexFile>) -> io::Result<()> {
    let order: Vec<i32> = match index {
        Some(idx) => idx.indices(),
        None => window
            .iter()
            .map(|r| r.index)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
    };

    let header: Vec<String> = order.iter().map(|&i| label(index, i)).collect();
    writeln!(out, "time\t{}", header.join("\t"))?;

    for seg in segments(window, &order) {
        let cells: Vec<String> = seg
            .values
            .iter()
            .map(|&v| match v {
                SENTINEL_NODATA => "-".to_string(),
                SENTINEL_ERROR => "!".to_string(),
                v => v.to_string(),
            })
            .collect();
        writeln!(out, "{}\t{}", format_time(seg.time), cells.join("\t"))?;
    }
    Ok(())
}
