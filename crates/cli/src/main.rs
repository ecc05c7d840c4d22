use anyhow::{bail, Context};
use hexmap::{rect, timed, AxialPoint, CartesianPoint, HexMap, Rect};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for laying items out on a hexagonal grid via the hexmap library.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexmap")]
struct Opt {
    /// Path to a file with one item per line. Blank lines are skipped.
    #[structopt(short, long)]
    input: Option<PathBuf>,

    /// Lay out this many numbered placeholder items instead of reading a file
    #[structopt(short = "n", long)]
    count: Option<usize>,

    /// How to assign grid positions to items. Supported layouts:
    ///
    /// spiral - wind outward from --center, filling ring after ring
    ///
    /// rows - fill fixed-width rows left to right starting at --origin
    #[structopt(short, long, default_value = "spiral")]
    layout: Layout,

    /// Center of the spiral layout, as `q,r` axial coordinates
    #[structopt(long, default_value = "0,0", parse(try_from_str = parse_axial))]
    center: AxialPoint,

    /// Top-left corner of the rows layout, as `col,row` grid coordinates
    #[structopt(
        long,
        default_value = "0,0",
        parse(try_from_str = parse_cartesian)
    )]
    origin: CartesianPoint,

    /// Number of columns in the rows layout
    #[structopt(long, default_value = "10")]
    columns: usize,

    /// The format to print the materialized grid in. Supported formats:
    ///
    /// text - fixed-width cells, odd rows indented by half a cell
    ///
    /// json - the grid as an array of rows, holes as null
    #[structopt(short = "f", long, default_value = "text")]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Strategies for assigning grid positions to a flat run of items.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum Layout {
    /// Wind outward from the center: first item in the middle, the next six
    /// on the surrounding ring, and so on
    Spiral,
    /// Fill fixed-width rows left to right, top to bottom
    Rows,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    /// Print the grid as padded text cells
    Text,
    /// Print the grid as a JSON array of rows
    Json,
}

fn parse_pair(s: &str) -> anyhow::Result<(i32, i32)> {
    let mut parts = s.splitn(2, ',');
    match (parts.next(), parts.next()) {
        (Some(a), Some(b)) => Ok((
            a.trim()
                .parse()
                .with_context(|| format!("invalid integer {:?}", a.trim()))?,
            b.trim()
                .parse()
                .with_context(|| format!("invalid integer {:?}", b.trim()))?,
        )),
        _ => bail!("expected two comma-separated integers, got {s:?}"),
    }
}

fn parse_axial(s: &str) -> anyhow::Result<AxialPoint> {
    let (q, r) = parse_pair(s)?;
    Ok(AxialPoint::new(q, r))
}

fn parse_cartesian(s: &str) -> anyhow::Result<CartesianPoint> {
    let (col, row) = parse_pair(s)?;
    Ok(CartesianPoint::new(col, row))
}

/// Get the items to lay out, either from the input file or generated
fn load_items(opt: &Opt) -> anyhow::Result<Vec<String>> {
    match (&opt.input, opt.count) {
        (Some(path), None) => {
            let text = fs::read_to_string(path).with_context(|| {
                format!("error reading input file {:?}", path)
            })?;
            let items: Vec<String> = text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect();
            info!("Loaded {} items from {:?}", items.len(), path);
            Ok(items)
        }
        (None, Some(count)) => Ok((1..=count).map(|i| i.to_string()).collect()),
        _ => bail!(
            "must pass exactly one of --input (to lay out a file's lines) \
            or --count (to lay out numbered placeholders)"
        ),
    }
}

/// Lay the materialized grid out as padded text, indenting odd logical rows
/// by half a cell the way a hex lattice renders
fn render_text(map: &HexMap<String>) -> String {
    let (min, _) = match map.cartesian_bounds() {
        Some(bounds) => bounds,
        None => return String::new(),
    };
    let rows = map.to_rect();
    // Pad every cell to the widest item so columns line up
    let width = rows
        .iter()
        .flatten()
        .flatten()
        .map(|item| item.chars().count())
        .max()
        .unwrap_or(0);
    let indent = " ".repeat((width + 1) / 2);

    let mut out = String::new();
    for (row_idx, row) in rows.iter().enumerate() {
        // rem_euclid because the first logical row can be negative
        if (min.row + row_idx as i32).rem_euclid(2) == 1 {
            out.push_str(&indent);
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(item) => format!("{item:^width$}"),
                None => " ".repeat(width),
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn write_output(output: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .with_context(|| {
                    format!("error opening output file {:?}", path)
                })?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("error writing to file {:?}", path))?;
            info!("Wrote grid to {:?}", path);
        }
        None => print!("{contents}"),
    }
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    if opt.columns == 0 {
        bail!("--columns must be at least 1");
    }

    let items = load_items(&opt)?;
    let map = timed!(
        "Grid layout",
        log::Level::Info,
        match opt.layout {
            Layout::Spiral => HexMap::from_spiral(opt.center, items),
            Layout::Rows => HexMap::from_rect(
                opt.origin,
                rect::chunked(items, opt.columns),
            ),
        }
    );

    let contents = match opt.format {
        OutputFormat::Text => render_text(&map),
        OutputFormat::Json => {
            let rows: Rect<String> = map.to_rect();
            let mut json = serde_json::to_string_pretty(&rows)
                .context("error serializing grid")?;
            json.push('\n');
            json
        }
    };
    write_output(opt.output.as_deref(), &contents)
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
