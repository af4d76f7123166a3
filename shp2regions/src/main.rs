extern crate clap;
extern crate shp_regions;

use std::error::Error;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufWriter;
use std::process::ExitCode;

use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use log::error;
use log::LevelFilter;
use serde::Serialize;

use shp_regions::config::Catalog;
use shp_regions::config::RegionSource;
use shp_regions::parse_skip_list;
use shp_regions::Region;
use shp_regions::Regions;

fn cli() -> Command {
    Command::new("shp2regions")
        .version("0.1")
        .about("Extracts region polygons from a shapefile as GeoJSON geometries.")
        .arg(
            Arg::new("INPUT")
                .short('i')
                .long("in")
                .value_name("FILE")
                .help("input shapefile (.shp)")
                .num_args(1)
                .conflicts_with_all(["CONFIG", "PRESET"]),
        )
        .arg(
            Arg::new("SKIP")
                .short('s')
                .long("skip")
                .value_name("LIST")
                .help("record indices to skip, e.g. “0-8,23”; replaces the skip list of a configured source")
                .num_args(1),
        )
        .arg(
            Arg::new("CONFIG")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML catalog of region sources")
                .num_args(1)
                .conflicts_with("PRESET"),
        )
        .arg(
            Arg::new("SOURCE")
                .long("source")
                .value_name("NAME")
                .help("name of the source to read from the catalog")
                .num_args(1)
                .requires("CONFIG"),
        )
        .arg(
            Arg::new("PRESET")
                .long("preset")
                .value_name("NAME")
                .help("built-in source: environment-agency or ukcp18-land-regions")
                .num_args(1),
        )
        .arg(
            Arg::new("LIST")
                .short('l')
                .long("list")
                .help("list the source names of the catalog")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("OUTPUT")
                .short('o')
                .long("out")
                .value_name("FILE")
                .help("output file name; defaults to stdout")
                .num_args(1),
        )
        .arg(
            Arg::new("NEWLINE")
                .short('n')
                .long("newline-delimited")
                .help("output newline-delimited JSON, one region per line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .short('v')
                .long("verbose")
                .help("enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("VERBOSE") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let catalog = match matches.get_one::<String>("CONFIG") {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };

    if matches.get_flag("LIST") {
        write_list(&catalog)?;
        return Ok(());
    }

    let source = select_source(matches, &catalog)?;
    let regions = shp_regions::extract(&source)?;

    let newline = matches.get_flag("NEWLINE");
    match matches.get_one::<String>("OUTPUT") {
        Some(path) => write(BufWriter::new(File::create(path)?), &regions, newline)?,
        None => write(io::stdout().lock(), &regions, newline)?,
    }
    Ok(())
}

/// Work out which shapefile to read and what to skip.
fn select_source(matches: &ArgMatches, catalog: &Catalog) -> Result<RegionSource, Box<dyn Error>> {
    let mut source = if let Some(input) = matches.get_one::<String>("INPUT") {
        RegionSource::new(input, Default::default())
    } else if let Some(name) = matches
        .get_one::<String>("SOURCE")
        .or_else(|| matches.get_one::<String>("PRESET"))
    {
        catalog.get(name)?.clone()
    } else {
        return Err("one of --in, --config with --source, or --preset is required".into());
    };

    if let Some(list) = matches.get_one::<String>("SKIP") {
        source.skip = parse_skip_list(list)?;
    }
    Ok(source)
}

fn write_list(catalog: &Catalog) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for name in catalog.names() {
        writeln!(handle, "\t{name}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Line<'a> {
    index: usize,
    #[serde(flatten)]
    region: &'a Region,
}

fn write<W>(mut out: W, regions: &Regions, newline: bool) -> io::Result<()>
where
    W: Write,
{
    if newline {
        for (index, region) in regions {
            let line = Line {
                index: *index,
                region,
            };
            serde_json::to_writer(&mut out, &line)?;
            out.write_all(b"\n")?;
        }
    } else {
        serde_json::to_writer(&mut out, regions)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
