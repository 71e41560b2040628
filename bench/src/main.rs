//! Moving-AI benchmark runner: build the terrain graph, embed it, and
//! replay a scenario file through A* with the combined heuristic.

mod loader;
mod report;

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use terrapath_core::Graph;
use terrapath_search::{combined_heuristic, compute_embedding, shortest_path_cost};

use report::CaseResult;

/// Pivot-separation tolerance below which embedding passes stop.
const DEFAULT_EPSILON: f64 = 1e-3;

struct Args {
    map: PathBuf,
    scen: PathBuf,
    dims: usize,
    limit: Option<usize>,
    threshold: f64,
}

fn parse_args() -> Result<Args> {
    let mut map = None;
    let mut scen = None;
    let mut dims = 10;
    let mut limit = None;
    let mut threshold = 0.5;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-k" => dims = next_value(&mut args, "-k")?.parse().context("parsing -k")?,
            "-n" => limit = Some(next_value(&mut args, "-n")?.parse().context("parsing -n")?),
            "-t" | "--thresh" => {
                threshold = next_value(&mut args, "-t")?.parse().context("parsing -t")?;
            }
            _ if map.is_none() => map = Some(PathBuf::from(arg)),
            _ if scen.is_none() => scen = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument `{arg}`"),
        }
    }

    match (map, scen) {
        (Some(map), Some(scen)) => Ok(Args {
            map,
            scen,
            dims,
            limit,
            threshold,
        }),
        _ => bail!("usage: terrapath-bench MAP SCEN [-k DIMS] [-n CASES] [-t THRESH]"),
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().with_context(|| format!("missing value for {flag}"))
}

fn run(args: &Args) -> Result<()> {
    let grid = loader::load_map(&args.map)?;
    log::info!("map: {}x{}", grid.width(), grid.height());

    let graph = Graph::from_grid(&grid);
    log::info!(
        "graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let embedding = compute_embedding(&graph, args.dims, DEFAULT_EPSILON)?;
    let cases = loader::load_scen(&args.scen, args.limit)?;
    log::info!("running {} cases with k={}", cases.len(), args.dims);

    let started = Instant::now();
    let mut results = Vec::with_capacity(cases.len());
    for (index, case) in cases.iter().enumerate() {
        let h = combined_heuristic(case.goal, &embedding, graph.width());
        let cost = shortest_path_cost(&graph, case.start, case.goal, h)?;
        results.push(CaseResult {
            index,
            cost,
            optimal: case.optimal,
        });
    }

    report::print_report(&results, args.threshold, started.elapsed());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;
    run(&args)
}
