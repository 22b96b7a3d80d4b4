use std::path::PathBuf;

use blueprint_core::error::BlueprintError;
use blueprint_core::params::{clamp_end, RunParams};
use blueprint_core::phase::Phase;
use blueprint_persist::naming::FileNamer;
use blueprint_persist::output::{create_output_dir, OutputFiles};
use blueprint_world::WorldQuery;

use crate::cache::TokenCache;
use crate::error::RunError;
use crate::scanner::{scan, ScanRegion};

/// Work out the box a run covers.
///
/// The start comes from the parameters, or the world cursor when none was
/// given, and must be a tile of the world. The end is cropped to the world,
/// letting a downward scan reach layer 0.
pub fn resolve_region<W: WorldQuery + ?Sized>(
    world: &W,
    params: &RunParams,
) -> Result<ScanRegion, BlueprintError> {
    let start = match params.start {
        Some(start) => start,
        None => world.cursor().ok_or(BlueprintError::NoCursor)?,
    };
    if !world.is_valid_tile(start) {
        return Err(BlueprintError::InvalidStart(start));
    }

    let raw = params.raw_end(start);
    let end = clamp_end(raw, world.bounds());
    if end != raw {
        log::warn!(
            "cropping blueprint to map bounds: end {},{},{} -> {},{},{}",
            raw.x,
            raw.y,
            raw.z,
            end.x,
            end.y,
            end.z
        );
    }
    Ok(ScanRegion::new(start, end))
}

/// Scan the requested region of `world` and write one blueprint section per
/// active phase. Returns the files written, sorted.
///
/// Everything that can be checked up front (parameters, start tile, file
/// names) is checked before the output directory is created, so a rejected
/// run leaves no files behind.
pub fn generate<W, N>(world: &W, params: &RunParams, namer: &N) -> Result<Vec<PathBuf>, RunError>
where
    W: WorldQuery + ?Sized,
    N: FileNamer + ?Sized,
{
    params.validate()?;
    let phases = params.phases.active();
    let region = resolve_region(world, params)?;

    let targets = phases
        .iter()
        .map(|&phase| namer.resolve(params, phase).map(|path| (phase, path)))
        .collect::<Result<Vec<_>, _>>()?;
    create_output_dir(&namer.output_dir(params)?)?;

    let mut cache = TokenCache::new();
    let result = write_all(world, params, &region, &targets, &mut cache);
    cache.reset();
    result
}

fn write_all<W: WorldQuery + ?Sized>(
    world: &W,
    params: &RunParams,
    region: &ScanRegion,
    targets: &[(Phase, PathBuf)],
    cache: &mut TokenCache,
) -> Result<Vec<PathBuf>, RunError> {
    let phases: Vec<_> = targets.iter().map(|(phase, _)| *phase).collect();
    let scans = scan(world, region, &phases, params.format, cache);

    let mut files = OutputFiles::new();
    for ((phase, path), result) in targets.iter().zip(&scans) {
        files.write_phase(path, *phase, params, &result.volume)?;
    }
    Ok(files.finish()?)
}
