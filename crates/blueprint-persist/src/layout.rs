use std::io::{self, Write};

use blueprint_core::constants::{BLANK_CELL, CELL_SEPARATOR, ROW_TERMINATOR};
use blueprint_core::params::{OutputFormat, RunParams};
use blueprint_core::volume::SparseVolume;

/// Write a volume in the layout the run asked for.
pub fn write_volume<W: Write>(
    out: &mut W,
    params: &RunParams,
    volume: &SparseVolume,
) -> io::Result<()> {
    match params.format {
        OutputFormat::Pretty => write_pretty(out, params, volume),
        OutputFormat::Minimal => write_minimal(out, params, volume),
    }
}

/// Full rectangular grid: `height` rows of `width` cells for every requested
/// layer, whether or not anything was recorded there.
///
/// Each cell is followed by `,`, each row ends with `#`, and a layer
/// separator line goes between layers.
pub fn write_pretty<W: Write>(
    out: &mut W,
    params: &RunParams,
    volume: &SparseVolume,
) -> io::Result<()> {
    let separator = params.layer_separator();
    let depth = params.depth.unsigned_abs();
    let height = params.height.max(0) as u32;
    let width = params.width.max(0) as u32;

    for z in 0..depth {
        let layer = volume.layer(z);
        for y in 0..height {
            let row = layer.and_then(|l| l.get(&y));
            for x in 0..width {
                let cell = row.and_then(|r| r.get(&x));
                out.write_all(cell.map_or(BLANK_CELL, |t| &**t).as_bytes())?;
                write!(out, "{CELL_SEPARATOR}")?;
            }
            writeln!(out, "{ROW_TERMINATOR}")?;
        }
        if z + 1 < depth {
            writeln!(out, "{separator}")?;
        }
    }
    Ok(())
}

/// Gap-compressed layout: only recorded layers, rows and cells are written.
///
/// A skipped column costs one `,`, a skipped row one empty line and a skipped
/// layer one separator line. Nothing trails the last recorded cell of a row.
pub fn write_minimal<W: Write>(
    out: &mut W,
    params: &RunParams,
    volume: &SparseVolume,
) -> io::Result<()> {
    let separator = params.layer_separator();

    let mut prev_layer = 0u32;
    for (z, layer) in volume.layers() {
        while prev_layer < z {
            writeln!(out, "{separator}")?;
            prev_layer += 1;
        }
        let mut prev_row = 0u32;
        for (&y, row) in layer {
            while prev_row < y {
                writeln!(out)?;
                prev_row += 1;
            }
            let mut prev_col = 0u32;
            for (&x, token) in row {
                while prev_col < x {
                    write!(out, "{CELL_SEPARATOR}")?;
                    prev_col += 1;
                }
                out.write_all(token.as_bytes())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
