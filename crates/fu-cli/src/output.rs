// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON and CSV encoders for generated points.

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::points::Points;

/// Writes `points` to `out` in `format`.
pub fn write_points<W: Write>(points: &Points, format: OutputFormat, mut out: W) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(points, &mut out)?,
        OutputFormat::Csv => write_csv(points, &mut out)?,
    }
    out.flush()
}

fn write_json<W: Write>(points: &Points, out: &mut W) -> io::Result<()> {
    match points {
        Points::Planar(points) => serde_json::to_writer_pretty(&mut *out, points)?,
        Points::Spatial(points) => serde_json::to_writer_pretty(&mut *out, points)?,
    }
    writeln!(out)
}

fn write_csv<W: Write>(points: &Points, out: &mut W) -> io::Result<()> {
    match points {
        Points::Planar(points) => {
            writeln!(out, "x,y")?;
            for p in points {
                writeln!(out, "{},{}", p.x, p.y)?;
            }
        }
        Points::Spatial(points) => {
            writeln!(out, "x,y,z")?;
            for p in points {
                writeln!(out, "{},{},{}", p.x, p.y, p.z)?;
            }
        }
    }
    Ok(())
}
