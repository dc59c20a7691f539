use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nalgebra::Point3;

use super::{CrackExportData, CrackExporter};
use crate::error::Result;
use crate::handles::TimeStep;

/// Gnuplot data for one crack at one time step
#[derive(Debug, Clone, PartialEq)]
pub struct GnuplotBlock {
    pub crack_index: usize,
    pub step_number: usize,
    pub contents: String,
}

impl GnuplotBlock {
    pub fn file_name(&self) -> String {
        format!("crack_{}_step_{}.dat", self.crack_index, self.step_number)
    }
}

/// Collects crack geometry and cohesive-zone data as gnuplot data sets.
///
/// Each block holds two data sets separated by two blank lines so they can
/// be addressed with `index 0` (polyline) and `index 1` (cohesive points).
/// Nothing is written until `write_to` or `write_files` is called.
#[derive(Debug, Clone, Default)]
pub struct GnuplotExportModule {
    blocks: Vec<GnuplotBlock>,
}

impl GnuplotExportModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[GnuplotBlock] {
        &self.blocks
    }

    /// Write all collected blocks to one stream
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for block in &self.blocks {
            out.write_all(block.contents.as_bytes())?;
            out.write_all(b"\n\n")?;
        }
        Ok(())
    }

    /// Write one `.dat` file per block into `dir`
    pub fn write_files<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            let path = dir.join(block.file_name());
            fs::write(&path, &block.contents)?;
            written.push(path);
        }
        Ok(written)
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

fn format_point(p: &Point3<f64>, dimension: usize) -> String {
    if dimension == 3 {
        format!("{:.10e} {:.10e} {:.10e}", p.x, p.y, p.z)
    } else {
        format!("{:.10e} {:.10e}", p.x, p.y)
    }
}

impl CrackExporter for GnuplotExportModule {
    fn output_crack(&mut self, data: &CrackExportData<'_>, step: &TimeStep) {
        let mut contents = String::new();

        contents.push_str(&format!(
            "# crack {} step {} time {:.6e} length {:.10e}\n",
            data.crack_index, step.number, step.time, data.length
        ));
        contents.push_str("# polyline\n");
        for p in data.points {
            contents.push_str(&format_point(p, data.dimension));
            contents.push('\n');
        }

        contents.push_str("\n\n# cohesive zone: arc_position element gauss_point coordinates\n");
        for (cz, arc) in data.cohesive_points.iter().zip(data.cohesive_arc_positions) {
            contents.push_str(&format!(
                "{:.10e} {} {} {}\n",
                arc,
                cz.gauss_point.element,
                cz.gauss_point.index,
                format_point(&cz.coords, data.dimension)
            ));
        }

        self.blocks.push(GnuplotBlock {
            crack_index: data.crack_index,
            step_number: step.number,
            contents,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohesive::CohesiveZonePoint;
    use crate::handles::GaussPointHandle;

    #[test]
    fn test_block_layout() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let cohesive = [CohesiveZonePoint {
            gauss_point: GaussPointHandle::new(7, 1),
            coords: Point3::new(1.0, 0.0, 0.0),
        }];
        let arcs = [1.0];
        let data = CrackExportData {
            crack_index: 2,
            dimension: 2,
            points: &points,
            length: 2.0,
            cohesive_points: &cohesive,
            cohesive_arc_positions: &arcs,
        };

        let mut module = GnuplotExportModule::new();
        module.output_crack(&data, &TimeStep::new(4, 0.5));

        assert_eq!(module.blocks().len(), 1);
        let block = &module.blocks()[0];
        assert_eq!(block.file_name(), "crack_2_step_4.dat");

        let data_lines: Vec<&str> = block
            .contents
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        assert_eq!(data_lines.len(), 3);
        assert_eq!(data_lines[0].split_whitespace().count(), 2);
        let cz_fields: Vec<&str> = data_lines[2].split_whitespace().collect();
        assert_eq!(cz_fields[1], "7");
        assert_eq!(cz_fields[2], "1");

        let mut out = Vec::new();
        module.write_to(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("# crack 2 step 4"));
    }
}
