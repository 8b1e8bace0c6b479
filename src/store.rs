use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::course::{Course, Semester};

/// Streaming JSON-array writer for one term's courses.
///
/// Records are written as they arrive so an interrupted crawl still leaves
/// everything scraped so far on disk. The `,\n` separator for a record is
/// written just before the NEXT record, never after the current one, so no
/// trailing comma ever needs repairing. An aborted run leaves the array
/// without its closing bracket; such a file is corrupt until repaired.
pub struct CourseSink {
    out: BufWriter<File>,
    path: PathBuf,
    written: usize,
}

impl CourseSink {
    /// Open `<dir>/<year>-<semester>.json` and start the array.
    pub fn create(dir: &Path, year: u32, semester: Semester) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let path = dir.join(format!("{year}-{semester}.json"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        let mut out = BufWriter::new(file);
        out.write_all(b"[")?;
        Ok(Self {
            out,
            path,
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, course: &Course) -> Result<()> {
        if self.written == 0 {
            self.out.write_all(b"\n")?;
        } else {
            self.out.write_all(b",\n")?;
        }
        serde_json::to_writer_pretty(&mut self.out, course)
            .with_context(|| format!("serializing {}", course.friendly_number()))?;
        self.written += 1;
        Ok(())
    }

    /// Close the array. Only a finished sink is valid JSON.
    pub fn finish(mut self) -> Result<()> {
        self.out.write_all(b"\n]\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Read a completed term file back into memory.
pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let courses = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(courses)
}

// ── Tests ──
