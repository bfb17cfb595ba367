//! Datapack layout, preflight checks, and writing.
//!
//! Generation builds the full set of files in memory first (`Datapack`), then
//! writes them in one pass. Files whose names collide are written in order,
//! so the later zone wins.
//!
//! Writing only creates and overwrites. Files from an earlier run that the
//! current config no longer produces (a removed zone's predicate or periodic
//! loop) are left in place; clear the generated directories to drop them.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use softborder_core::{Config, Error, Result, Zone, ZoneKind, GEN_FUNCTION_DIR, NAMESPACE};
use tracing::debug;

use crate::command::McFunction;
use crate::effects::{
    self, EffectFunctions, APPLY_CONST_EFFECTS, START_PERIODIC_EFFECTS, STOP_PERIODIC_EFFECTS,
    UPDATE_INSANITY,
};
use crate::predicate::Predicate;
use crate::zones::partition;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Where generated files go under a datapack root.
#[derive(Debug, Clone)]
pub struct DatapackLayout {
    root: PathBuf,
}

impl DatapackLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `data/softborder/predicates`, relative to the root.
    pub fn predicates_rel() -> PathBuf {
        Path::new("data").join(NAMESPACE).join("predicates")
    }

    /// `data/softborder/functions/private/gen`, relative to the root.
    pub fn gen_rel() -> PathBuf {
        let mut path = Path::new("data").join(NAMESPACE).join("functions");
        path.extend(GEN_FUNCTION_DIR.split('/'));
        path
    }

    pub fn predicates_dir(&self) -> PathBuf {
        self.root.join(Self::predicates_rel())
    }

    pub fn gen_dir(&self) -> PathBuf {
        self.root.join(Self::gen_rel())
    }
}

// ---------------------------------------------------------------------------
// Preflight
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightIssue {
    MissingConfig(PathBuf),
    MissingOutput(PathBuf),
    OutputNotEmpty { predicates: PathBuf, functions: PathBuf },
}

impl fmt::Display for PreflightIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreflightIssue::MissingConfig(path) => {
                write!(f, "Cannot find config file {}", path.display())
            }
            PreflightIssue::MissingOutput(path) => {
                write!(f, "Cannot find output directory {}", path.display())
            }
            PreflightIssue::OutputNotEmpty {
                predicates,
                functions,
            } => write!(
                f,
                "Output directories {} and {} not empty. Use -f to overwrite existing configs",
                predicates.display(),
                functions.display()
            ),
        }
    }
}

/// All preflight issues of a run, one per line when displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightFailed(pub Vec<PreflightIssue>);

impl fmt::Display for PreflightFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for PreflightFailed {}

fn is_non_empty_dir(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_some(),
        // Something that exists but can't be listed still blocks the run.
        Err(_) => path.exists(),
    }
}

/// `Err` carries every reason the run must not start.
pub fn check_preflight(
    config: &Path,
    layout: &DatapackLayout,
    force: bool,
) -> std::result::Result<(), PreflightFailed> {
    let issues = preflight(config, layout, force);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(PreflightFailed(issues))
    }
}

/// Every reason the run must not start. Empty means go.
pub fn preflight(config: &Path, layout: &DatapackLayout, force: bool) -> Vec<PreflightIssue> {
    let mut issues = Vec::new();

    if !config.is_file() {
        issues.push(PreflightIssue::MissingConfig(config.to_path_buf()));
    }

    if !layout.root().is_dir() {
        issues.push(PreflightIssue::MissingOutput(layout.root().to_path_buf()));
    } else if !force && (is_non_empty_dir(&layout.predicates_dir()) || is_non_empty_dir(&layout.gen_dir())) {
        issues.push(PreflightIssue::OutputNotEmpty {
            predicates: layout.predicates_dir(),
            functions: layout.gen_dir(),
        });
    }

    issues
}

// ---------------------------------------------------------------------------
// In-memory pack
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Predicate,
    Function,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative to the datapack root.
    pub path: PathBuf,
    pub kind: FileKind,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Datapack {
    files: Vec<GeneratedFile>,
    periodic_zones: usize,
}

impl Datapack {
    pub fn build(config: &Config) -> Result<Self> {
        let mut pack = Datapack::default();

        for band in partition(&config.gain_steps) {
            let predicate = Predicate::for_bounds(ZoneKind::Distance, &band.bounds());
            pack.add_predicate(&band.name(), &predicate)?;
        }
        for zone in config.distance_zones.iter().chain(config.insanity_zones.iter()) {
            pack.add_zone_predicate(zone)?;
        }

        let effects = EffectFunctions::from_config(config);
        pack.add_function(UPDATE_INSANITY, &effects::update_insanity(&config.gain_steps));
        pack.add_function(APPLY_CONST_EFFECTS, &effects.constant);
        for periodic in &effects.periodic {
            pack.add_function(&periodic.name, &periodic.function);
        }
        pack.add_function(START_PERIODIC_EFFECTS, &effects.start);
        pack.add_function(STOP_PERIODIC_EFFECTS, &effects.stop);
        pack.periodic_zones = effects.periodic.len();

        Ok(pack)
    }

    fn add_zone_predicate(&mut self, zone: &Zone) -> Result<()> {
        let predicate = Predicate::for_bounds(zone.kind, &zone.bounds);
        self.add_predicate(&zone.name(), &predicate)
    }

    fn add_predicate(&mut self, name: &str, predicate: &Predicate) -> Result<()> {
        self.files.push(GeneratedFile {
            path: DatapackLayout::predicates_rel().join(format!("{}.json", name)),
            kind: FileKind::Predicate,
            contents: predicate.to_json()?,
        });
        Ok(())
    }

    fn add_function(&mut self, name: &str, function: &McFunction) {
        self.files.push(GeneratedFile {
            path: DatapackLayout::gen_rel().join(format!("{}.mcfunction", name)),
            kind: FileKind::Function,
            contents: function.render(),
        });
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    /// Look up a file by its path relative to the root. Last write wins.
    pub fn get(&self, rel: impl AsRef<Path>) -> Option<&GeneratedFile> {
        let rel = rel.as_ref();
        self.files.iter().rev().find(|f| f.path == rel)
    }

    /// Write every file under `root`, creating directories as needed.
    pub fn write(&self, root: &Path) -> Result<GenerationReport> {
        let mut report = GenerationReport {
            periodic_zones: self.periodic_zones,
            ..GenerationReport::default()
        };

        for file in &self.files {
            let full_path = root.join(&file.path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::write_failed(parent, e))?;
            }
            fs::write(&full_path, &file.contents).map_err(|e| Error::write_failed(&full_path, e))?;
            debug!("wrote {} ({} bytes)", full_path.display(), file.contents.len());

            match file.kind {
                FileKind::Predicate => report.predicates += 1,
                FileKind::Function => report.functions += 1,
            }
            report.written.push(full_path);
        }

        Ok(report)
    }
}

/// What a generation run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub predicates: usize,
    pub functions: usize,
    pub periodic_zones: usize,
    pub written: Vec<PathBuf>,
}

/// Build the pack for `config` and write it under `root`.
pub fn generate(config: &Config, root: &Path) -> Result<GenerationReport> {
    Datapack::build(config)?.write(root)
}
