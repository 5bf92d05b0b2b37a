//! Command-line interface for batch chipset extraction and autotile expansion

use crate::autotile::expand_autotile;
use crate::chipset::layout::{AUTOTILE_ORIGINS, WATER_TILE_ORIGINS};
use crate::chipset::{ChipsetExtraction, extract_chipset_groups};
use crate::io::configuration::{
    ANIMATED_SUFFIX, AUTOTILE_SIZE_HINT, AUTOTILE_SUFFIX, CHIPSET_SIZE_HINT, EXPANDED_SUFFIX,
    HIGH_DECO_SUFFIX, LOW_DECO_SUFFIX, OUTPUT_EXTENSION, WATER_SUFFIX,
};
use crate::io::error::{ConversionError, Result, invalid_parameter};
use crate::io::image::{
    ensure_png_extension, has_png_extension, load_raster, read_dimensions, save_raster,
};
use crate::io::logging::level_for;
use crate::io::progress::ProgressManager;
use crate::raster::Raster;
use crate::raster::geometry::{AUTOTILE_DIMENSIONS, CHIPSET_DIMENSIONS};
use clap::{Parser, Subcommand};
use simplelog::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "remex")]
#[command(
    author,
    version,
    about = "Convert RPG Maker 200x chipsets and autotiles into modern tile-engine sheets"
)]
/// Command-line arguments for the conversion tool
pub struct Cli {
    /// Conversion to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report every file written
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(short, long, global = true)]
    pub no_skip: bool,
}

/// Conversions offered by the tool
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Split 480x256 chipsets into water, animated, autotile and decoration sheets
    Extract {
        /// Input chipset PNG or directory of chipsets
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Prefix of the written files (single input only)
        #[arg(short, long, value_name = "PREFIX")]
        output: Option<PathBuf>,
    },

    /// Expand 48x64 autotiles into 128x96 sheets of 48 tiles
    Expand {
        /// Input autotile PNG or directory of autotiles
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Path of the expanded sheet (single input only)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// Input file or directory
    pub fn target(&self) -> &Path {
        match self {
            Self::Extract { target, .. } | Self::Expand { target, .. } => target,
        }
    }

    /// Explicit output location, if one was given
    pub fn output(&self) -> Option<&Path> {
        match self {
            Self::Extract { output, .. } | Self::Expand { output, .. } => output.as_deref(),
        }
    }

    /// Size every input of this command must have
    pub const fn required_dimensions(&self) -> (u32, u32) {
        match self {
            Self::Extract { .. } => CHIPSET_DIMENSIONS,
            Self::Expand { .. } => AUTOTILE_DIMENSIONS,
        }
    }

    const fn size_hint(&self) -> &'static str {
        match self {
            Self::Extract { .. } => CHIPSET_SIZE_HINT,
            Self::Expand { .. } => AUTOTILE_SIZE_HINT,
        }
    }
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level requested by the flags
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.quiet, self.verbose)
    }
}

/// Orchestrates batch conversion of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            log::warn!("Nothing to convert in '{}'", self.cli.command.target().display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            self.process_file(file)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Inputs to convert, after the existing-output check
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a file nor a directory, if
    /// the directory cannot be read, or if `--output` is combined with a
    /// directory target
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = self.cli.command.target();

        if target.is_file() {
            if self.should_process_file(target) {
                Ok(vec![target.to_path_buf()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            if let Some(output) = self.cli.command.output() {
                return Err(invalid_parameter(
                    "output",
                    &output.display(),
                    &"an output can only be given for a single input file",
                ));
            }

            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| ConversionError::FileSystem {
                path: target.to_path_buf(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry?.path();
                if has_png_extension(&path)
                    && self.has_required_dimensions(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or a directory",
            ))
        }
    }

    // Directory scans only pick images of the right size, checked from the header
    fn has_required_dimensions(&self, path: &Path) -> bool {
        let required = self.cli.command.required_dimensions();
        match read_dimensions(path) {
            Ok(dimensions) if dimensions == required => true,
            Ok((width, height)) => {
                log::warn!(
                    "Skipping '{}': {width}x{height} is not {}x{}",
                    path.display(),
                    required.0,
                    required.1
                );
                false
            }
            Err(error) => {
                log::warn!("Skipping '{}': {error}", path.display());
                false
            }
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let existing = self
            .output_paths(input_path)
            .into_iter()
            .find(|path| path.exists());
        if let Some(path) = existing {
            log::warn!(
                "Skipping '{}': '{}' already exists (use --no-skip to overwrite)",
                input_path.display(),
                path.display()
            );
            return false;
        }
        true
    }

    /// Every file the conversion of `input_path` writes
    pub fn output_paths(&self, input_path: &Path) -> Vec<PathBuf> {
        match &self.cli.command {
            Command::Extract { output, .. } => {
                let prefix = output
                    .clone()
                    .unwrap_or_else(|| Self::get_extraction_prefix(input_path));
                extraction_output_paths(&prefix)
            }
            Command::Expand { output, .. } => vec![
                output
                    .as_deref()
                    .map_or_else(|| Self::get_expansion_path(input_path), ensure_png_extension),
            ],
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        let source = load_raster(input_path)?;

        if let Err(error) = source.ensure_dimensions(
            "input size check",
            self.cli.command.required_dimensions(),
        ) {
            log::error!("'{}': {error}", input_path.display());
            log::error!("{}", self.cli.command.size_hint());
            return Err(error);
        }

        let outputs = self.output_paths(input_path);
        match self.cli.command {
            Command::Extract { .. } => {
                let extraction = extract_chipset_groups(&source)?;
                for (path, (kind, raster)) in outputs.iter().zip(labelled_rasters(&extraction)) {
                    save_raster(raster, path)?;
                    log::info!("Created {kind} '{}'", path.display());
                }
            }
            Command::Expand { .. } => {
                let sheet = expand_autotile(&source)?;
                for path in &outputs {
                    save_raster(&sheet, path)?;
                    log::info!("Created expanded autotile '{}'", path.display());
                }
            }
        }

        Ok(())
    }

    fn get_extraction_prefix(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();

        if let Some(parent) = input_path.parent() {
            parent.join(stem)
        } else {
            PathBuf::from(stem)
        }
    }

    fn get_expansion_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{EXPANDED_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Files written by one chipset extraction, in [`labelled_rasters`] order
///
/// Water tiles and autotiles are numbered from zero; the animated block and
/// the decoration sheets are not numbered.
pub fn extraction_output_paths(prefix: &Path) -> Vec<PathBuf> {
    let with_suffix = |suffix: &str| {
        let mut name = prefix.as_os_str().to_os_string();
        name.push(suffix);
        name.push(".");
        name.push(OUTPUT_EXTENSION);
        PathBuf::from(name)
    };

    let water =
        (0..WATER_TILE_ORIGINS.len()).map(|index| with_suffix(&format!("{WATER_SUFFIX}{index}")));
    let autotiles = (0..AUTOTILE_ORIGINS.len())
        .map(|index| with_suffix(&format!("{AUTOTILE_SUFFIX}{index}")));

    water
        .chain(std::iter::once(with_suffix(ANIMATED_SUFFIX)))
        .chain(autotiles)
        .chain([with_suffix(LOW_DECO_SUFFIX), with_suffix(HIGH_DECO_SUFFIX)])
        .collect()
}

/// Every raster of an extraction with a human-readable kind, in output order
pub fn labelled_rasters(extraction: &ChipsetExtraction) -> Vec<(&'static str, &Raster)> {
    let water = extraction.water_tiles.iter().map(|raster| ("water tile", raster));
    let animated = extraction
        .animated_tiles
        .iter()
        .map(|raster| ("animated tile", raster));
    let autotiles = extraction.autotiles.iter().map(|raster| ("autotile", raster));

    water
        .chain(animated)
        .chain(autotiles)
        .chain([
            ("low deco sheet", &extraction.low_deco),
            ("high deco sheet", &extraction.high_deco),
        ])
        .collect()
}
