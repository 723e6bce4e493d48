//! Command-line interface running the hardcoded sheet and random set

use crate::compose::{RandomSetComposer, SheetComposer};
use crate::io::configuration::{
    RANDOM_SET_COUNT, SET_OUTPUT_DIR, SHEET_HEIGHT, SHEET_OUTPUT_DIR, SHEET_PATCH_SIZE, SHEET_WIDTH,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gaborsheet")]
#[command(
    author,
    version,
    about = "Generate a Gabor patch contact sheet and a random patch set"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Random seed for reproducible output (defaults to OS entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Random source for this run
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Runs the contact sheet and then the random set
pub struct Runner {
    cli: Cli,
    output_root: PathBuf,
    progress_manager: Option<ProgressManager>,
}

impl Runner {
    /// Runner writing below the current directory
    ///
    /// The root is empty rather than `.` so reported paths read `sheets/...`.
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            output_root: PathBuf::new(),
            progress_manager,
        }
    }

    /// Write `sheets/` and `set/` below `root` instead
    #[must_use]
    pub fn with_output_root(mut self, root: &Path) -> Self {
        self.output_root = root.to_path_buf();
        self
    }

    /// The sheet run as configured
    pub fn sheet_composer(&self) -> SheetComposer {
        SheetComposer::new(
            self.output_root.join(SHEET_OUTPUT_DIR),
            SHEET_PATCH_SIZE,
            SHEET_WIDTH,
            SHEET_HEIGHT,
        )
    }

    /// The random set run as configured
    pub fn set_composer(&self) -> RandomSetComposer {
        RandomSetComposer::new(self.output_root.join(SET_OUTPUT_DIR), RANDOM_SET_COUNT)
    }

    /// Generate the sheet, then the set
    ///
    /// # Errors
    ///
    /// Returns the first rendering or I/O error; later outputs are not attempted
    pub fn run(&mut self) -> Result<()> {
        let mut rng = self.cli.rng();

        self.sheet_composer()
            .compose(&mut rng, self.progress_manager.as_mut())?;
        self.set_composer()
            .compose(&mut rng, self.progress_manager.as_mut())?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }
}
