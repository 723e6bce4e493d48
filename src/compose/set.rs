//! Random set composition: independent patches of random size, one file each

use crate::io::configuration::set_file_name;
use crate::io::error::{Result, require_directory};
use crate::io::image::save_patch_png;
use crate::io::progress::ProgressManager;
use crate::patch::generator::gabor_patch;
use crate::patch::sampling::PatchSampler;
use rand::Rng;
use std::path::PathBuf;

/// Writes `count` brightness-randomized patches as `gabor_NNN.png`
#[derive(Debug, Clone)]
pub struct RandomSetComposer {
    output_dir: PathBuf,
    count: usize,
}

impl RandomSetComposer {
    /// Composer writing into an existing `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            count,
        }
    }

    /// Render and save every patch, returning the written paths in order
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory does not exist or a patch
    /// cannot be written
    pub fn compose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<Vec<PathBuf>> {
        require_directory(&self.output_dir)?;

        if let Some(pm) = progress.as_mut() {
            pm.message(&format!("Output directory = {}", self.output_dir.display()));
            pm.start_stage("set", self.count);
        }

        let sampler = PatchSampler::new(true);
        let mut written = Vec::with_capacity(self.count);
        for index in 1..=self.count {
            let params = sampler.sample_with_random_size(rng);
            let patch = gabor_patch(&params, rng)?;
            let path = self.output_dir.join(set_file_name(index));

            if let Some(pm) = progress.as_ref() {
                pm.message(&format!("...saving image {}", path.display()));
            }
            save_patch_png(&patch, &path)?;
            written.push(path);

            if let Some(pm) = progress.as_ref() {
                pm.advance();
            }
        }

        if let Some(pm) = progress {
            pm.finish_stage();
        }

        Ok(written)
    }
}
