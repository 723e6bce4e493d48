//! Contact sheet composition
//!
//! Each patch is written as a transient PNG, read back and pasted into an RGB
//! canvas in row-major order, then deleted. Only the finished sheet remains in
//! the output directory.

use crate::io::configuration::{sheet_file_name, transient_file_name};
use crate::io::error::{GaborError, Result, invalid_parameter, require_directory};
use crate::io::image::{load_rgb, save_patch_png, save_rgb_png};
use crate::io::progress::ProgressManager;
use crate::patch::generator::gabor_patch;
use crate::patch::sampling::PatchSampler;
use image::RgbImage;
use image::imageops::replace;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Renders `width * height` random patches into one tiled sheet
#[derive(Debug, Clone)]
pub struct SheetComposer {
    output_dir: PathBuf,
    patch_size: u32,
    width: u32,
    height: u32,
}

impl SheetComposer {
    /// Composer writing into an existing `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, patch_size: u32, width: u32, height: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            patch_size,
            width,
            height,
        }
    }

    /// Directory receiving the transient tiles and the sheet
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the finished sheet is written to
    pub fn sheet_path(&self) -> PathBuf {
        self.output_dir
            .join(sheet_file_name(self.width, self.height))
    }

    /// Pixel dimensions `(width, height)` of the finished sheet
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension overflows `u32`
    pub fn canvas_dimensions(&self) -> Result<(u32, u32)> {
        let canvas_width = self.width.checked_mul(self.patch_size).ok_or_else(|| {
            invalid_parameter("width", &self.width, &"sheet width overflows u32 pixels")
        })?;
        let canvas_height = self.height.checked_mul(self.patch_size).ok_or_else(|| {
            invalid_parameter("height", &self.height, &"sheet height overflows u32 pixels")
        })?;
        Ok((canvas_width, canvas_height))
    }

    fn validate(&self) -> Result<()> {
        if self.patch_size == 0 {
            return Err(invalid_parameter(
                "patch_size",
                &self.patch_size,
                &"must be at least 1",
            ));
        }
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be at least 1"));
        }
        if self.height == 0 {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    /// Render, tile and save the sheet, returning its path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The patch size or grid dimensions are zero or overflow
    /// - The output directory does not exist
    /// - Any tile or the sheet cannot be written, read back or removed
    pub fn compose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<PathBuf> {
        self.validate()?;
        let (canvas_width, canvas_height) = self.canvas_dimensions()?;
        require_directory(&self.output_dir)?;

        let tile_count = self.width as usize * self.height as usize;
        if let Some(pm) = progress.as_mut() {
            pm.message(&format!("Output directory = {}", self.output_dir.display()));
            pm.start_stage("sheet", tile_count);
        }

        let sampler = PatchSampler::new(false);
        let mut tiles = Vec::with_capacity(tile_count);
        for index in 1..=tile_count {
            let params = sampler.sample(self.patch_size, rng);
            let patch = gabor_patch(&params, rng)?;
            let tile_path = self.output_dir.join(transient_file_name(index));
            save_patch_png(&patch, &tile_path)?;
            tiles.push(tile_path);
            if let Some(pm) = progress.as_ref() {
                pm.advance();
            }
        }

        let mut canvas = RgbImage::new(canvas_width, canvas_height);
        let mut x_offset = 0;
        let mut y_offset = 0;
        for tile_path in &tiles {
            let tile = load_rgb(tile_path)?;
            replace(&mut canvas, &tile, i64::from(x_offset), i64::from(y_offset));
            x_offset += self.patch_size;
            if x_offset >= canvas_width {
                x_offset = 0;
                y_offset += self.patch_size;
            }
            remove_transient(tile_path)?;
        }

        let sheet_path = self.sheet_path();
        save_rgb_png(&canvas, &sheet_path)?;

        if let Some(pm) = progress {
            pm.finish_stage();
            pm.message(&format!("File saved as \"{}\"", sheet_path.display()));
        }

        Ok(sheet_path)
    }
}

fn remove_transient(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|e| GaborError::FileSystem {
        path: path.to_path_buf(),
        operation: "remove transient tile",
        source: e,
    })
}
