//! COCO-style export of assembled datasets.
//!
//! Each dataset is persisted under one output directory as:
//!
//! ```text
//! <output_dir>/<image filename>      # one file per sample
//! <output_dir>/annotations.json      # categories, images, annotations
//! <output_dir>/image_metadata.json   # index-aligned per-sample metadata
//! ```
//!
//! Bounding boxes are stored in `[x, y, width, height]` form; metadata is
//! converted to JSON with numeric arrays expanded to nested lists.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use perturb_types::{Category, ClassTarget, Detections, ImageBuffer, ImageDataset, map_to_json};

use crate::error::{Result, SweepError};

/// Annotation record filename.
pub const ANNOTATIONS_FILE: &str = "annotations.json";

/// Metadata sidecar filename.
pub const METADATA_FILE: &str = "image_metadata.json";

/// One image entry of the annotation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoImage {
    /// Image identifier; equals the sample index.
    pub id: i64,

    /// Image path relative to the output directory.
    pub file_name: String,
}

/// One annotation entry of the annotation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoAnnotation {
    /// Annotation identifier, sequential from 1.
    pub id: i64,

    /// Identifier of the annotated image.
    pub image_id: i64,

    /// Category of the annotated object.
    pub category_id: i64,

    /// Box in `[x, y, width, height]` form; absent for classification
    /// annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
}

/// The full annotation record persisted as `annotations.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CocoAnnotations {
    /// Category taxonomy, copied from the input dataset unchanged.
    pub categories: Vec<Category>,

    /// Image entries, in sample order.
    pub images: Vec<CocoImage>,

    /// Annotation entries, grouped by image in sample order.
    pub annotations: Vec<CocoAnnotation>,
}

/// Writes a detection dataset to `output_dir` in the interchange layout.
///
/// `image_filenames[i]` is the path of sample `i`'s image, relative to
/// `output_dir`; parent directories are created as needed. Corner-format
/// boxes are stored as `[x1, y1, x2 - x1, y2 - y1]`.
///
/// # Errors
///
/// Returns a validation error naming both lengths if `image_filenames`
/// does not match the dataset length (nothing is written), a
/// serialization error if a metadata value cannot be represented as JSON,
/// or an IO error if writing fails.
#[allow(clippy::cast_possible_wrap)]
pub fn write_coco<D>(
    dataset: &D,
    output_dir: &Path,
    image_filenames: &[PathBuf],
    categories: &[Category],
) -> Result<()>
where
    D: ImageDataset<Target = Detections> + ?Sized,
{
    check_filename_count(dataset.len(), image_filenames)?;

    let mut record = CocoAnnotations {
        categories: categories.to_vec(),
        ..CocoAnnotations::default()
    };
    let mut metadata_out: Vec<serde_json::Map<String, Value>> = Vec::with_capacity(dataset.len());
    let mut next_annotation_id = 1i64;

    for index in 0..dataset.len() {
        let sample = fetch(dataset, index)?;

        save_image(&sample.image, &output_dir.join(&image_filenames[index]))?;
        record.images.push(CocoImage {
            id: index as i64,
            file_name: image_filenames[index].display().to_string(),
        });

        for (bbox, label) in sample.target.iter() {
            record.annotations.push(CocoAnnotation {
                id: next_annotation_id,
                image_id: index as i64,
                category_id: label,
                bbox: Some(bbox.to_xywh()),
            });
            next_annotation_id += 1;
        }

        metadata_out.push(map_to_json(&sample.metadata)?);
    }

    info!(
        samples = dataset.len(),
        dir = %output_dir.display(),
        "Saved perturbed images"
    );

    persist_record(&record, &metadata_out, output_dir)
}

/// Writes a classification dataset to `output_dir` in the interchange
/// layout.
///
/// Annotation entries carry one `category_id` per sample label and no
/// `bbox`.
///
/// # Errors
///
/// Same failure modes as [`write_coco`].
#[allow(clippy::cast_possible_wrap)]
pub fn write_classification<D>(
    dataset: &D,
    output_dir: &Path,
    image_filenames: &[PathBuf],
    categories: &[Category],
) -> Result<()>
where
    D: ImageDataset<Target = ClassTarget> + ?Sized,
{
    check_filename_count(dataset.len(), image_filenames)?;

    let mut record = CocoAnnotations {
        categories: categories.to_vec(),
        ..CocoAnnotations::default()
    };
    let mut metadata_out: Vec<serde_json::Map<String, Value>> = Vec::with_capacity(dataset.len());
    let mut next_annotation_id = 1i64;

    for index in 0..dataset.len() {
        let sample = fetch(dataset, index)?;

        save_image(&sample.image, &output_dir.join(&image_filenames[index]))?;
        record.images.push(CocoImage {
            id: index as i64,
            file_name: image_filenames[index].display().to_string(),
        });

        for label in &sample.target.labels {
            record.annotations.push(CocoAnnotation {
                id: next_annotation_id,
                image_id: index as i64,
                category_id: *label,
                bbox: None,
            });
            next_annotation_id += 1;
        }

        metadata_out.push(map_to_json(&sample.metadata)?);
    }

    info!(
        samples = dataset.len(),
        dir = %output_dir.display(),
        "Saved perturbed images"
    );

    persist_record(&record, &metadata_out, output_dir)
}

fn check_filename_count(dataset_len: usize, image_filenames: &[PathBuf]) -> Result<()> {
    if image_filenames.len() != dataset_len {
        return Err(SweepError::length_mismatch(
            "image filename and dataset",
            image_filenames.len(),
            dataset_len,
        ));
    }
    Ok(())
}

fn fetch<D>(dataset: &D, index: usize) -> Result<perturb_types::Sample<D::Target>>
where
    D: ImageDataset + ?Sized,
{
    dataset
        .sample(index)
        .ok_or_else(|| SweepError::validation(format!("dataset index {index} out of bounds")))
}

fn save_image(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let (width, height) = buffer.dimensions();
    let bytes = buffer.as_bytes().to_vec();

    match buffer.channels() {
        1 => raster(image::GrayImage::from_raw(width, height, bytes))?.save(path)?,
        3 => raster(image::RgbImage::from_raw(width, height, bytes))?.save(path)?,
        4 => raster(image::RgbaImage::from_raw(width, height, bytes))?.save(path)?,
        channels => {
            return Err(SweepError::validation(format!(
                "unsupported channel count for image encoding: {channels}"
            )));
        }
    }

    Ok(())
}

fn raster<P: image::Pixel>(
    container: Option<image::ImageBuffer<P, Vec<P::Subpixel>>>,
) -> Result<image::ImageBuffer<P, Vec<P::Subpixel>>> {
    container.ok_or_else(|| SweepError::validation("pixel buffer does not match its dimensions"))
}

fn persist_record(
    record: &CocoAnnotations,
    metadata: &[serde_json::Map<String, Value>],
    output_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;

    let metadata_file = output_dir.join(METADATA_FILE);
    serde_json::to_writer(BufWriter::new(File::create(&metadata_file)?), metadata)?;
    info!(file = %metadata_file.display(), "Saved image metadata");

    let annotations_file = output_dir.join(ANNOTATIONS_FILE);
    serde_json::to_writer(BufWriter::new(File::create(&annotations_file)?), record)?;
    info!(file = %annotations_file.display(), "Saved annotations");

    Ok(())
}
