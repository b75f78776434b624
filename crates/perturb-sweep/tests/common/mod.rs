//! Shared fixtures: toy perturbers, factories and datasets.

#![allow(dead_code)]

use std::path::PathBuf;

use perturb_sweep::{
    AssembledDataset, OperatorError, Perturber, PerturberFactory, THETA_KEY, THETA_KEYS,
    ThetaValues,
};
use perturb_types::{
    BoundingBox, Category, ClassTarget, Detections, ImageBuffer, MetaMap, MetaValue, NumericArray,
};

/// Adds a constant to every pixel, saturating.
pub struct BrightnessPerturber {
    pub delta: i64,
}

impl Perturber for BrightnessPerturber {
    fn apply(&self, image: &ImageBuffer) -> Result<ImageBuffer, OperatorError> {
        let delta = u8::try_from(self.delta.clamp(0, 255)).unwrap_or(0);
        let data = image
            .as_bytes()
            .iter()
            .map(|b| b.saturating_add(delta))
            .collect();
        Ok(ImageBuffer::new(
            image.width(),
            image.height(),
            image.channels(),
            data,
        )?)
    }

    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert("kind".to_string(), MetaValue::from("brightness"));
        config.insert("delta".to_string(), MetaValue::Int(self.delta));
        config
    }
}

/// Nearest-neighbor resize to a fixed output size.
pub struct ResizePerturber {
    pub width: u32,
    pub height: u32,
}

impl Perturber for ResizePerturber {
    fn apply(&self, image: &ImageBuffer) -> Result<ImageBuffer, OperatorError> {
        let channels = image.channels() as usize;
        let (in_w, in_h) = image.dimensions();
        let src = image.as_bytes();

        let mut data = Vec::with_capacity((self.width * self.height) as usize * channels);
        for y in 0..self.height {
            let sy = (u64::from(y) * u64::from(in_h) / u64::from(self.height)) as usize;
            for x in 0..self.width {
                let sx = (u64::from(x) * u64::from(in_w) / u64::from(self.width)) as usize;
                let offset = (sy * in_w as usize + sx) * channels;
                data.extend_from_slice(&src[offset..offset + channels]);
            }
        }

        Ok(ImageBuffer::new(
            self.width,
            self.height,
            image.channels(),
            data,
        )?)
    }

    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert("kind".to_string(), MetaValue::from("resize"));
        config.insert("width".to_string(), MetaValue::Int(i64::from(self.width)));
        config.insert("height".to_string(), MetaValue::Int(i64::from(self.height)));
        config
    }
}

/// Identity transform whose config embeds a numeric array.
pub struct KernelPerturber {
    pub scale: i64,
}

impl Perturber for KernelPerturber {
    fn apply(&self, image: &ImageBuffer) -> Result<ImageBuffer, OperatorError> {
        Ok(image.clone())
    }

    fn config(&self) -> MetaMap {
        let scale = self.scale as f64;
        let kernel = NumericArray::new(
            vec![2, 2],
            vec![scale, 0.0, 0.0, scale],
        )
        .unwrap_or_else(|_| NumericArray::from_vec(Vec::new()));

        let mut config = MetaMap::new();
        config.insert("kernel".to_string(), MetaValue::Array(kernel));
        config.insert("scale".to_string(), MetaValue::Int(self.scale));
        config
    }
}

/// Identity transform whose config contains a value with no JSON form.
pub struct OpaqueConfigPerturber;

impl Perturber for OpaqueConfigPerturber {
    fn apply(&self, image: &ImageBuffer) -> Result<ImageBuffer, OperatorError> {
        Ok(image.clone())
    }

    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert(
            "sensor".to_string(),
            MetaValue::Opaque("sensor model handle".to_string()),
        );
        config
    }
}

/// Always fails to apply.
pub struct FailingPerturber;

impl Perturber for FailingPerturber {
    fn apply(&self, _image: &ImageBuffer) -> Result<ImageBuffer, OperatorError> {
        Err("simulated optics failure".into())
    }

    fn config(&self) -> MetaMap {
        MetaMap::new()
    }
}

/// Single-axis factory mapping each value to a [`BrightnessPerturber`].
pub struct BrightnessFactory {
    pub key: String,
    pub values: Vec<i64>,
}

impl BrightnessFactory {
    pub fn new(key: &str, values: Vec<i64>) -> Self {
        Self {
            key: key.to_string(),
            values,
        }
    }
}

impl PerturberFactory for BrightnessFactory {
    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert(THETA_KEY.to_string(), MetaValue::Text(self.key.clone()));
        config
    }

    fn thetas(&self) -> ThetaValues {
        ThetaValues::Flat(self.values.iter().map(|v| MetaValue::Int(*v)).collect())
    }

    fn perturbers(&self) -> Vec<Box<dyn Perturber>> {
        self.values
            .iter()
            .map(|v| Box::new(BrightnessPerturber { delta: *v }) as Box<dyn Perturber>)
            .collect()
    }
}

/// Two-axis factory over brightness delta and gain.
pub struct GridPerturber {
    pub delta: i64,
    pub gain: i64,
}

impl Perturber for GridPerturber {
    fn apply(&self, image: &ImageBuffer) -> Result<ImageBuffer, OperatorError> {
        let delta = u8::try_from(self.delta.clamp(0, 255)).unwrap_or(0);
        let gain = u8::try_from(self.gain.clamp(0, 255)).unwrap_or(1);
        let data = image
            .as_bytes()
            .iter()
            .map(|b| b.saturating_mul(gain).saturating_add(delta))
            .collect();
        Ok(ImageBuffer::new(
            image.width(),
            image.height(),
            image.channels(),
            data,
        )?)
    }

    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert("delta".to_string(), MetaValue::Int(self.delta));
        config.insert("gain".to_string(), MetaValue::Int(self.gain));
        config
    }
}

/// Multi-axis factory; operators iterate with the last axis fastest.
pub struct GridFactory {
    pub deltas: Vec<i64>,
    pub gains: Vec<i64>,
}

impl PerturberFactory for GridFactory {
    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert(
            THETA_KEYS.to_string(),
            MetaValue::List(vec![MetaValue::from("delta"), MetaValue::from("gain")]),
        );
        config
    }

    fn thetas(&self) -> ThetaValues {
        ThetaValues::PerKey(vec![
            self.deltas.iter().map(|v| MetaValue::Int(*v)).collect(),
            self.gains.iter().map(|v| MetaValue::Int(*v)).collect(),
        ])
    }

    fn perturbers(&self) -> Vec<Box<dyn Perturber>> {
        let mut out: Vec<Box<dyn Perturber>> = Vec::new();
        for delta in &self.deltas {
            for gain in &self.gains {
                out.push(Box::new(GridPerturber {
                    delta: *delta,
                    gain: *gain,
                }));
            }
        }
        out
    }
}

/// Declares three parameter values but yields only two operators.
pub struct ShortFactory;

impl PerturberFactory for ShortFactory {
    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert(THETA_KEY.to_string(), MetaValue::from("delta"));
        config
    }

    fn thetas(&self) -> ThetaValues {
        ThetaValues::Flat(vec![
            MetaValue::Int(1),
            MetaValue::Int(2),
            MetaValue::Int(3),
        ])
    }

    fn perturbers(&self) -> Vec<Box<dyn Perturber>> {
        vec![
            Box::new(BrightnessPerturber { delta: 1 }),
            Box::new(BrightnessPerturber { delta: 2 }),
        ]
    }
}

/// Declares neither recognized axis shape.
pub struct NoAxisFactory;

impl PerturberFactory for NoAxisFactory {
    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert("name".to_string(), MetaValue::from("mystery"));
        config
    }

    fn thetas(&self) -> ThetaValues {
        ThetaValues::Flat(Vec::new())
    }

    fn perturbers(&self) -> Vec<Box<dyn Perturber>> {
        Vec::new()
    }
}

/// Single-axis factory of [`KernelPerturber`]s.
pub struct KernelFactory {
    pub scales: Vec<i64>,
}

impl PerturberFactory for KernelFactory {
    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert(THETA_KEY.to_string(), MetaValue::from("scale"));
        config
    }

    fn thetas(&self) -> ThetaValues {
        ThetaValues::Flat(self.scales.iter().map(|v| MetaValue::Int(*v)).collect())
    }

    fn perturbers(&self) -> Vec<Box<dyn Perturber>> {
        self.scales
            .iter()
            .map(|v| Box::new(KernelPerturber { scale: *v }) as Box<dyn Perturber>)
            .collect()
    }
}

/// Single-combination factory whose operator has an opaque config value.
pub struct OpaqueFactory;

impl PerturberFactory for OpaqueFactory {
    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert(THETA_KEY.to_string(), MetaValue::from("mode"));
        config
    }

    fn thetas(&self) -> ThetaValues {
        ThetaValues::Flat(vec![MetaValue::Int(0)])
    }

    fn perturbers(&self) -> Vec<Box<dyn Perturber>> {
        vec![Box::new(OpaqueConfigPerturber)]
    }
}

/// Single-combination factory whose operator always fails.
pub struct FailingFactory;

impl PerturberFactory for FailingFactory {
    fn config(&self) -> MetaMap {
        let mut config = MetaMap::new();
        config.insert(THETA_KEY.to_string(), MetaValue::from("mode"));
        config
    }

    fn thetas(&self) -> ThetaValues {
        ThetaValues::Flat(vec![MetaValue::Int(0)])
    }

    fn perturbers(&self) -> Vec<Box<dyn Perturber>> {
        vec![Box::new(FailingPerturber)]
    }
}

/// Taxonomy shared by the detection fixtures.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(0, "dog", "animal"),
        Category::new(1, "car", "vehicle"),
    ]
}

/// Two-sample detection dataset with differently sized images.
pub fn detection_dataset() -> AssembledDataset<Detections> {
    let images = vec![
        ImageBuffer::rgb(4, 3, vec![10u8; 4 * 3 * 3]).unwrap(),
        ImageBuffer::rgb(2, 2, vec![20u8; 2 * 2 * 3]).unwrap(),
    ];
    let targets = vec![
        Detections::new(
            vec![
                BoundingBox::new(0.0, 0.0, 2.0, 2.0),
                BoundingBox::new(1.0, 1.0, 3.0, 2.0),
            ],
            vec![0, 1],
        )
        .unwrap(),
        Detections::new(vec![BoundingBox::new(0.0, 1.0, 1.0, 2.0)], vec![1]).unwrap(),
    ];
    let metadata = (0..2)
        .map(|i| {
            let mut meta = MetaMap::new();
            meta.insert("some_metadata".to_string(), MetaValue::Int(i));
            meta
        })
        .collect();

    AssembledDataset::from_parts(images, targets, metadata)
        .unwrap()
        .with_categories(categories())
        .with_image_paths(vec![PathBuf::from("img_0.png"), PathBuf::from("img_1.png")])
        .unwrap()
}

/// Two-sample classification dataset with differently sized images.
pub fn classification_dataset() -> AssembledDataset<ClassTarget> {
    let images = vec![
        ImageBuffer::rgb(8, 4, vec![10u8; 8 * 4 * 3]).unwrap(),
        ImageBuffer::rgb(4, 4, vec![20u8; 4 * 4 * 3]).unwrap(),
    ];
    let targets = vec![ClassTarget::single(0), ClassTarget::single(1)];
    let metadata = (0..2)
        .map(|i| {
            let mut meta = MetaMap::new();
            meta.insert("some_metadata".to_string(), MetaValue::Int(i));
            meta
        })
        .collect();

    AssembledDataset::from_parts(images, targets, metadata).unwrap()
}

/// Per-sample image filenames, relative to an export directory.
pub fn image_filenames() -> Vec<PathBuf> {
    vec![
        PathBuf::from("images").join("img_0.png"),
        PathBuf::from("images").join("img_1.png"),
    ]
}
