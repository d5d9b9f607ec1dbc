use image::RgbImage;

/// Pixel statistics backing the lighting, mood, and composition heuristics.
/// Everything here is computed in one sampled pass over the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VisualStats {
    pub mean_luma: f32,
    pub luma_stddev: f32,
    pub mean_saturation: f32,
    /// Positive when red dominates blue (warm image), negative when cool.
    pub warmth: f32,
    /// Fraction of sampled horizontal neighbor pairs with a strong
    /// luminance step; cheap proxy for edge density.
    pub edge_density: f32,
}

fn rgb_to_luma(r: u8, g: u8, b: u8) -> f32 {
    // Rec. 709 luminance
    0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32
}

fn saturation(r: u8, g: u8, b: u8) -> f32 {
    let max = r.max(g).max(b) as f32;
    let min = r.min(g).min(b) as f32;
    if max == 0.0 {
        0.0
    } else {
        (max - min) / max
    }
}

/// Luminance delta between horizontal neighbors counted as an edge.
const EDGE_LUMA_STEP: f32 = 25.0;

pub(crate) fn measure(image: &RgbImage, step: u32) -> VisualStats {
    let step = step.max(1) as usize;
    let (width, height) = image.dimensions();

    // One-pass mean/variance (Welford)
    let mut n = 0f32;
    let mut mean = 0f32;
    let mut m2 = 0f32;

    let mut saturation_sum = 0f32;
    let mut red_sum = 0f32;
    let mut blue_sum = 0f32;

    let mut edge_pairs = 0u32;
    let mut total_pairs = 0u32;

    for y in (0..height).step_by(step) {
        let mut prev_luma: Option<f32> = None;
        for x in (0..width).step_by(step) {
            let [r, g, b] = image.get_pixel(x, y).0;
            let luma = rgb_to_luma(r, g, b);

            n += 1.0;
            let delta = luma - mean;
            mean += delta / n;
            m2 += delta * (luma - mean);

            saturation_sum += saturation(r, g, b);
            red_sum += r as f32;
            blue_sum += b as f32;

            if let Some(prev) = prev_luma {
                if (luma - prev).abs() > EDGE_LUMA_STEP {
                    edge_pairs += 1;
                }
                total_pairs += 1;
            }
            prev_luma = Some(luma);
        }
    }

    if n < 1.0 {
        return VisualStats {
            mean_luma: 0.0,
            luma_stddev: 0.0,
            mean_saturation: 0.0,
            warmth: 0.0,
            edge_density: 0.0,
        };
    }

    let stddev = if n < 2.0 { 0.0 } else { (m2 / (n - 1.0)).sqrt() };

    VisualStats {
        mean_luma: mean,
        luma_stddev: stddev,
        mean_saturation: saturation_sum / n,
        warmth: (red_sum - blue_sum) / n,
        edge_density: if total_pairs == 0 {
            0.0
        } else {
            edge_pairs as f32 / total_pairs as f32
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn uniform(color: [u8; 3]) -> RgbImage {
        ImageBuffer::from_pixel(64, 64, Rgb(color))
    }

    #[test]
    fn white_image_is_bright_and_flat() {
        let stats = measure(&uniform([255, 255, 255]), 4);
        assert!(stats.mean_luma > 250.0);
        assert!(stats.luma_stddev < 1.0);
        assert!(stats.edge_density < f32::EPSILON);
    }

    #[test]
    fn gray_image_has_zero_saturation() {
        let stats = measure(&uniform([128, 128, 128]), 4);
        assert!(stats.mean_saturation < f32::EPSILON);
    }

    #[test]
    fn red_image_reads_warm() {
        let stats = measure(&uniform([200, 40, 20]), 4);
        assert!(stats.warmth > 100.0);
    }

    #[test]
    fn checkerboard_has_high_edge_density() {
        let img: RgbImage = ImageBuffer::from_fn(64, 64, |x, _| {
            if x % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let stats = measure(&img, 1);
        assert!(stats.edge_density > 0.9);
        assert!(stats.luma_stddev > 100.0);
    }
}
