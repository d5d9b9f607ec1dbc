use std::sync::Arc;

use chrono::Utc;
use image::DynamicImage;
use uuid::Uuid;

use crate::pipeline::types::Tone;

/// One caption request flowing through the service layer. The image is
/// shared rather than copied so cloning a request stays cheap.
#[derive(Clone)]
pub struct CaptionRequest {
    pub id: Uuid,
    pub image: Arc<DynamicImage>,
    pub tone: Tone,
    pub timestamp: i64,
}

impl CaptionRequest {
    pub fn new(image: DynamicImage, tone: Tone) -> Self {
        Self {
            id: Uuid::new_v4(),
            image: Arc::new(image),
            tone,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn cloning_request_shares_image_buffer() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            16,
            16,
            Rgb([1, 2, 3]),
        ));
        let r1 = CaptionRequest::new(img, Tone::Casual);
        let r2 = r1.clone();
        assert!(Arc::ptr_eq(&r1.image, &r2.image));
        assert_eq!(r1.id, r2.id);
    }
}
