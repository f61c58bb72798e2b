use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, ImageFormat, imageops::FilterType};

use crate::domain::{common::entities::app_errors::CoreError, media::entities::EncodedImage};

use super::entities::ResizedProductImage;

pub const LARGE_WIDTH: u32 = 640;
pub const MEDIUM_WIDTH: u32 = 320;
pub const SMALL_WIDTH: u32 = 150;

/// Scales to the target width, height following to preserve the aspect
/// ratio. CPU-bound and blocking; runs inline with the request.
fn resize_to_width(image: &DynamicImage, target_width: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let target_height = ((height as u64 * target_width as u64) / width as u64).max(1) as u32;

    image.resize_exact(target_width, target_height, FilterType::Triangle)
}

fn encode_jpeg(image: &DynamicImage) -> Result<EncodedImage, CoreError> {
    // JPEG has no alpha channel; flatten before encoding.
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| CoreError::InvalidImage(format!("failed to encode image: {e}")))?;

    Ok(EncodedImage {
        data: Bytes::from(buffer.into_inner()),
        width: rgb.width(),
        height: rgb.height(),
    })
}

/// Produces the large/medium/small copies for one uploaded image.
///
/// Pure function of (bytes, target widths); an undecodable payload is a
/// validation failure naming the offending multipart field.
pub fn resize_product_image(
    field_name: &str,
    data: &[u8],
) -> Result<ResizedProductImage, CoreError> {
    let image = image::load_from_memory(data)
        .map_err(|_| CoreError::InvalidImage(format!("field '{field_name}' is not an image")))?;

    Ok(ResizedProductImage {
        large: encode_jpeg(&resize_to_width(&image, LARGE_WIDTH))?,
        medium: encode_jpeg(&resize_to_width(&image, MEDIUM_WIDTH))?,
        small: encode_jpeg(&resize_to_width(&image, SMALL_WIDTH))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 30, 200]),
        ));
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Jpeg).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn produces_all_three_widths() {
        let resized = resize_product_image("product_image_1", &jpeg_bytes(1280, 720)).unwrap();

        assert_eq!(resized.large.width, LARGE_WIDTH);
        assert_eq!(resized.medium.width, MEDIUM_WIDTH);
        assert_eq!(resized.small.width, SMALL_WIDTH);
    }

    #[test]
    fn preserves_aspect_ratio() {
        let resized = resize_product_image("product_image_1", &jpeg_bytes(1280, 720)).unwrap();

        // 720 * 640 / 1280 = 360, and so on down the sizes.
        assert_eq!(resized.large.height, 360);
        assert_eq!(resized.medium.height, 180);
        assert_eq!(resized.small.height, 84);
    }

    #[test]
    fn upscales_small_sources() {
        let resized = resize_product_image("product_image_1", &jpeg_bytes(100, 50)).unwrap();
        assert_eq!(resized.large.width, LARGE_WIDTH);
        assert_eq!(resized.large.height, 320);
    }

    #[test]
    fn rejects_non_image_payload() {
        let err = resize_product_image("product_image_3", b"definitely not an image").unwrap_err();
        match err {
            CoreError::InvalidImage(message) => assert!(message.contains("product_image_3")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn tall_images_keep_minimum_height() {
        // Extremely wide strip; height must never collapse to zero.
        let resized = resize_product_image("product_image_1", &jpeg_bytes(3000, 2)).unwrap();
        assert!(resized.small.height >= 1);
    }
}
