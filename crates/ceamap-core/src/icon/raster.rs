//! Pixel work for marker icons: decoding sources, drawing the composite and
//! encoding it as an embeddable PNG data URL.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage, codecs::png::PngEncoder};

use super::layout::{CANVAS_SIZE, Layout};
use crate::error::IconError;

const DISC_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Decode source bytes (any format the `image` crate was built with).
pub fn decode(file: &str, bytes: &[u8]) -> Result<RgbaImage, IconError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|err| IconError::Decode {
            file: file.to_string(),
            reason: err.to_string(),
        })
}

/// Draw `images` onto a fresh canvas following [`Layout::for_count`].
pub fn composite(images: &[RgbaImage]) -> RgbaImage {
    let mut canvas = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);

    match Layout::for_count(images.len()) {
        Layout::Empty => {}
        Layout::Single(placement) => {
            draw_scaled(&mut canvas, &images[0], placement.x, placement.y, placement.size);
        }
        Layout::Ring(placements) => {
            fill_disc(&mut canvas, DISC_COLOR);
            for (image, placement) in images.iter().zip(placements) {
                draw_scaled(&mut canvas, image, placement.x, placement.y, placement.size);
            }
        }
    }

    canvas
}

fn draw_scaled(canvas: &mut RgbaImage, source: &RgbaImage, x: i64, y: i64, size: u32) {
    if source.dimensions() == (size, size) {
        imageops::overlay(canvas, source, x, y);
    } else {
        let scaled = imageops::resize(source, size, size, FilterType::Triangle);
        imageops::overlay(canvas, &scaled, x, y);
    }
}

/// Fill the disc inscribed in the canvas.
fn fill_disc(canvas: &mut RgbaImage, color: Rgba<u8>) {
    let radius = f64::from(canvas.width()) / 2.0;
    let center = radius;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - center;
        let dy = f64::from(y) + 0.5 - center;
        if dx * dx + dy * dy <= radius * radius {
            *pixel = color;
        }
    }
}

/// Encode as `data:image/png;base64,...`.
pub fn to_data_url(canvas: &RgbaImage) -> Result<String, IconError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|err| IconError::Encode(err.to_string()))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
