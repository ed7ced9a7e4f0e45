use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wm_config::ArrowConfig;
use wm_core::{recolor_icon_in_place, TintError, TintableImage};

/// Error type for catalog icon loading.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to load icon {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
    #[error("invalid icon buffer: {0}")]
    Tint(#[from] TintError),
}

/// Read an image file into RGBA pixels.
pub fn load_icon_pixels(path: &Path) -> Result<TintableImage, IconError> {
    let rgba = ::image::open(path)
        .map_err(|source| IconError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = rgba.dimensions();
    Ok(TintableImage::from_rgba8(width, height, rgba.as_raw())?)
}

/// Load the catalog icon for an arrow, tinted with the arrow's color when
/// `change_icon_color` is set.
pub fn build_icon(path: &Path, config: &ArrowConfig) -> Result<Image, IconError> {
    let mut pixels = load_icon_pixels(path)?;
    if config.change_icon_color {
        recolor_icon_in_place(&mut pixels, config.icon_tint());
    }
    Ok(icon_image(&pixels))
}

/// Convert tinted pixels into a GPU image.
pub fn icon_image(pixels: &TintableImage) -> Image {
    Image::new(
        Extent3d {
            width: pixels.width(),
            height: pixels.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels.to_rgba8(),
        TextureFormat::Rgba8UnormSrgb,
        default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wm_core::ArrowId;

    fn write_icon(path: &Path) {
        let img = ::image::RgbaImage::from_raw(2, 1, vec![255, 128, 51, 255, 77, 77, 77, 0])
            .unwrap();
        img.save(path).unwrap();
    }

    #[test]
    fn tints_icon_when_enabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arrow.png");
        write_icon(&path);

        let mut config = ArrowConfig::new(ArrowId(1));
        config.color = [0.5, 1.0, 0.0, 1.0];
        config.icon_alpha = 0.8;

        let icon = build_icon(&path, &config).unwrap();
        assert_eq!(icon.width(), 2);
        assert_eq!(icon.height(), 1);
        assert_eq!(&icon.data[0..4], &[128, 128, 0, 204]);
        assert_eq!(&icon.data[4..8], &[77, 77, 77, 0]);
    }

    #[test]
    fn keeps_icon_when_disabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arrow.png");
        write_icon(&path);

        let mut config = ArrowConfig::new(ArrowId(1));
        config.change_icon_color = false;

        let icon = build_icon(&path, &config).unwrap();
        assert_eq!(icon.data, vec![255, 128, 51, 255, 77, 77, 77, 0]);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.png");
        let err = build_icon(&path, &ArrowConfig::new(ArrowId(1))).unwrap_err();
        assert!(matches!(err, IconError::Image { .. }));
        assert!(err.to_string().contains("nope.png"));
    }
}
