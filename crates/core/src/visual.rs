//! Renderable handles and the boundary with the rendering backend.
//!
//! The core never looks at pixels. A [`Visual`] names an asset and tracks the
//! size it should be painted at; an [`AssetSource`] resolves visuals for card
//! codes and a [`Surface`] paints them.

use crate::{CardCode, Rect, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File stem of the shared back-face asset.
pub const BACK_ASSET_STEM: &str = "back-side";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset not found: {key}")]
    NotFound { key: String },
    #[error("asset {key} is unreadable: {reason}")]
    Unreadable { key: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front(CardCode),
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visual {
    key: String,
    face: Face,
    native: Size,
    size: Size,
}

impl Visual {
    pub fn new(key: impl Into<String>, face: Face, native: Size) -> Self {
        Self {
            key: key.into(),
            face,
            native,
            size: native,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn native_size(&self) -> Size {
        self.native
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Scale relative to the native size, not the current one.
    pub fn rescale(&mut self, factor: f32) {
        self.size = self.native.scaled(factor);
    }

    pub fn apply(&mut self, spec: SizeSpec) {
        match spec {
            SizeSpec::Scale(factor) => self.rescale(factor),
            SizeSpec::Exact(size) => self.resize(size),
        }
    }
}

/// Requested footprint for a card, applied identically to both faces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SizeSpec {
    Scale(f32),
    Exact(Size),
}

pub trait AssetSource {
    fn front(&self, code: CardCode) -> Result<Visual, AssetError>;
    fn back(&self) -> Result<Visual, AssetError>;
}

pub trait Surface {
    /// Paint `visual` stretched over `rect`.
    fn blit(&mut self, visual: &Visual, rect: Rect);
    /// Outline a container rectangle.
    fn stroke_rect(&mut self, rect: Rect);
}

/// Asset source that labels every valid code, used when no card images are
/// installed.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticAssets {
    native: Size,
}

impl SyntheticAssets {
    pub fn new(native: Size) -> Self {
        Self { native }
    }
}

impl Default for SyntheticAssets {
    fn default() -> Self {
        Self::new(Size::new(100, 145))
    }
}

impl AssetSource for SyntheticAssets {
    fn front(&self, code: CardCode) -> Result<Visual, AssetError> {
        Ok(Visual::new(
            format!("synthetic/{code}"),
            Face::Front(code),
            self.native,
        ))
    }

    fn back(&self) -> Result<Visual, AssetError> {
        Ok(Visual::new(
            format!("synthetic/{BACK_ASSET_STEM}"),
            Face::Back,
            self.native,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_is_relative_to_native() {
        let mut visual = SyntheticAssets::default().back().unwrap();
        visual.rescale(0.5);
        visual.rescale(0.5);
        assert_eq!(visual.size(), Size::new(50, 72));
        assert_eq!(visual.native_size(), Size::new(100, 145));
    }

    #[test]
    fn exact_spec_overrides_size() {
        let code = "QS".parse().unwrap();
        let mut visual = SyntheticAssets::default().front(code).unwrap();
        visual.apply(SizeSpec::Exact(Size::new(7, 5)));
        assert_eq!(visual.size(), Size::new(7, 5));
        assert_eq!(visual.face(), Face::Front(code));
    }
}
