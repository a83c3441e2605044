use cardtable_core::{AssetError, AssetSource, CardCode, Face, Size, Visual, BACK_ASSET_STEM};
use std::path::{Path, PathBuf};

/// Card images on disk: `<root>/<code>.png` for fronts and
/// `<root>/back-side.png` for the shared back.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn front_path(&self, code: CardCode) -> PathBuf {
        self.root.join(format!("{code}.png"))
    }

    pub fn back_path(&self) -> PathBuf {
        self.root.join(format!("{BACK_ASSET_STEM}.png"))
    }

    fn load(&self, path: &Path, face: Face) -> Result<Visual, AssetError> {
        let key = path.display().to_string();
        if !path.is_file() {
            return Err(AssetError::NotFound { key });
        }
        let native = image_size(path).map_err(|reason| AssetError::Unreadable {
            key: key.clone(),
            reason,
        })?;
        Ok(Visual::new(key, face, native))
    }
}

impl AssetSource for DirAssets {
    fn front(&self, code: CardCode) -> Result<Visual, AssetError> {
        self.load(&self.front_path(code), Face::Front(code))
    }

    fn back(&self) -> Result<Visual, AssetError> {
        self.load(&self.back_path(), Face::Back)
    }
}

/// Pixel dimensions from the image header; the pixels themselves are never
/// decoded.
fn image_size(path: &Path) -> Result<Size, String> {
    let size = imagesize::size(path).map_err(|err| err.to_string())?;
    let width = u32::try_from(size.width).map_err(|err| err.to_string())?;
    let height = u32::try_from(size.height).map_err(|err| err.to_string())?;
    Ok(Size::new(width, height))
}
