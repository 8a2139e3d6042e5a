use std::path::{Path, PathBuf};

use auto_impl::auto_impl;
use tracing::debug;

use crate::error::Error;

/// Resolved location of a geometry/description resource.
///
/// The model never opens this path itself; it is handed through to the
/// host that loads the geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetPath(PathBuf);

impl AssetPath {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for AssetPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[auto_impl(&, Box, Arc)]
pub trait AssetResolver {
    /// Resolves a logical asset name such as `grippers/cobot_magic_gripper.xml`.
    fn resolve(&self, logical_path: &str) -> Result<AssetPath, Error>;
}

/// Resolves logical asset names relative to a root directory.
///
/// Resolution is purely lexical, nothing is read from disk.
#[derive(Debug, Clone)]
pub struct RootedAssetResolver {
    root: PathBuf,
}

impl RootedAssetResolver {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Uses the directory containing `config_path` as the asset root.
    pub fn from_config_path<P: AsRef<Path>>(config_path: P) -> Result<Self, Error> {
        let root = config_path
            .as_ref()
            .parent()
            .ok_or_else(|| Error::NoParentDirectory(config_path.as_ref().to_owned()))?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetResolver for RootedAssetResolver {
    fn resolve(&self, logical_path: &str) -> Result<AssetPath, Error> {
        if logical_path.is_empty() {
            return Err(Error::InvalidConfig("empty asset path".to_owned()));
        }
        let path = self.root.join(logical_path);
        debug!(?logical_path, ?path, "resolved asset");
        Ok(AssetPath::new(path))
    }
}
