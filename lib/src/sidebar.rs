use crate::error::{ArcmarksError, Result};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name Arc uses for its sidebar state
pub const SIDEBAR_FILENAME: &str = "StorableSidebar.json";

/// Prefix of Arc's per-vendor package directory on Windows
pub const ARC_PACKAGE_PREFIX: &str = "TheBrowserCompany.Arc";

/// Top level of the sidebar file
#[derive(Debug, Deserialize)]
pub struct SidebarFile {
    pub sidebar: Sidebar,
}

#[derive(Debug, Deserialize)]
pub struct Sidebar {
    #[serde(default)]
    pub containers: Vec<Value>,
}

/// The container holding the actual spaces and items, kept loose because
/// its entries mix several shapes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataContainer {
    pub spaces: Vec<Value>,
    pub items: Vec<Value>,
}

impl SidebarFile {
    /// The container that follows the one carrying the `global` marker.
    /// Malformed container values yield an empty `DataContainer`.
    pub fn data_container(&self) -> Result<DataContainer> {
        let containers = &self.sidebar.containers;
        let global_index = containers
            .iter()
            .position(|container| {
                container
                    .as_object()
                    .map_or(false, |fields| fields.contains_key("global"))
            })
            .ok_or(ArcmarksError::GlobalContainerMissing)?;

        let data = containers
            .get(global_index + 1)
            .ok_or(ArcmarksError::GlobalContainerMissing)?;

        Ok(serde_json::from_value(data.clone()).unwrap_or_default())
    }
}

/// Find the sidebar file: current directory first, then the per-OS
/// Arc data directory
pub fn locate() -> Result<PathBuf> {
    let local = PathBuf::from(SIDEBAR_FILENAME);
    if local.exists() {
        debug!("Found {} in current directory.", SIDEBAR_FILENAME);
        return Ok(local);
    }

    let library = default_library_path()?;
    if library.exists() {
        debug!("Found {} in Library directory.", SIDEBAR_FILENAME);
        return Ok(library);
    }

    Err(ArcmarksError::SidebarNotFound(SIDEBAR_FILENAME.to_string()))
}

/// Read and parse a sidebar file
pub fn load(path: &Path) -> Result<SidebarFile> {
    info!("Reading JSON...");
    let mut json_content = fs::read(path)?;
    let document: SidebarFile = simd_json::serde::from_slice(&mut json_content)?;
    Ok(document)
}

#[cfg(target_os = "windows")]
fn default_library_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ArcmarksError::HomeDirUnknown)?;
    let packages = home.join("AppData").join("Local").join("Packages");
    let package_dir = find_arc_package_dir(&packages)?;
    Ok(package_dir
        .join("LocalCache")
        .join("Local")
        .join("Arc")
        .join(SIDEBAR_FILENAME))
}

#[cfg(not(target_os = "windows"))]
fn default_library_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ArcmarksError::HomeDirUnknown)?;
    Ok(home
        .join("Library")
        .join("Application Support")
        .join("Arc")
        .join(SIDEBAR_FILENAME))
}

/// Find Arc's package directory under the Windows `Packages` directory.
/// Store installs suffix the directory with a signing hash, so this scans
/// for the vendor prefix and requires exactly one match.
pub fn find_arc_package_dir(packages: &Path) -> Result<PathBuf> {
    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(packages)? {
        let entry = entry?;
        if entry
            .file_name()
            .to_string_lossy()
            .starts_with(ARC_PACKAGE_PREFIX)
        {
            matches.push(entry.path());
        }
    }

    if matches.len() != 1 {
        return Err(ArcmarksError::ArcPackageDir {
            dir: packages.display().to_string(),
            found: matches.len(),
        });
    }

    Ok(matches.remove(0))
}
