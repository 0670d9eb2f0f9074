//! Asset Filtering
//!
//! Decides which files an asset browser listing shows. Known noise
//! (build system output, IDE droppings, version control metadata) is
//! grouped into categories that can be hidden wholesale; hidden dotfiles
//! never show regardless of configuration.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

/// Categories of file types the filter can hide wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Temporary files, caches, logs, crash dumps.
    System,
    /// Project and build system files.
    Project,
    /// IDE-specific files.
    Ide,
    /// Version control metadata.
    VersionControl,
    /// Archives and compressed files.
    Archive,
    /// Executables and link artifacts.
    Executable,
    /// Media files, often large.
    Media,
    /// Office and text documents.
    Document,
}

// When an extension appears in more than one table, the first category
// in this order claims it.
const SYSTEM_EXTENSIONS: &[&str] = &[
    ".tmp", ".temp", ".cache", ".log", ".bak", ".backup", ".old", ".orig",
    ".swp", ".swo", ".lock", ".pid", ".dump", ".dmp", ".crash", ".stackdump",
    ".thumbs.db", ".ds_store", ".desktop.ini", ".directory", ".fuse_hidden",
];

const PROJECT_EXTENSIONS: &[&str] = &[
    ".vcxproj", ".vcxproj.filters", ".vcxproj.user", ".sln", ".suo", ".user",
    ".makefile", ".make", ".cmake", ".cmakecache.txt", ".ninja", ".gyp", ".gypi",
    ".gradle", ".gradlew", ".ant", ".maven", ".pom", ".project", ".classpath",
    ".cproject", ".settings", ".metadata", ".idea", ".iml", ".ipr", ".iws",
    ".xcodeproj", ".xcworkspace", ".pbxproj", ".plist", ".entitlements",
];

const IDE_EXTENSIONS: &[&str] = &[
    ".vscode", ".vs", ".idea", ".eclipse", ".netbeans", ".qtcreator",
    ".sublime-project", ".sublime-workspace", ".atom", ".brackets",
    ".codelite", ".cbp", ".dev", ".dsw", ".dsp", ".ncb", ".aps", ".clw",
];

const VERSION_CONTROL_EXTENSIONS: &[&str] = &[
    ".git", ".gitignore", ".gitattributes", ".gitmodules", ".gitkeep",
    ".svn", ".hg", ".hgignore", ".bzr", ".bzrignore", ".cvs", ".cvsignore",
    ".p4ignore", ".tfignore", ".darcs",
];

const ARCHIVE_EXTENSIONS: &[&str] = &[
    ".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz", ".lzma", ".lz",
    ".cab", ".iso", ".dmg", ".pkg", ".deb", ".rpm", ".msi", ".exe",
    ".war", ".jar", ".ear", ".aar", ".apk",
];

const EXECUTABLE_EXTENSIONS: &[&str] = &[
    ".exe", ".dll", ".so", ".dylib", ".lib", ".a", ".o", ".obj", ".pdb",
    ".ilk", ".exp", ".com", ".bat", ".cmd", ".ps1", ".sh", ".bash",
    ".app", ".bundle", ".framework",
];

const MEDIA_EXTENSIONS: &[&str] = &[
    ".avi", ".mov", ".mp4", ".mkv", ".wmv", ".flv", ".webm", ".m4v",
    ".mp3", ".wav", ".flac", ".ogg", ".wma", ".aac", ".m4a", ".opus",
    ".psd", ".ai", ".eps", ".indd", ".sketch", ".fig", ".xd",
    ".blend", ".max", ".maya", ".c4d", ".3ds", ".obj", ".fbx", ".dae",
];

const DOCUMENT_EXTENSIONS: &[&str] = &[
    ".doc", ".docx", ".pdf", ".rtf", ".odt", ".pages", ".tex", ".latex",
    ".xls", ".xlsx", ".ods", ".numbers", ".csv", ".tsv",
    ".ppt", ".pptx", ".odp", ".key", ".prezi",
];

/// Categories hidden by a freshly constructed [`AssetFilter`].
const DEFAULT_FILTERED: [AssetCategory; 4] = [
    AssetCategory::System,
    AssetCategory::Project,
    AssetCategory::Ide,
    AssetCategory::VersionControl,
];

impl AssetCategory {
    /// All categories, in extension-lookup priority order.
    pub const ALL: [AssetCategory; 8] = [
        AssetCategory::System,
        AssetCategory::Project,
        AssetCategory::Ide,
        AssetCategory::VersionControl,
        AssetCategory::Archive,
        AssetCategory::Executable,
        AssetCategory::Media,
        AssetCategory::Document,
    ];

    /// Human-readable name for filter menus.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            AssetCategory::System => "System Files",
            AssetCategory::Project => "Project Files",
            AssetCategory::Ide => "IDE Files",
            AssetCategory::VersionControl => "Version Control",
            AssetCategory::Archive => "Archives",
            AssetCategory::Executable => "Executables",
            AssetCategory::Media => "Media Files",
            AssetCategory::Document => "Documents",
        }
    }

    /// Normalized extensions belonging to this category.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetCategory::System => SYSTEM_EXTENSIONS,
            AssetCategory::Project => PROJECT_EXTENSIONS,
            AssetCategory::Ide => IDE_EXTENSIONS,
            AssetCategory::VersionControl => VERSION_CONTROL_EXTENSIONS,
            AssetCategory::Archive => ARCHIVE_EXTENSIONS,
            AssetCategory::Executable => EXECUTABLE_EXTENSIONS,
            AssetCategory::Media => MEDIA_EXTENSIONS,
            AssetCategory::Document => DOCUMENT_EXTENSIONS,
        }
    }

    /// The category a normalized extension belongs to, if any.
    #[must_use]
    pub fn of_extension(extension: &str) -> Option<AssetCategory> {
        extension_categories().get(extension).copied()
    }
}

fn extension_categories() -> &'static HashMap<&'static str, AssetCategory> {
    static TABLE: OnceLock<HashMap<&'static str, AssetCategory>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for category in AssetCategory::ALL {
            for extension in category.extensions() {
                table.entry(*extension).or_insert(category);
            }
        }
        table
    })
}

/// Configurable file filtering for asset browser listings.
///
/// Two rules always apply: hidden dotfiles are never shown, and a
/// non-empty search string must match the file name (case-insensitive
/// substring). Category and custom-extension filtering sit on top.
#[derive(Debug, Clone)]
pub struct AssetFilter {
    filtered_categories: HashSet<AssetCategory>,
    custom_filtered_extensions: HashSet<String>,
}

impl AssetFilter {
    /// Default filter: system, project, IDE and version-control noise
    /// hidden; archives, executables, media and documents visible.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filtered_categories: DEFAULT_FILTERED.into_iter().collect(),
            custom_filtered_extensions: HashSet::new(),
        }
    }

    /// Filter with no category hiding at all. Workspace listings use
    /// this: the content is the user's own.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            filtered_categories: HashSet::new(),
            custom_filtered_extensions: HashSet::new(),
        }
    }

    /// Whether the file at `path` passes all filtering rules.
    #[must_use]
    pub fn should_show(&self, path: &Path, search: &str) -> bool {
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if filename.starts_with('.') {
            return false;
        }

        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            let extension = normalize_extension(extension);
            if let Some(category) = AssetCategory::of_extension(&extension) {
                if self.is_category_filtered(category) {
                    return false;
                }
            }
            if self.custom_filtered_extensions.contains(&extension) {
                return false;
            }
        }

        if !search.is_empty() && !filename.to_lowercase().contains(&search.to_lowercase()) {
            return false;
        }

        true
    }

    /// Whether files with this extension are currently hidden.
    #[must_use]
    pub fn is_filtered_extension(&self, extension: &str) -> bool {
        let extension = normalize_extension(extension);
        if self.custom_filtered_extensions.contains(&extension) {
            return true;
        }
        AssetCategory::of_extension(&extension)
            .is_some_and(|category| self.is_category_filtered(category))
    }

    /// Hides or shows a whole category of files.
    pub fn set_category_filtered(&mut self, category: AssetCategory, filtered: bool) {
        if filtered {
            self.filtered_categories.insert(category);
        } else {
            self.filtered_categories.remove(&category);
        }
    }

    #[must_use]
    pub fn is_category_filtered(&self, category: AssetCategory) -> bool {
        self.filtered_categories.contains(&category)
    }

    /// Hides files with an extension outside the category tables.
    pub fn add_filtered_extension(&mut self, extension: &str) {
        self.custom_filtered_extensions
            .insert(normalize_extension(extension));
    }

    pub fn remove_filtered_extension(&mut self, extension: &str) {
        self.custom_filtered_extensions
            .remove(&normalize_extension(extension));
    }

    /// Discards all customization and restores the default category set.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::new();
    }
}

impl Default for AssetFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercases and dot-prefixes so "OBJ", "obj" and ".obj" compare equal.
fn normalize_extension(extension: &str) -> String {
    let lower = extension.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}
