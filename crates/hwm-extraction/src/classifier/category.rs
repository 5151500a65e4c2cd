//! File type category detection from file extension.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse file type, derived from the extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileTypeCategory {
    Markdown,
    Image,
    #[serde(rename = "3d_model")]
    Model3d,
    CadFile,
    Schematic,
    Document,
    Code,
    Config,
    Data,
    Archive,
    Executable,
    Other,
}

/// Document extensions that are plain text and safe to hand to the text extractor.
const PLAIN_TEXT_DOCUMENTS: &[&str] = &["txt", "rst", "adoc", "tex", "rtf"];

impl FileTypeCategory {
    pub const ALL: [FileTypeCategory; 12] = [
        Self::Markdown,
        Self::Image,
        Self::Model3d,
        Self::CadFile,
        Self::Schematic,
        Self::Document,
        Self::Code,
        Self::Config,
        Self::Data,
        Self::Archive,
        Self::Executable,
        Self::Other,
    ];

    /// Detect the category from a lower-cased extension. Unknown or missing
    /// extensions map to `Other`.
    pub fn from_extension(ext: Option<&str>) -> FileTypeCategory {
        let Some(ext) = ext else {
            return Self::Other;
        };
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.extensions().contains(&ext))
            .unwrap_or(Self::Other)
    }

    /// Returns all file extensions associated with this category.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Markdown => &["md", "markdown", "mdx", "mdown"],
            Self::Image => &["png", "jpg", "jpeg", "gif", "bmp", "svg", "webp", "tif", "tiff"],
            Self::Model3d => &["stl", "obj", "3mf", "ply", "amf", "gltf", "glb", "fbx"],
            Self::CadFile => &[
                "step", "stp", "iges", "igs", "f3d", "fcstd", "scad", "sldprt", "sldasm",
                "dwg", "dxf", "ipt", "iam", "skp", "3dm",
            ],
            Self::Schematic => &[
                "kicad_sch", "kicad_pcb", "kicad_pro", "sch", "brd", "pcbdoc", "schdoc",
                "gbr", "drl", "fzz",
            ],
            Self::Document => &["pdf", "doc", "docx", "odt", "txt", "rtf", "rst", "adoc", "tex"],
            Self::Code => &[
                "py", "js", "ts", "rs", "c", "cpp", "cc", "h", "hpp", "ino", "go", "java",
                "sh", "lua", "m",
            ],
            Self::Config => &["yaml", "yml", "toml", "ini", "cfg", "conf", "gcode"],
            Self::Data => &["csv", "tsv", "json", "xml", "xls", "xlsx", "ods"],
            Self::Archive => &["zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar"],
            Self::Executable => &["exe", "bin", "hex", "elf", "dll", "so", "dylib", "uf2"],
            Self::Other => &[],
        }
    }

    /// Returns the stable string tag of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Image => "image",
            Self::Model3d => "3d_model",
            Self::CadFile => "cad_file",
            Self::Schematic => "schematic",
            Self::Document => "document",
            Self::Code => "code",
            Self::Config => "config",
            Self::Data => "data",
            Self::Archive => "archive",
            Self::Executable => "executable",
            Self::Other => "other",
        }
    }

    /// Whether files of this category (with this extension) can be read as text.
    pub fn is_text(&self, ext: Option<&str>) -> bool {
        match self {
            Self::Markdown | Self::Code | Self::Config | Self::Data => {
                !matches!(ext, Some("xls" | "xlsx" | "ods"))
            }
            Self::Document => ext.is_some_and(|e| PLAIN_TEXT_DOCUMENTS.contains(&e)),
            _ => false,
        }
    }

    /// CAD, 3D model, and schematic files.
    pub fn is_design(&self) -> bool {
        matches!(self, Self::CadFile | Self::Model3d | Self::Schematic)
    }
}

impl fmt::Display for FileTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
