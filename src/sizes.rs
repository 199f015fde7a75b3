pub struct SizeEntry {
    pub file_name: &'static str,
    pub edge: u32,
}

const fn entry(file_name: &'static str, edge: u32) -> SizeEntry {
    SizeEntry { file_name, edge }
}

/// Every favicon the site needs, in the order they are generated and
/// reported. Each output is square at `edge` pixels.
pub const SIZE_TABLE: &[SizeEntry] = &[
    entry("favicon-16x16.png", 16),
    entry("favicon-32x32.png", 32),
    entry("favicon-48x48.png", 48),
    entry("apple-touch-icon-152x152.png", 152),
    entry("apple-touch-icon-167x167.png", 167),
    entry("apple-touch-icon.png", 180),
];
