use anyhow::Context;
use resvg::{
    tiny_skia::Pixmap,
    usvg::{fontdb::Database, Options, Transform, Tree},
};
use std::sync::Arc;

/// Rasterizes SVG data into a square `edge`x`edge` PNG. The image is scaled
/// uniformly to fit the target and centered, so non-square viewboxes end up
/// letterboxed on a transparent background.
pub fn svg_to_png(data: &[u8], edge: u32, fontdb: Arc<Database>) -> anyhow::Result<Vec<u8>> {
    let opt = Options {
        fontdb,
        ..Default::default()
    };

    let rtree = Tree::from_data(data, &opt).context("Failed to parse SVG file")?;
    let source_size = rtree.size();

    let scale = (edge as f32 / source_size.width()).min(edge as f32 / source_size.height());
    let tx = (edge as f32 - source_size.width() * scale) / 2.0;
    let ty = (edge as f32 - source_size.height() * scale) / 2.0;

    let mut pixmap = Pixmap::new(edge, edge).context("Failed to create pixmap")?;
    let transform = Transform::from_scale(scale, scale).post_translate(tx, ty);
    resvg::render(&rtree, transform, &mut pixmap.as_mut());

    let encoded = pixmap.encode_png().context("Failed to encode PNG")?;

    Ok(encoded)
}
