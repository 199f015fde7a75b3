use crate::{
    err::format_anyhow_chain,
    progress_bar::ProgressBar,
    sizes::{SizeEntry, SIZE_TABLE},
    svg::svg_to_png,
};
use anyhow::{bail, Context};
use console::style;
use image::ImageFormat;
use indicatif::MultiProgress;
use log::{info, warn};
use resvg::usvg::fontdb::Database;
use std::{io::Cursor, path::Path, sync::Arc};

/// Runs the full generation pass: one output file per size-table entry, in
/// table order. A failed entry is reported and skipped; the rest of the
/// table is still processed.
pub fn generate(
    source: &Path,
    output_dir: &Path,
    multi_progress: MultiProgress,
) -> anyhow::Result<()> {
    if !source.exists() {
        bail!("Source file not found: {}", source.display());
    }

    let data = fs_err::read(source)?;
    fs_err::create_dir_all(output_dir)?;

    let font_db = Arc::new({
        let mut db = Database::new();
        db.load_system_fonts();
        db
    });

    info!("Generating favicons from {}...", source.display());

    let pb = ProgressBar::new(multi_progress, "Generating favicons", SIZE_TABLE.len());

    for entry in SIZE_TABLE {
        pb.set_msg(entry.file_name);

        match write_favicon(&data, output_dir, entry, font_db.clone()) {
            Ok(()) => {
                info!(
                    "{} Created {} ({}x{})",
                    style("✓").green(),
                    entry.file_name,
                    entry.edge,
                    entry.edge
                );
            }
            Err(err) => {
                warn!(
                    "{} Failed to create {}: {}",
                    style("✗").red(),
                    entry.file_name,
                    format_anyhow_chain(&err)
                );
            }
        }

        pb.inc(1);
    }

    pb.finish();

    info!("Favicon generation complete!");
    report(output_dir);

    Ok(())
}

fn write_favicon(
    data: &[u8],
    output_dir: &Path,
    entry: &SizeEntry,
    font_db: Arc<Database>,
) -> anyhow::Result<()> {
    let png = svg_to_png(data, entry.edge, font_db)?;

    // Round-tripping through the image crate strips ancillary chunks from
    // the resvg output, so the files carry pixel data only.
    let image = image::load_from_memory(&png).context("Failed to decode rasterized PNG")?;
    let mut writer = Cursor::new(Vec::new());
    image
        .write_to(&mut writer, ImageFormat::Png)
        .context("Failed to encode PNG")?;

    fs_err::write(output_dir.join(entry.file_name), writer.into_inner())?;

    Ok(())
}

/// Re-reads every expected output from disk so the summary reflects what
/// actually landed there, not what this run thinks it wrote.
fn report(output_dir: &Path) {
    info!("Generated files:");

    for entry in SIZE_TABLE {
        let path = output_dir.join(entry.file_name);

        match fs_err::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                info!(
                    "  - {} ({:.2} KB)",
                    entry.file_name,
                    meta.len() as f64 / 1024.0
                );
            }
            _ => {
                warn!("  - {} (not created)", entry.file_name);
            }
        }
    }
}
