use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use svg2pdf::config::RasterSize;
use svg2pdf::logging::{init_logging, LoggingConfig};
use svg2pdf::{CairoCanvas, PdfExporter, RecordingCanvas, SvgToCanvas};

/// Draws the paths, circles, ellipses and text of an SVG file and saves them as a PDF page.
#[derive(Debug, Parser)]
#[command(name = "svg2pdf", version)]
struct Args {
    /// SVG file to draw
    input: PathBuf,

    /// Output file name without the .pdf extension (defaults to the input's stem)
    #[arg(short, long)]
    output: Option<String>,

    /// Directory the PDF is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Raster width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Raster height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Log the drawing calls instead of writing a PDF
    #[arg(long)]
    dry_run: bool,

    /// Log filter, e.g. "debug" or "svgr=trace"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig {
	env_filter: args.log.clone(),
	..LoggingConfig::default()
    });

    let document = svg2pdf::svgr::load_svg(&args.input)
	.with_context(|| format!("reading {}", args.input.display()))?;
    let size = RasterSize::resolve(args.width, args.height, &document);
    info!("{}: {} shapes on a {}x{} raster",
	  args.input.display(), document.shapes.len(), size.width, size.height);

    if args.dry_run {
	let mut svg_to_canvas = SvgToCanvas::initialize(document.shapes, RecordingCanvas::new(size.width, size.height));
	svg_to_canvas.render()?;
	for op in svg_to_canvas.canvas().ops() {
	    info!("{:?}", op);
	}
	return Ok(());
    }

    let base_name = match args.output {
	Some(name) => name,
	None => args.input
	    .file_stem()
	    .map(|stem| stem.to_string_lossy().into_owned())
	    .unwrap_or_else(|| String::from("document")),
    };

    let canvas = CairoCanvas::new(size.width, size.height).context("creating raster surface")?;
    let mut svg_to_canvas = SvgToCanvas::initialize(document.shapes, canvas);
    svg_to_canvas.render().context("drawing shapes")?;

    let mut exporter = PdfExporter::new(&args.out_dir);
    let path = svg_to_canvas.export_document(&base_name, &mut exporter)?;
    println!("{}", path.display());

    Ok(())
}
