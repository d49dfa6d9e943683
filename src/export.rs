use std::io::Cursor;
use std::path::{Path, PathBuf};

use cairo::{Context, ImageSurface, PdfSurface};
use log::debug;

use crate::canvas::Raster;
use crate::error::Error;

// A4 portrait, in points
pub const PAGE_WIDTH_PT: f64 = 595.28;
pub const PAGE_HEIGHT_PT: f64 = 841.89;

// raster pixels are placed at 96 dpi
pub const PX_TO_PT: f64 = 72.0 / 96.0;

/// Turns a finished raster into a document on disk.
pub trait DocumentExporter {
    fn export(&mut self, raster: &Raster, base_name: &str) -> Result<PathBuf, Error>;
}

/// Writes one A4 page with the raster at its top-left corner.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    out_dir: PathBuf,
}

impl PdfExporter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
	PdfExporter { out_dir: out_dir.as_ref().to_path_buf() }
    }

    pub fn output_path(&self, base_name: &str) -> PathBuf {
	self.out_dir.join(format!("{}.pdf", base_name))
    }
}

impl DocumentExporter for PdfExporter {
    fn export(&mut self, raster: &Raster, base_name: &str) -> Result<PathBuf, Error> {
	let path = self.output_path(base_name);

	let image = ImageSurface::create_from_png(&mut Cursor::new(&raster.png))
	    .map_err(|err| Error::Export(format!("bad png raster: {:?}", err)))?;
	let pdf = PdfSurface::new(PAGE_WIDTH_PT, PAGE_HEIGHT_PT, &path).map_err(Error::Cairo)?;

	{
	    let cr = Context::new(&pdf);
	    cr.scale(PX_TO_PT, PX_TO_PT);
	    cr.set_source_surface(&image, 0.0, 0.0);
	    cr.paint();

	    match cr.status() {
		cairo::Status::Success => (),
		status => return Err(Error::Cairo(status)),
	    }
	}
	pdf.finish();
	match pdf.status() {
	    cairo::Status::Success => (),
	    status => return Err(Error::Cairo(status)),
	}

	debug!("wrote pdf page {}x{}pt to {}", PAGE_WIDTH_PT, PAGE_HEIGHT_PT, path.display());
	Ok(path)
    }
}
