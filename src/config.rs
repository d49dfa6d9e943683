use svgr::Document;

pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub width: i32,
    pub height: i32,
}

fn pixels(value: Option<f64>) -> Option<i32> {
    value.filter(|v| v.is_finite() && *v >= 1.0).map(|v| v.ceil() as i32)
}

impl RasterSize {
    /// Explicit override first, then the document's own size, then 800x800.
    pub fn resolve(width: Option<i32>, height: Option<i32>, document: &Document) -> RasterSize {
	RasterSize {
	    width: width.or_else(|| pixels(document.width)).unwrap_or(DEFAULT_WIDTH),
	    height: height.or_else(|| pixels(document.height)).unwrap_or(DEFAULT_HEIGHT),
	}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_precedence() {
	let mut document = Document::default();
	assert_eq!(RasterSize::resolve(None, None, &document), RasterSize { width: 800, height: 800 });

	document.width = Some(200.5);
	document.height = Some(0.0);
	assert_eq!(RasterSize::resolve(None, None, &document), RasterSize { width: 201, height: 800 });
	assert_eq!(RasterSize::resolve(Some(50), Some(60), &document), RasterSize { width: 50, height: 60 });
    }
}
