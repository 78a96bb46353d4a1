use eventdoc_model::ImageLayout;
use eventdoc_types::PixelSize;
use serde::{Deserialize, Serialize};

/// Fixed pixel sizes the planner hands out, one set per builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSizes {
    /// Size of a stand-alone image.
    pub large: PixelSize,
    /// Cell height in a row layout.
    pub narrow_height: u32,
    /// Total width shared by the cells of a row layout.
    pub row_width: u32,
    /// Cell size in a grid layout.
    pub medium: PixelSize,
}

impl Default for LayoutSizes {
    fn default() -> Self {
        Self {
            large: PixelSize::new(500, 350),
            narrow_height: 200,
            row_width: 600,
            medium: PixelSize::new(250, 180),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangementKind {
    /// One image per row in a single column.
    Stacked,
    Row,
    Grid,
}

/// The computed table shape for one image block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    pub kind: ArrangementKind,
    pub rows: usize,
    pub columns: usize,
    pub cell: PixelSize,
    /// Number of images placed; cells past this index are left empty.
    pub images: usize,
}

/// One cell position in an [`Arrangement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub row: usize,
    pub column: usize,
    /// Index into the block's image list, `None` for trailing filler cells.
    pub image: Option<usize>,
}

impl Arrangement {
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Every cell in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.cell_count()).map(move |i| Slot {
            row: i / self.columns.max(1),
            column: i % self.columns.max(1),
            image: (i < self.images).then_some(i),
        })
    }
}

/// Decides how `count` images declared with `mode` are tabulated.
///
/// Row and grid layouts with fewer than two images fall back to a stacked
/// single-column layout.
pub fn plan(count: usize, mode: ImageLayout, sizes: &LayoutSizes) -> Arrangement {
    let arrangement = match mode {
        ImageLayout::Row if count > 1 => {
            let width = sizes.row_width / count as u32;
            Arrangement {
                kind: ArrangementKind::Row,
                rows: 1,
                columns: count,
                cell: PixelSize::new(width, sizes.narrow_height),
                images: count,
            }
        }
        ImageLayout::Grid if count > 1 => {
            let columns = ceil_sqrt(count);
            Arrangement {
                kind: ArrangementKind::Grid,
                rows: count.div_ceil(columns),
                columns,
                cell: sizes.medium,
                images: count,
            }
        }
        ImageLayout::Single | ImageLayout::Row | ImageLayout::Grid => Arrangement {
            kind: ArrangementKind::Stacked,
            rows: count,
            columns: 1,
            cell: sizes.large,
            images: count,
        },
    };
    log::debug!(
        "Planned {} image(s) as {:?}: {}x{} cells of {}x{}px",
        count,
        arrangement.kind,
        arrangement.rows,
        arrangement.columns,
        arrangement.cell.width,
        arrangement.cell.height
    );
    arrangement
}

/// Smallest `c` with `c * c >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 1 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c.max(1)
}
