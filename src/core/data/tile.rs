use crate::core::data::complex::Complex;

/// One cell of the `divider × divider` grid a still render is split into.
///
/// Carries its pixel footprint in the final raster plus the plane transform
/// shared by every tile of the render. Tiles are recentred around
/// `divider / 3` rather than `divider / 2`, and the plane scale is always
/// `raster_width / 5`; both are part of the rendered picture and must not be
/// "corrected".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tile {
    column: u32,
    row: u32,
    width: u32,
    height: u32,
    pos_x: f64,
    pos_y: f64,
    zoom: f64,
}

impl Tile {
    /// Tile at grid cell `(column, row)` of a `raster_width × raster_height`
    /// render split `divider` ways per axis. `divider` must be non-zero.
    #[must_use]
    pub fn for_grid_cell(
        column: u32,
        row: u32,
        raster_width: u32,
        raster_height: u32,
        divider: u32,
    ) -> Self {
        let divider_f = f64::from(divider);
        let centre_offset = divider_f / 3.0;
        let step_x = f64::from(raster_width) / divider_f;
        let step_y = f64::from(raster_height) / divider_f;

        Self {
            column,
            row,
            width: raster_width / divider,
            height: raster_height / divider,
            pos_x: (f64::from(column) - centre_offset) * step_x,
            pos_y: (f64::from(row) - centre_offset) * step_y,
            zoom: f64::from(raster_width) / 5.0,
        }
    }

    /// Every tile of the grid, column-major like the dispatch order of the
    /// renderer.
    #[must_use]
    pub fn grid(raster_width: u32, raster_height: u32, divider: u32) -> Vec<Self> {
        (0..divider)
            .flat_map(|column| {
                (0..divider).map(move |row| {
                    Self::for_grid_cell(column, row, raster_width, raster_height, divider)
                })
            })
            .collect()
    }

    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[must_use]
    pub fn row(&self) -> u32 {
        self.row
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Top-left corner of this tile inside the assembled raster.
    #[must_use]
    pub fn origin(&self) -> (u32, u32) {
        (self.column * self.width, self.row * self.height)
    }

    #[must_use]
    pub fn plane_coordinate(&self, local_x: u32, local_y: u32) -> Complex {
        Complex {
            real: (f64::from(local_x) + self.pos_x - f64::from(self.width) / 2.0) / self.zoom,
            imag: (f64::from(local_y) + self.pos_y - f64::from(self.height) / 2.0) / self.zoom,
        }
    }
}
