//! Sample grid with geographic bounds and bilinear sampling.

/// Geographic extent of a sample grid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// A rectangular grid of optional scalar samples.
///
/// Row 0 corresponds to `lat_max` (north) and the last row to `lat_min`;
/// column 0 to `lon_min` (west) and the last column to `lon_max`. A `None`
/// entry means no data at that sample and never participates in
/// interpolation or range scanning.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    rows: usize,
    cols: usize,
    bounds: GridBounds,
    values: Vec<Option<f64>>,
}

impl SampleGrid {
    /// Create a grid from row-major values.
    pub fn new(rows: usize, cols: usize, bounds: GridBounds, values: Vec<Option<f64>>) -> Self {
        assert_eq!(values.len(), rows * cols, "grid dimensions mismatch");
        Self {
            rows,
            cols,
            bounds,
            values,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Value at a grid index, `None` when missing or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values[row * self.cols + col]
    }

    /// Latitude of a grid row (row 0 is the northern edge).
    pub fn lat_at(&self, row: usize) -> f64 {
        if self.rows < 2 {
            return self.bounds.lat_max;
        }
        let frac = row as f64 / (self.rows - 1) as f64;
        self.bounds.lat_max - frac * (self.bounds.lat_max - self.bounds.lat_min)
    }

    /// Longitude of a grid column (column 0 is the western edge).
    pub fn lon_at(&self, col: usize) -> f64 {
        if self.cols < 2 {
            return self.bounds.lon_min;
        }
        let frac = col as f64 / (self.cols - 1) as f64;
        self.bounds.lon_min + frac * (self.bounds.lon_max - self.bounds.lon_min)
    }

    /// Minimum and maximum over all finite samples, `None` when the grid
    /// has no usable data.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for value in self.values.iter().flatten() {
            if !value.is_finite() {
                continue;
            }
            range = Some(match range {
                Some((min, max)) => (min.min(*value), max.max(*value)),
                None => (*value, *value),
            });
        }
        range
    }

    /// Bilinear sample at fractional grid coordinates.
    ///
    /// `grid_y` runs down rows (0 = north) and `grid_x` across columns
    /// (0 = west). Exact at integer coordinates: the stored value is
    /// returned unchanged. Returns `None` outside the grid or when a
    /// contributing corner is missing.
    pub fn sample_at(&self, grid_y: f64, grid_x: f64) -> Option<f64> {
        let max_x = (self.cols.checked_sub(1)?) as f64;
        let max_y = (self.rows.checked_sub(1)?) as f64;
        if !(0.0..=max_x).contains(&grid_x) || !(0.0..=max_y).contains(&grid_y) {
            return None;
        }

        let x1 = grid_x.floor() as usize;
        let y1 = grid_y.floor() as usize;
        let dx = grid_x - x1 as f64;
        let dy = grid_y - y1 as f64;
        // Only pull in the neighboring row/column when the fraction is
        // nonzero, so a sample exactly on a stored value never depends on
        // a missing neighbor.
        let x2 = if dx == 0.0 { x1 } else { x1 + 1 };
        let y2 = if dy == 0.0 { y1 } else { y1 + 1 };

        let v11 = self.get(y1, x1)?;
        let v21 = self.get(y1, x2)?;
        let v12 = self.get(y2, x1)?;
        let v22 = self.get(y2, x2)?;

        let top = v11 * (1.0 - dx) + v21 * dx;
        let bottom = v12 * (1.0 - dx) + v22 * dx;
        Some(top * (1.0 - dy) + bottom * dy)
    }

    /// Bilinearly resample to a new resolution over the same bounds.
    pub fn resample(&self, rows: usize, cols: usize) -> SampleGrid {
        let mut values = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let src_y = if rows > 1 {
                row as f64 * (self.rows - 1) as f64 / (rows - 1) as f64
            } else {
                0.0
            };
            for col in 0..cols {
                let src_x = if cols > 1 {
                    col as f64 * (self.cols - 1) as f64 / (cols - 1) as f64
                } else {
                    0.0
                };
                values.push(self.sample_at(src_y, src_x));
            }
        }
        SampleGrid::new(rows, cols, self.bounds, values)
    }
}
