/// Viewport fits the whole grid into a screen rectangle with square cells
/// and converts between screen and grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    grid_width: usize,
    grid_height: usize,
}

impl Viewport {
    /// Largest square cell size that fits the grid, centred in the area.
    /// Boards wider than the area get sub-pixel cells rather than spilling out.
    pub fn fit(grid: (usize, usize), area_width: f32, area_height: f32) -> Self {
        let (grid_width, grid_height) = grid;
        let cell_size = (area_width / grid_width.max(1) as f32)
            .min(area_height / grid_height.max(1) as f32)
            .max(0.0);
        let origin_x = ((area_width - cell_size * grid_width as f32) / 2.0).max(0.0);
        let origin_y = ((area_height - cell_size * grid_height as f32) / 2.0).max(0.0);

        Self { origin_x, origin_y, cell_size, grid_width, grid_height }
    }

    /// Grid cell under a screen point, None when the point is off the board
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return None;
        }
        let gx = ((screen_x - self.origin_x) / self.cell_size).floor();
        let gy = ((screen_y - self.origin_y) / self.cell_size).floor();
        if gx < 0.0 || gy < 0.0 {
            return None;
        }
        let (gx, gy) = (gx as usize, gy as usize);
        (gx < self.grid_width && gy < self.grid_height).then_some((gx, gy))
    }

    /// Top-left screen corner of a grid cell
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        (
            self.origin_x + grid_x as f32 * self.cell_size,
            self.origin_y + grid_y as f32 * self.cell_size,
        )
    }
}
