/// Vertex structure with window position and color
pub struct Vertex {
    pub screen_position: [f64; 2],
    pub color: [f64; 3],
}

/// Number of vertices in the hard-coded model
pub const NVERTICES: usize = 9;

/// Model positions in the ±1 coordinate space, three triangles fanning
/// out from a shared center point
pub const VERTICES: [[f64; 2]; NVERTICES] = [
    [0.0, 0.25],   // center
    [0.25, 0.5],   // upper right
    [-0.25, 0.5],  // upper left
    [0.0, 0.25],   // center (again)
    [0.25, -0.5],  // low-lower right
    [0.5, -0.25],  // mid-lower right
    [0.0, 0.25],   // center (again)
    [-0.5, -0.25], // low-lower left
    [-0.25, -0.5], // mid-lower left
];

/// Per-vertex colors matching `VERTICES`
pub const COLORS: [[f64; 3]; NVERTICES] = [
    [1.0, 1.0, 1.0], // white
    [1.0, 0.0, 0.0], // red
    [1.0, 0.0, 0.0], // red
    [1.0, 1.0, 1.0], // white
    [0.0, 0.0, 1.0], // blue
    [0.0, 0.0, 1.0], // blue
    [1.0, 1.0, 1.0], // white
    [0.0, 1.0, 1.0], // cyan
    [0.0, 1.0, 1.0], // cyan
];
