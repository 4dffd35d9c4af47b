pub mod axis_range;
pub mod axis_ticks;
pub mod bar;
pub mod bar_geometry;
pub mod color;
pub mod hatch_fill;
pub mod line;
pub mod line_geometry;
pub mod mapper;
pub mod pie;
pub mod pie_geometry;
pub mod stacked_geometry;
pub mod stacked_line;
pub mod types;

pub use axis_range::{AxisBounds, AxisRange, resolve_axis_range};
pub use bar::{Bar, BarAnimateState};
pub use color::Color;
pub use line::{Line, LinePoint};
pub use mapper::{CoordinateMapper, to_pixel_x, to_pixel_y};
pub use pie::PieSlice;
pub use stacked_line::{StackedLine, StackedLinePoint};
pub use types::{Density, Padding, PixelPoint, PixelRect, Viewport};
