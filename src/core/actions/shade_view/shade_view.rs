use rayon::prelude::*;

use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::escape_score::escape_score;
use crate::core::view::state::ViewState;

/// Colours every logical pixel of the view, row-major.
///
/// Rows are evaluated in parallel; the result is complete before it is
/// returned, so a frame is never drawn half-computed.
pub fn shade_view<CMap>(
    state: &ViewState,
    virtual_width: u32,
    virtual_height: u32,
    max_iterations: u32,
    colour_map: &CMap,
) -> Vec<Colour>
where
    CMap: ColourMap<f64> + Sync,
{
    let rows: Vec<Vec<Colour>> = (0..virtual_height)
        .into_par_iter()
        .map(|y| {
            (0..virtual_width)
                .map(|x| {
                    let c = state.plane_coordinate(x, y, virtual_width, virtual_height);
                    colour_map.map(escape_score(c.real, c.imag, max_iterations))
                })
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}
