use crate::core::data::colour::Colour;
use std::error::Error;

pub trait DrawSurface {
    type Error: Error + 'static;

    fn fill_rect(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        colour: Colour,
    ) -> Result<(), Self::Error>;

    fn present(&mut self) -> Result<(), Self::Error>;
}
