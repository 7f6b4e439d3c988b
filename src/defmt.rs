//! Defmt implementations for the vector types

use crate::{
    len_type::LenType,
    vec::{VecInner, VecStorage},
};
use defmt::Formatter;

impl<T, LenT: LenType, S: VecStorage<T> + ?Sized> defmt::Format for VecInner<T, LenT, S>
where
    T: defmt::Format,
{
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "{=[?]}", self.as_slice());
    }
}
