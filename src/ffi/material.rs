//! Material tag constructors for the host.

use crate::automaton::Cell;

#[no_mangle]
pub extern "C" fn sa_material_empty() -> u8 {
    Cell::empty().tag()
}

#[no_mangle]
pub extern "C" fn sa_material_sand() -> u8 {
    Cell::sand().tag()
}

#[no_mangle]
pub extern "C" fn sa_material_water() -> u8 {
    Cell::water().tag()
}

#[no_mangle]
pub extern "C" fn sa_material_stone() -> u8 {
    Cell::stone().tag()
}

#[no_mangle]
pub extern "C" fn sa_material_steam() -> u8 {
    Cell::steam().tag()
}
