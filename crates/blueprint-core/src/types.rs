use std::rc::Rc;

use glam::IVec3;

/// World coordinate of a single tile: x = column, y = row, z = layer.
pub type Position = IVec3;

/// One interned output token. Equal text within a run shares one allocation.
pub type Token = Rc<str>;
