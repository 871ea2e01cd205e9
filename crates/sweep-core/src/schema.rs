mod entity_map;
pub use entity_map::EntityMap;

mod key;
pub use key::KeyMap;

mod property;
pub use property::{ComplexMap, PropertyMap, ScalarMap};
