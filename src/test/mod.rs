pub(crate) mod geometrycollection;
pub(crate) mod multilinestring;
pub(crate) mod multipolygon;
pub(crate) mod point;
