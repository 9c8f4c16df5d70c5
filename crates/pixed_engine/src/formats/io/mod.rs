pub(crate) mod c_source;
pub(crate) mod xpm;
