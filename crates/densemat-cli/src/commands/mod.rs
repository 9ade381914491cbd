//! Subcommand implementations.

pub(crate) mod det;
pub(crate) mod invert;
pub(crate) mod multiply;
pub(crate) mod normalize;
pub(crate) mod train_xor;
pub(crate) mod transpose;
