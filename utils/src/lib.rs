mod biguint_ext;
pub use biguint_ext::BigUintExt;

mod block;
pub use block::Block;
