//! Mutation-annotated tree: the arena tree the split scanner works on,
//! plus the Newick and protobuf codecs used to read and write it.

pub mod mutation;
pub mod newick;
pub mod pb;
pub mod tree;

pub use mutation::{parse_position, Mutation};
pub use pb::MatTree;
pub use tree::{Node, NodeIdx, Tree};
