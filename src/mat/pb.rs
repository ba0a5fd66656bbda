//! Loading and saving UShER mutation-annotated trees (`.pb` / `.pb.gz`).

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use niffler::get_reader;
use protobuf::Message;

use crate::error::MatError;
use crate::generated::parsimony;
use crate::mat::mutation::Mutation;
use crate::mat::newick;
use crate::mat::tree::Tree;

/// A tree together with the parts of the MAT file this crate does not
/// interpret. Those are written back unchanged.
#[derive(Debug, Clone)]
pub struct MatTree {
    pub tree: Tree,
    condensed_nodes: Vec<parsimony::CondensedNode>,
    metadata: Vec<parsimony::NodeMetadata>,
}

impl MatTree {
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            condensed_nodes: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Reads a MAT file; gzip (or any other format niffler recognises) is
    /// detected from the content.
    pub fn load(path: &Path) -> Result<Self, MatError> {
        let file = File::open(path).map_err(|e| MatError::io(path, e))?;
        let (inner_reader, _compression) = get_reader(Box::new(file))?;
        let mut reader = BufReader::with_capacity(16 * 1024 * 1024, inner_reader);

        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| MatError::io(path, e))?;
        Self::from_bytes(&buf)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MatError> {
        let data = parsimony::Data::parse_from_bytes(bytes)?;
        Self::from_data(data)
    }

    fn from_data(data: parsimony::Data) -> Result<Self, MatError> {
        let mut tree = newick::parse(&data.newick)?;
        let order = tree.preorder();
        if order.len() != data.node_mutations.len() {
            return Err(MatError::MutationListCount {
                nodes: order.len(),
                lists: data.node_mutations.len(),
            });
        }

        for (idx, list) in order.into_iter().zip(data.node_mutations) {
            let mutations = list.mutation.into_iter().map(Mutation::from).collect();
            if let Some(node) = tree.node_mut(idx) {
                node.set_mutations(mutations);
            }
        }

        Ok(Self {
            tree,
            condensed_nodes: data.condensed_nodes,
            metadata: data.metadata,
        })
    }

    fn to_data(&self) -> parsimony::Data {
        let node_mutations = self
            .tree
            .preorder()
            .into_iter()
            .map(|idx| parsimony::MutationList {
                mutation: self.tree[idx]
                    .mutations()
                    .iter()
                    .map(parsimony::Mutation::from)
                    .collect(),
                ..Default::default()
            })
            .collect();

        parsimony::Data {
            newick: newick::write(&self.tree),
            node_mutations,
            condensed_nodes: self.condensed_nodes.clone(),
            metadata: self.metadata.clone(),
            ..Default::default()
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, MatError> {
        Ok(self.to_data().write_to_bytes()?)
    }

    /// Writes the tree; the output is gzip-compressed when the path ends in
    /// `.gz`. The gzip trailer and the final buffer flush are checked, so a
    /// short write is reported instead of leaving a truncated file.
    pub fn save(&self, path: &Path) -> Result<(), MatError> {
        let bytes = self.to_bytes()?;
        let io_err = |e: std::io::Error| MatError::io(path, e);

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        if path.extension().is_some_and(|ext| ext == "gz") {
            let mut encoder = GzEncoder::new(writer, Compression::new(6));
            encoder.write_all(&bytes).map_err(io_err)?;
            writer = encoder.finish().map_err(io_err)?;
        } else {
            writer.write_all(&bytes).map_err(io_err)?;
        }

        let file = writer.into_inner().map_err(|e| io_err(e.into_error()))?;
        file.sync_all().map_err(io_err)?;
        Ok(())
    }
}
