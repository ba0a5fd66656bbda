// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `parsimony.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:Parsimony.Mutation)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Mutation {
    // message fields
    // @@protoc_insertion_point(field:Parsimony.Mutation.position)
    pub position: i32,
    // @@protoc_insertion_point(field:Parsimony.Mutation.ref_nuc)
    pub ref_nuc: i32,
    // @@protoc_insertion_point(field:Parsimony.Mutation.par_nuc)
    pub par_nuc: i32,
    // @@protoc_insertion_point(field:Parsimony.Mutation.mut_nuc)
    pub mut_nuc: ::std::vec::Vec<i32>,
    // @@protoc_insertion_point(field:Parsimony.Mutation.chromosome)
    pub chromosome: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:Parsimony.Mutation.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Mutation {
    fn default() -> &'a Mutation {
        <Mutation as ::protobuf::Message>::default_instance()
    }
}

impl Mutation {
    pub fn new() -> Mutation {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(5);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "position",
            |m: &Mutation| { &m.position },
            |m: &mut Mutation| { &mut m.position },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "ref_nuc",
            |m: &Mutation| { &m.ref_nuc },
            |m: &mut Mutation| { &mut m.ref_nuc },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "par_nuc",
            |m: &Mutation| { &m.par_nuc },
            |m: &mut Mutation| { &mut m.par_nuc },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "mut_nuc",
            |m: &Mutation| { &m.mut_nuc },
            |m: &mut Mutation| { &mut m.mut_nuc },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "chromosome",
            |m: &Mutation| { &m.chromosome },
            |m: &mut Mutation| { &mut m.chromosome },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Mutation>(
            "Mutation",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Mutation {
    const NAME: &'static str = "Mutation";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.position = is.read_int32()?;
                },
                16 => {
                    self.ref_nuc = is.read_int32()?;
                },
                24 => {
                    self.par_nuc = is.read_int32()?;
                },
                34 => {
                    is.read_repeated_packed_int32_into(&mut self.mut_nuc)?;
                },
                32 => {
                    self.mut_nuc.push(is.read_int32()?);
                },
                42 => {
                    self.chromosome = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.position != 0 {
            my_size += ::protobuf::rt::int32_size(1, self.position);
        }
        if self.ref_nuc != 0 {
            my_size += ::protobuf::rt::int32_size(2, self.ref_nuc);
        }
        if self.par_nuc != 0 {
            my_size += ::protobuf::rt::int32_size(3, self.par_nuc);
        }
        my_size += ::protobuf::rt::vec_packed_int32_size(4, &self.mut_nuc);
        if !self.chromosome.is_empty() {
            my_size += ::protobuf::rt::string_size(5, &self.chromosome);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.position != 0 {
            os.write_int32(1, self.position)?;
        }
        if self.ref_nuc != 0 {
            os.write_int32(2, self.ref_nuc)?;
        }
        if self.par_nuc != 0 {
            os.write_int32(3, self.par_nuc)?;
        }
        os.write_repeated_packed_int32(4, &self.mut_nuc)?;
        if !self.chromosome.is_empty() {
            os.write_string(5, &self.chromosome)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Mutation {
        Mutation::new()
    }

    fn clear(&mut self) {
        self.position = 0;
        self.ref_nuc = 0;
        self.par_nuc = 0;
        self.mut_nuc.clear();
        self.chromosome.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Mutation {
        static instance: Mutation = Mutation {
            position: 0,
            ref_nuc: 0,
            par_nuc: 0,
            mut_nuc: ::std::vec::Vec::new(),
            chromosome: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Mutation {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Mutation").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Mutation {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:Parsimony.MutationList)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct MutationList {
    // message fields
    // @@protoc_insertion_point(field:Parsimony.MutationList.mutation)
    pub mutation: ::std::vec::Vec<Mutation>,
    // special fields
    // @@protoc_insertion_point(special_field:Parsimony.MutationList.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a MutationList {
    fn default() -> &'a MutationList {
        <MutationList as ::protobuf::Message>::default_instance()
    }
}

impl MutationList {
    pub fn new() -> MutationList {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "mutation",
            |m: &MutationList| { &m.mutation },
            |m: &mut MutationList| { &mut m.mutation },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<MutationList>(
            "MutationList",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for MutationList {
    const NAME: &'static str = "MutationList";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.mutation.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.mutation {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.mutation {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> MutationList {
        MutationList::new()
    }

    fn clear(&mut self) {
        self.mutation.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static MutationList {
        static instance: MutationList = MutationList {
            mutation: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for MutationList {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("MutationList").unwrap()).clone()
    }
}

impl ::std::fmt::Display for MutationList {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MutationList {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:Parsimony.CondensedNode)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct CondensedNode {
    // message fields
    // @@protoc_insertion_point(field:Parsimony.CondensedNode.node_name)
    pub node_name: ::std::string::String,
    // @@protoc_insertion_point(field:Parsimony.CondensedNode.condensed_leaves)
    pub condensed_leaves: ::std::vec::Vec<::std::string::String>,
    // special fields
    // @@protoc_insertion_point(special_field:Parsimony.CondensedNode.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a CondensedNode {
    fn default() -> &'a CondensedNode {
        <CondensedNode as ::protobuf::Message>::default_instance()
    }
}

impl CondensedNode {
    pub fn new() -> CondensedNode {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "node_name",
            |m: &CondensedNode| { &m.node_name },
            |m: &mut CondensedNode| { &mut m.node_name },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "condensed_leaves",
            |m: &CondensedNode| { &m.condensed_leaves },
            |m: &mut CondensedNode| { &mut m.condensed_leaves },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<CondensedNode>(
            "CondensedNode",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for CondensedNode {
    const NAME: &'static str = "CondensedNode";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.node_name = is.read_string()?;
                },
                18 => {
                    self.condensed_leaves.push(is.read_string()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.node_name.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.node_name);
        }
        for value in &self.condensed_leaves {
            my_size += ::protobuf::rt::string_size(2, &value);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.node_name.is_empty() {
            os.write_string(1, &self.node_name)?;
        }
        for v in &self.condensed_leaves {
            os.write_string(2, &v)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> CondensedNode {
        CondensedNode::new()
    }

    fn clear(&mut self) {
        self.node_name.clear();
        self.condensed_leaves.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static CondensedNode {
        static instance: CondensedNode = CondensedNode {
            node_name: ::std::string::String::new(),
            condensed_leaves: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for CondensedNode {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("CondensedNode").unwrap()).clone()
    }
}

impl ::std::fmt::Display for CondensedNode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for CondensedNode {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:Parsimony.NodeMetadata)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct NodeMetadata {
    // message fields
    // @@protoc_insertion_point(field:Parsimony.NodeMetadata.clade_annotations)
    pub clade_annotations: ::std::vec::Vec<::std::string::String>,
    // special fields
    // @@protoc_insertion_point(special_field:Parsimony.NodeMetadata.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a NodeMetadata {
    fn default() -> &'a NodeMetadata {
        <NodeMetadata as ::protobuf::Message>::default_instance()
    }
}

impl NodeMetadata {
    pub fn new() -> NodeMetadata {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "clade_annotations",
            |m: &NodeMetadata| { &m.clade_annotations },
            |m: &mut NodeMetadata| { &mut m.clade_annotations },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<NodeMetadata>(
            "NodeMetadata",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for NodeMetadata {
    const NAME: &'static str = "NodeMetadata";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.clade_annotations.push(is.read_string()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.clade_annotations {
            my_size += ::protobuf::rt::string_size(1, &value);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.clade_annotations {
            os.write_string(1, &v)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> NodeMetadata {
        NodeMetadata::new()
    }

    fn clear(&mut self) {
        self.clade_annotations.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static NodeMetadata {
        static instance: NodeMetadata = NodeMetadata {
            clade_annotations: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for NodeMetadata {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("NodeMetadata").unwrap()).clone()
    }
}

impl ::std::fmt::Display for NodeMetadata {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for NodeMetadata {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:Parsimony.Data)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Data {
    // message fields
    // @@protoc_insertion_point(field:Parsimony.Data.newick)
    pub newick: ::std::string::String,
    // @@protoc_insertion_point(field:Parsimony.Data.node_mutations)
    pub node_mutations: ::std::vec::Vec<MutationList>,
    // @@protoc_insertion_point(field:Parsimony.Data.condensed_nodes)
    pub condensed_nodes: ::std::vec::Vec<CondensedNode>,
    // @@protoc_insertion_point(field:Parsimony.Data.metadata)
    pub metadata: ::std::vec::Vec<NodeMetadata>,
    // special fields
    // @@protoc_insertion_point(special_field:Parsimony.Data.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Data {
    fn default() -> &'a Data {
        <Data as ::protobuf::Message>::default_instance()
    }
}

impl Data {
    pub fn new() -> Data {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(4);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "newick",
            |m: &Data| { &m.newick },
            |m: &mut Data| { &mut m.newick },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "node_mutations",
            |m: &Data| { &m.node_mutations },
            |m: &mut Data| { &mut m.node_mutations },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "condensed_nodes",
            |m: &Data| { &m.condensed_nodes },
            |m: &mut Data| { &mut m.condensed_nodes },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "metadata",
            |m: &Data| { &m.metadata },
            |m: &mut Data| { &mut m.metadata },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Data>(
            "Data",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Data {
    const NAME: &'static str = "Data";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.newick = is.read_string()?;
                },
                18 => {
                    self.node_mutations.push(is.read_message()?);
                },
                26 => {
                    self.condensed_nodes.push(is.read_message()?);
                },
                34 => {
                    self.metadata.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.newick.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.newick);
        }
        for value in &self.node_mutations {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.condensed_nodes {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.metadata {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.newick.is_empty() {
            os.write_string(1, &self.newick)?;
        }
        for v in &self.node_mutations {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        for v in &self.condensed_nodes {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        };
        for v in &self.metadata {
            ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Data {
        Data::new()
    }

    fn clear(&mut self) {
        self.newick.clear();
        self.node_mutations.clear();
        self.condensed_nodes.clear();
        self.metadata.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Data {
        static instance: Data = Data {
            newick: ::std::string::String::new(),
            node_mutations: ::std::vec::Vec::new(),
            condensed_nodes: ::std::vec::Vec::new(),
            metadata: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Data {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Data").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Data {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Data {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x0fparsimony.proto\x12\tParsimony\"\x91\x01\n\x08Mutation\x12\x1a\n\
    \x08position\x18\x01\x20\x01(\x05R\x08position\x12\x17\n\x07ref_nuc\x18\
    \x02\x20\x01(\x05R\x06refNuc\x12\x17\n\x07par_nuc\x18\x03\x20\x01(\x05R\
    \x06parNuc\x12\x17\n\x07mut_nuc\x18\x04\x20\x03(\x05R\x06mutNuc\x12\x1e\
    \n\nchromosome\x18\x05\x20\x01(\tR\nchromosome\"?\n\x0cMutationList\x12/\
    \n\x08mutation\x18\x01\x20\x03(\x0b2\x13.Parsimony.MutationR\x08mutation\
    \"W\n\rCondensedNode\x12\x1b\n\tnode_name\x18\x01\x20\x01(\tR\x08nodeNam\
    e\x12)\n\x10condensed_leaves\x18\x02\x20\x03(\tR\x0fcondensedLeaves\";\n\
    \x0cNodeMetadata\x12+\n\x11clade_annotations\x18\x01\x20\x03(\tR\x10clad\
    eAnnotations\"\xd6\x01\n\x04Data\x12\x16\n\x06newick\x18\x01\x20\x01(\tR\
    \x06newick\x12>\n\x0enode_mutations\x18\x02\x20\x03(\x0b2\x17.Parsimony.\
    MutationListR\rnodeMutations\x12A\n\x0fcondensed_nodes\x18\x03\x20\x03(\
    \x0b2\x18.Parsimony.CondensedNodeR\x0econdensedNodes\x123\n\x08metadata\
    \x18\x04\x20\x03(\x0b2\x17.Parsimony.NodeMetadataR\x08metadatab\x06proto\
    3\
";

/// `FileDescriptorProto` object which was a source for this generated file
fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    static file_descriptor_proto_lazy: ::protobuf::rt::Lazy<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::Lazy::new();
    file_descriptor_proto_lazy.get(|| {
        ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
    })
}

/// `FileDescriptor` object which allows dynamic access to files
pub fn file_descriptor() -> &'static ::protobuf::reflect::FileDescriptor {
    static generated_file_descriptor_lazy: ::protobuf::rt::Lazy<::protobuf::reflect::GeneratedFileDescriptor> = ::protobuf::rt::Lazy::new();
    static file_descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::FileDescriptor> = ::protobuf::rt::Lazy::new();
    file_descriptor.get(|| {
        let generated_file_descriptor = generated_file_descriptor_lazy.get(|| {
            let mut deps = ::std::vec::Vec::with_capacity(0);
            let mut messages = ::std::vec::Vec::with_capacity(5);
            messages.push(Mutation::generated_message_descriptor_data());
            messages.push(MutationList::generated_message_descriptor_data());
            messages.push(CondensedNode::generated_message_descriptor_data());
            messages.push(NodeMetadata::generated_message_descriptor_data());
            messages.push(Data::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(0);
            ::protobuf::reflect::GeneratedFileDescriptor::new_generated(
                file_descriptor_proto(),
                deps,
                messages,
                enums,
            )
        });
        ::protobuf::reflect::FileDescriptor::new_generated_2(generated_file_descriptor)
    })
}
