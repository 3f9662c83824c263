//! Reference encoder for the metadata format.
//!
//! Produces buffers [`decode_unit`](super::decode_unit) accepts. Used by
//! round-trip tests and fixture builders; the compiler itself is the
//! producer in production.

use rustc_hash::FxHashMap;

use crate::model::DataType;

use super::decode::{
    CLASS_TYPE_CODE, FORMAT_VERSION, MAGIC, access_bits, kind_code, index_bits, param_mode_code,
    property_bits, type_flag_bits,
};
use super::type_info::{
    AccessMode, EventElement, MethodElement, ParamMode, Parameter, PropertyElement, TypeFlags,
    TypeInfo, VariableElement,
};
use super::ByteOrder;

struct Writer {
    buf: Vec<u8>,
    order: ByteOrder,
}

impl Writer {
    fn new(order: ByteOrder) -> Self {
        Self {
            buf: Vec::new(),
            order,
        }
    }

    fn put_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn put_u16(&mut self, v: u16) {
        match self.order {
            ByteOrder::Little => self.buf.extend(v.to_le_bytes()),
            ByteOrder::Big => self.buf.extend(v.to_be_bytes()),
        }
    }

    fn put_u32(&mut self, v: u32) {
        match self.order {
            ByteOrder::Little => self.buf.extend(v.to_le_bytes()),
            ByteOrder::Big => self.buf.extend(v.to_be_bytes()),
        }
    }

    fn put_i32(&mut self, v: i32) {
        self.put_u32(v as u32);
    }
}

/// Interns strings into the text segment, one NUL-terminated copy each.
#[derive(Default)]
struct TextSegment {
    bytes: Vec<u8>,
    offsets: FxHashMap<String, u32>,
}

impl TextSegment {
    fn intern(&mut self, text: &str) -> u32 {
        if let Some(&off) = self.offsets.get(text) {
            return off;
        }
        let off = self.bytes.len() as u32;
        self.bytes.extend(text.as_bytes());
        self.bytes.push(0);
        self.offsets.insert(text.to_string(), off);
        off
    }
}

fn access_byte(access: AccessMode, is_static: bool, is_constructor: bool) -> u8 {
    let mode = match access {
        AccessMode::Public => access_bits::PUBLIC,
        AccessMode::Protected => access_bits::PROTECTED,
        AccessMode::Private => access_bits::PRIVATE,
    };
    mode | if is_static { access_bits::STATIC } else { 0 }
        | if is_constructor {
            access_bits::CONSTRUCTOR
        } else {
            0
        }
}

fn type_flag_bits_of(flags: TypeFlags) -> u16 {
    use type_flag_bits::*;
    let mut bits = 0;
    if flags.is_final {
        bits |= FINAL;
    }
    if flags.is_interface {
        bits |= INTERFACE;
    }
    if flags.is_abstract {
        bits |= ABSTRACT;
    }
    if flags.is_serializable {
        bits |= SERIALIZABLE;
    }
    if flags.use_widget_pool {
        bits |= USE_WIDGET_POOL;
    }
    if flags.has_statics {
        bits |= HAS_STATICS;
    }
    bits
}

fn put_data_type(w: &mut Writer, text: &mut TextSegment, data_type: &DataType) {
    if let DataType::Class(name) = data_type {
        w.put_u8(CLASS_TYPE_CODE);
        let off = text.intern(name);
        w.put_u32(off);
    } else {
        w.put_u8(data_type.code());
    }
}

fn put_parameters(w: &mut Writer, text: &mut TextSegment, parameters: &[Parameter]) {
    w.put_u16(parameters.len() as u16);
    for param in parameters {
        w.put_u8(match param.mode {
            ParamMode::Input => param_mode_code::INPUT,
            ParamMode::Output => param_mode_code::OUTPUT,
            ParamMode::InputOutput => param_mode_code::INPUT_OUTPUT,
            ParamMode::Buffer => param_mode_code::BUFFER,
        });
        put_data_type(w, text, &param.data_type);
        w.put_i32(param.extent);
        let off = text.intern(&param.name);
        w.put_u32(off);
    }
}

/// Write a size-prefixed record: payload rendered first, declared size set to
/// exactly the payload length.
fn put_sized(w: &mut Writer, payload: impl FnOnce(&mut Writer)) {
    let mut inner = Writer::new(w.order);
    payload(&mut inner);
    w.put_u32(inner.buf.len() as u32);
    w.buf.extend(inner.buf);
}

fn put_method_payload(w: &mut Writer, text: &mut TextSegment, method: &MethodElement) {
    w.put_u16(0);
    put_data_type(w, text, &method.return_type);
    w.put_i32(method.extent);
    put_parameters(w, text, &method.parameters);
}

fn put_variable_payload(w: &mut Writer, text: &mut TextSegment, variable: &VariableElement) {
    w.put_u16(0);
    put_data_type(w, text, &variable.data_type);
    w.put_i32(variable.extent);
}

fn put_property_payload(w: &mut Writer, text: &mut TextSegment, property: &PropertyElement) {
    let mut bits = 0u16;
    if property.variable.is_some() {
        bits |= property_bits::HAS_VARIABLE;
    }
    if property.getter.is_some() {
        bits |= property_bits::HAS_GETTER;
    }
    if property.setter.is_some() {
        bits |= property_bits::HAS_SETTER;
    }
    w.put_u16(bits);
    put_data_type(w, text, &property.data_type);
    w.put_i32(property.extent);
    if let Some(variable) = &property.variable {
        put_sized(w, |inner| put_variable_payload(inner, text, variable));
    }
    if let Some(getter) = &property.getter {
        put_sized(w, |inner| put_method_payload(inner, text, getter));
    }
    if let Some(setter) = &property.setter {
        put_sized(w, |inner| put_method_payload(inner, text, setter));
    }
}

fn put_event_payload(w: &mut Writer, text: &mut TextSegment, event: &EventElement) {
    w.put_u16(0);
    put_data_type(w, text, &event.return_type);
    put_parameters(w, text, &event.parameters);
}

/// Encode a [`TypeInfo`] into a metadata buffer in the given byte order.
///
/// Members are laid out collection by collection in declaration order:
/// methods, properties, variables, events, tables, buffers, datasets,
/// queries.
pub fn encode_unit(info: &TypeInfo, order: ByteOrder) -> Vec<u8> {
    let mut text = TextSegment::default();
    let type_name_off = text.intern(&info.type_name);
    let parent_name_off = text.intern(&info.parent_type_name);
    let assembly_name_off = text.intern(&info.assembly_name);
    let interface_offs: Vec<u32> = info.interfaces.iter().map(|i| text.intern(i)).collect();

    // (kind, access byte, name) index entries paired with rendered payloads.
    let mut index: Vec<(u8, u8, u32)> = Vec::new();
    let mut data = Writer::new(order);
    let mut bucket_counts = [0u16; 4];

    let mut record =
        |kind: u8,
         access: AccessMode,
         is_static: bool,
         is_constructor: bool,
         name: &str,
         text: &mut TextSegment,
         data: &mut Writer,
         payload: &mut dyn FnMut(&mut Writer, &mut TextSegment)| {
            let name_off = text.intern(name);
            index.push((kind, access_byte(access, is_static, is_constructor), name_off));
            let bucket = if is_constructor {
                3
            } else {
                match access {
                    AccessMode::Public => 0,
                    AccessMode::Protected => 1,
                    AccessMode::Private => 2,
                }
            };
            bucket_counts[bucket] += 1;
            let mut inner = Writer::new(order);
            payload(&mut inner, text);
            data.put_u32(inner.buf.len() as u32);
            data.buf.extend(inner.buf);
        };

    for method in &info.methods {
        record(
            kind_code::METHOD,
            method.access,
            method.is_static,
            method.is_constructor,
            &method.name,
            &mut text,
            &mut data,
            &mut |w, t| put_method_payload(w, t, method),
        );
    }
    for property in info.properties.values() {
        record(
            kind_code::PROPERTY,
            property.access,
            property.is_static,
            false,
            &property.name,
            &mut text,
            &mut data,
            &mut |w, t| put_property_payload(w, t, property),
        );
    }
    for variable in info.variables.values() {
        record(
            kind_code::VARIABLE,
            variable.access,
            variable.is_static,
            false,
            &variable.name,
            &mut text,
            &mut data,
            &mut |w, t| put_variable_payload(w, t, variable),
        );
    }
    for event in info.events.values() {
        record(
            kind_code::EVENT,
            event.access,
            event.is_static,
            false,
            &event.name,
            &mut text,
            &mut data,
            &mut |w, t| put_event_payload(w, t, event),
        );
    }
    for table in info.tables.values() {
        record(
            kind_code::TABLE,
            table.access,
            table.is_static,
            false,
            &table.name,
            &mut text,
            &mut data,
            &mut |w, t| {
                w.put_u16(0);
                w.put_u16(table.fields.len() as u16);
                w.put_u16(table.indexes.len() as u16);
                for field in &table.fields {
                    let off = t.intern(&field.name);
                    w.put_u32(off);
                    put_data_type(w, t, &field.data_type);
                    w.put_i32(field.extent);
                }
                for idx in &table.indexes {
                    let off = t.intern(&idx.name);
                    w.put_u32(off);
                    let mut bits = 0u8;
                    if idx.primary {
                        bits |= index_bits::PRIMARY;
                    }
                    if idx.unique {
                        bits |= index_bits::UNIQUE;
                    }
                    if idx.word {
                        bits |= index_bits::WORD;
                    }
                    w.put_u8(bits);
                    w.put_u16(idx.components.len() as u16);
                    for comp in &idx.components {
                        w.put_u16(comp.field_ordinal);
                        w.put_u8(if comp.descending {
                            index_bits::DESCENDING
                        } else {
                            0
                        });
                    }
                }
            },
        );
    }
    for buffer in info.buffers.values() {
        record(
            kind_code::BUFFER,
            buffer.access,
            buffer.is_static,
            false,
            &buffer.name,
            &mut text,
            &mut data,
            &mut |w, t| {
                w.put_u16(0);
                let table_off = t.intern(&buffer.table_name);
                w.put_u32(table_off);
                let db_off = t.intern(&buffer.database_name);
                w.put_u32(db_off);
            },
        );
    }
    for dataset in info.datasets.values() {
        record(
            kind_code::DATASET,
            dataset.access,
            dataset.is_static,
            false,
            &dataset.name,
            &mut text,
            &mut data,
            &mut |w, t| {
                w.put_u16(0);
                w.put_u16(dataset.buffer_names.len() as u16);
                for name in &dataset.buffer_names {
                    let off = t.intern(name);
                    w.put_u32(off);
                }
                w.put_u16(dataset.relations.len() as u16);
                for relation in &dataset.relations {
                    let off = t.intern(&relation.name);
                    w.put_u32(off);
                    w.put_u16(relation.parent_buffer);
                    w.put_u16(relation.child_buffer);
                    let pairs_off = t.intern(&relation.pairs);
                    w.put_u32(pairs_off);
                }
            },
        );
    }
    for query in info.queries.values() {
        record(
            kind_code::QUERY,
            query.access,
            query.is_static,
            false,
            &query.name,
            &mut text,
            &mut data,
            &mut |w, t| {
                w.put_u16(0);
                w.put_u16(query.buffer_names.len() as u16);
                for name in &query.buffer_names {
                    let off = t.intern(name);
                    w.put_u32(off);
                }
            },
        );
    }
    let header_end = super::decode::HEADER_SIZE + interface_offs.len() * 4;
    let index_offset = header_end as u32;
    let data_offset = index_offset + (index.len() * 6) as u32;
    let text_offset = data_offset + data.buf.len() as u32;

    let mut out = Writer::new(order);
    out.put_u32(MAGIC);
    out.put_u16(FORMAT_VERSION);
    out.put_u16(type_flag_bits_of(info.flags));
    for count in bucket_counts {
        out.put_u16(count);
    }
    out.put_u32(type_name_off);
    out.put_u32(parent_name_off);
    out.put_u32(assembly_name_off);
    out.put_u16(interface_offs.len() as u16);
    out.put_u32(index_offset);
    out.put_u32(data_offset);
    out.put_u32(text_offset);
    out.put_u32(text.bytes.len() as u32);
    for off in interface_offs {
        out.put_u32(off);
    }
    for (kind, access, name_off) in index {
        out.put_u8(kind);
        out.put_u8(access);
        out.put_u32(name_off);
    }
    out.buf.extend(data.buf);
    out.buf.extend(text.bytes);
    out.buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rcode::decode_unit;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_type_round_trips_both_byte_orders() {
        let info = TypeInfo::named("acme.Empty", "Progress.Lang.Object");
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let bytes = encode_unit(&info, order);
            let back = decode_unit(&bytes, order).unwrap();
            assert_eq!(back, info);
        }
    }

    #[test]
    fn text_segment_dedupes_repeated_strings() {
        let mut text = TextSegment::default();
        let a = text.intern("Customer");
        let b = text.intern("Customer");
        assert_eq!(a, b);
        assert_eq!(text.bytes.len(), "Customer".len() + 1);
    }
}
