//! Decoder for compiled-unit reflection metadata.
//!
//! The layout is self-describing: a fixed header with access-bucket counts
//! and region offsets, an ordered member index, then one size-prefixed
//! descriptor record per member, and finally a text segment of
//! null-terminated strings addressed by segment-relative offset. All
//! multibyte fields honor the byte order passed per call.
//!
//! Every record's declared size must equal the bytes actually consumed
//! decoding it. The shared cursor has no resynchronization point, so a
//! single miscount fails the whole unit.

use indexmap::IndexMap;
use log::trace;
use smallvec::SmallVec;

use crate::model::DataType;

use super::error::DecodeError;
use super::type_info::{
    AccessMode, BufferElement, DatasetElement, DatasetRelation, EventElement, IndexComponent,
    MethodElement, Parameter, ParamMode, PropertyElement, QueryElement, TableElement, TableField,
    TableIndex, TypeFlags, TypeInfo, VariableElement,
};
use super::ByteOrder;

/// Leading magic number of a metadata segment.
pub const MAGIC: u32 = 0x5243_5449;
/// Format version this reader decodes.
pub const FORMAT_VERSION: u16 = 1;
/// Fixed byte size of the unit header.
pub const HEADER_SIZE: usize = 46;

pub(crate) mod kind_code {
    pub const METHOD: u8 = 1;
    pub const PROPERTY: u8 = 2;
    pub const VARIABLE: u8 = 3;
    pub const EVENT: u8 = 4;
    pub const TABLE: u8 = 5;
    pub const BUFFER: u8 = 6;
    pub const DATASET: u8 = 7;
    pub const QUERY: u8 = 8;
}

pub(crate) mod access_bits {
    pub const PUBLIC: u8 = 0x01;
    pub const PROTECTED: u8 = 0x02;
    pub const PRIVATE: u8 = 0x04;
    pub const STATIC: u8 = 0x08;
    pub const CONSTRUCTOR: u8 = 0x10;
}

pub(crate) mod type_flag_bits {
    pub const FINAL: u16 = 0x01;
    pub const INTERFACE: u16 = 0x02;
    pub const ABSTRACT: u16 = 0x04;
    pub const SERIALIZABLE: u16 = 0x08;
    pub const USE_WIDGET_POOL: u16 = 0x10;
    pub const HAS_STATICS: u16 = 0x20;
}

pub(crate) mod property_bits {
    pub const HAS_VARIABLE: u16 = 0x01;
    pub const HAS_GETTER: u16 = 0x02;
    pub const HAS_SETTER: u16 = 0x04;
}

pub(crate) mod index_bits {
    pub const PRIMARY: u8 = 0x01;
    pub const UNIQUE: u8 = 0x02;
    pub const WORD: u8 = 0x04;
    pub const DESCENDING: u8 = 0x01;
}

pub(crate) mod param_mode_code {
    pub const INPUT: u8 = 1;
    pub const OUTPUT: u8 = 2;
    pub const INPUT_OUTPUT: u8 = 3;
    pub const BUFFER: u8 = 4;
}

/// The class data-type code; the record carries the class name separately.
pub(crate) const CLASS_TYPE_CODE: u8 = 21;

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    order: ByteOrder,
    text_base: usize,
    text_size: u32,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8], order: ByteOrder) -> Self {
        Self {
            buf,
            pos: 0,
            order,
            text_base: 0,
            text_size: 0,
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or(DecodeError::UnexpectedEnd { offset: self.pos })?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let b: [u8; 2] = self.take(2)?.try_into().expect("exact slice");
        Ok(match self.order {
            ByteOrder::Little => u16::from_le_bytes(b),
            ByteOrder::Big => u16::from_be_bytes(b),
        })
    }

    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let b: [u8; 4] = self.take(4)?.try_into().expect("exact slice");
        Ok(match self.order {
            ByteOrder::Little => u32::from_le_bytes(b),
            ByteOrder::Big => u32::from_be_bytes(b),
        })
    }

    fn read_i32(&mut self) -> Result<i32, DecodeError> {
        self.read_u32().map(|v| v as i32)
    }

    fn seek(&mut self, pos: usize) -> Result<(), DecodeError> {
        if pos > self.buf.len() {
            return Err(DecodeError::UnexpectedEnd { offset: pos });
        }
        self.pos = pos;
        Ok(())
    }

    /// Resolve a segment-relative offset to a null-terminated string.
    fn string_at(&self, offset: u32) -> Result<String, DecodeError> {
        if offset >= self.text_size {
            return Err(DecodeError::BadStringOffset {
                offset,
                size: self.text_size,
            });
        }
        let start = self.text_base + offset as usize;
        let end = self.text_base + self.text_size as usize;
        let segment = &self.buf[start..end];
        let nul = segment
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::UnterminatedString { offset })?;
        std::str::from_utf8(&segment[..nul])
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8 { offset })
    }
}

fn decode_access(flags: u8, name: &str) -> Result<(AccessMode, bool, bool), DecodeError> {
    use access_bits::*;
    let mode = match flags & (PUBLIC | PROTECTED | PRIVATE) {
        PUBLIC => AccessMode::Public,
        PROTECTED => AccessMode::Protected,
        PRIVATE => AccessMode::Private,
        _ => {
            return Err(DecodeError::UnknownAccess {
                flags,
                name: name.to_string(),
            });
        }
    };
    Ok((mode, flags & STATIC != 0, flags & CONSTRUCTOR != 0))
}

fn decode_type_flags(bits: u16) -> TypeFlags {
    use type_flag_bits::*;
    TypeFlags {
        is_final: bits & FINAL != 0,
        is_interface: bits & INTERFACE != 0,
        is_abstract: bits & ABSTRACT != 0,
        is_serializable: bits & SERIALIZABLE != 0,
        use_widget_pool: bits & USE_WIDGET_POOL != 0,
        has_statics: bits & HAS_STATICS != 0,
    }
}

fn read_data_type(cursor: &mut Cursor<'_>, name: &str) -> Result<DataType, DecodeError> {
    let code = cursor.read_u8()?;
    if code == CLASS_TYPE_CODE {
        let offset = cursor.read_u32()?;
        return Ok(DataType::Class(cursor.string_at(offset)?));
    }
    DataType::from_code(code).ok_or_else(|| DecodeError::UnknownDataType {
        code,
        name: name.to_string(),
    })
}

fn read_parameters(
    cursor: &mut Cursor<'_>,
    owner: &str,
) -> Result<SmallVec<[Parameter; 4]>, DecodeError> {
    let count = cursor.read_u16()?;
    let mut parameters = SmallVec::with_capacity(count as usize);
    for _ in 0..count {
        let mode = match cursor.read_u8()? {
            param_mode_code::INPUT => ParamMode::Input,
            param_mode_code::OUTPUT => ParamMode::Output,
            param_mode_code::INPUT_OUTPUT => ParamMode::InputOutput,
            param_mode_code::BUFFER => ParamMode::Buffer,
            code => {
                return Err(DecodeError::BadLayout {
                    detail: format!("unknown parameter mode {code} in '{owner}'"),
                });
            }
        };
        let data_type = read_data_type(cursor, owner)?;
        let extent = cursor.read_i32()?;
        let name_off = cursor.read_u32()?;
        parameters.push(Parameter {
            name: cursor.string_at(name_off)?,
            mode,
            data_type,
            extent,
        });
    }
    Ok(parameters)
}

/// Run `decode` against a size-prefixed record, enforcing that the payload
/// consumed exactly its declared size.
fn decode_sized<T>(
    cursor: &mut Cursor<'_>,
    name: &str,
    decode: impl FnOnce(&mut Cursor<'_>) -> Result<T, DecodeError>,
) -> Result<T, DecodeError> {
    let declared = cursor.read_u32()?;
    let start = cursor.pos;
    let value = decode(cursor)?;
    let consumed = (cursor.pos - start) as u32;
    if consumed != declared {
        return Err(DecodeError::SizeMismatch {
            name: name.to_string(),
            declared,
            consumed,
        });
    }
    Ok(value)
}

fn decode_method_payload(
    cursor: &mut Cursor<'_>,
    name: &str,
    access: AccessMode,
    is_static: bool,
    is_constructor: bool,
) -> Result<MethodElement, DecodeError> {
    let _flags = cursor.read_u16()?;
    let return_type = read_data_type(cursor, name)?;
    let extent = cursor.read_i32()?;
    let parameters = read_parameters(cursor, name)?;
    Ok(MethodElement {
        name: name.to_string(),
        access,
        is_static,
        is_constructor,
        return_type,
        extent,
        parameters,
    })
}

fn decode_variable_payload(
    cursor: &mut Cursor<'_>,
    name: &str,
    access: AccessMode,
    is_static: bool,
) -> Result<VariableElement, DecodeError> {
    let _flags = cursor.read_u16()?;
    let data_type = read_data_type(cursor, name)?;
    let extent = cursor.read_i32()?;
    Ok(VariableElement {
        name: name.to_string(),
        access,
        is_static,
        data_type,
        extent,
    })
}

fn decode_property_payload(
    cursor: &mut Cursor<'_>,
    name: &str,
    access: AccessMode,
    is_static: bool,
) -> Result<PropertyElement, DecodeError> {
    let bits = cursor.read_u16()?;
    let data_type = read_data_type(cursor, name)?;
    let extent = cursor.read_i32()?;

    let variable = if bits & property_bits::HAS_VARIABLE != 0 {
        Some(decode_sized(cursor, name, |c| {
            decode_variable_payload(c, name, AccessMode::Private, is_static)
        })?)
    } else {
        None
    };
    let getter = if bits & property_bits::HAS_GETTER != 0 {
        Some(decode_sized(cursor, name, |c| {
            decode_method_payload(c, name, access, is_static, false)
        })?)
    } else {
        None
    };
    let setter = if bits & property_bits::HAS_SETTER != 0 {
        Some(decode_sized(cursor, name, |c| {
            decode_method_payload(c, name, access, is_static, false)
        })?)
    } else {
        None
    };

    Ok(PropertyElement {
        name: name.to_string(),
        access,
        is_static,
        data_type,
        extent,
        variable,
        getter,
        setter,
    })
}

fn decode_event_payload(
    cursor: &mut Cursor<'_>,
    name: &str,
    access: AccessMode,
    is_static: bool,
) -> Result<EventElement, DecodeError> {
    let _flags = cursor.read_u16()?;
    let return_type = read_data_type(cursor, name)?;
    let parameters = read_parameters(cursor, name)?;
    Ok(EventElement {
        name: name.to_string(),
        access,
        is_static,
        return_type,
        parameters,
    })
}

fn decode_table_payload(
    cursor: &mut Cursor<'_>,
    name: &str,
    access: AccessMode,
    is_static: bool,
) -> Result<TableElement, DecodeError> {
    let _flags = cursor.read_u16()?;
    let field_count = cursor.read_u16()?;
    let index_count = cursor.read_u16()?;

    let mut fields = Vec::with_capacity(field_count as usize);
    for _ in 0..field_count {
        let name_off = cursor.read_u32()?;
        let field_name = cursor.string_at(name_off)?;
        let data_type = read_data_type(cursor, &field_name)?;
        let extent = cursor.read_i32()?;
        fields.push(TableField {
            name: field_name,
            data_type,
            extent,
        });
    }

    let mut indexes = Vec::with_capacity(index_count as usize);
    for _ in 0..index_count {
        let name_off = cursor.read_u32()?;
        let index_name = cursor.string_at(name_off)?;
        let bits = cursor.read_u8()?;
        let comp_count = cursor.read_u16()?;
        let mut components = SmallVec::with_capacity(comp_count as usize);
        for _ in 0..comp_count {
            let field_ordinal = cursor.read_u16()?;
            if field_ordinal >= field_count {
                return Err(DecodeError::BadOrdinal {
                    ordinal: field_ordinal,
                    limit: field_count,
                    name: index_name,
                });
            }
            let comp_bits = cursor.read_u8()?;
            components.push(IndexComponent {
                field_ordinal,
                descending: comp_bits & index_bits::DESCENDING != 0,
            });
        }
        indexes.push(TableIndex {
            name: index_name,
            primary: bits & index_bits::PRIMARY != 0,
            unique: bits & index_bits::UNIQUE != 0,
            word: bits & index_bits::WORD != 0,
            components,
        });
    }

    Ok(TableElement {
        name: name.to_string(),
        access,
        is_static,
        fields,
        indexes,
    })
}

fn decode_buffer_payload(
    cursor: &mut Cursor<'_>,
    name: &str,
    access: AccessMode,
    is_static: bool,
) -> Result<BufferElement, DecodeError> {
    let _flags = cursor.read_u16()?;
    let table_off = cursor.read_u32()?;
    let database_off = cursor.read_u32()?;
    Ok(BufferElement {
        name: name.to_string(),
        access,
        is_static,
        table_name: cursor.string_at(table_off)?,
        database_name: cursor.string_at(database_off)?,
    })
}

fn decode_dataset_payload(
    cursor: &mut Cursor<'_>,
    name: &str,
    access: AccessMode,
    is_static: bool,
) -> Result<DatasetElement, DecodeError> {
    let _flags = cursor.read_u16()?;
    let buffer_count = cursor.read_u16()?;
    let mut buffer_names = Vec::with_capacity(buffer_count as usize);
    for _ in 0..buffer_count {
        let off = cursor.read_u32()?;
        buffer_names.push(cursor.string_at(off)?);
    }
    let relation_count = cursor.read_u16()?;
    let mut relations = Vec::with_capacity(relation_count as usize);
    for _ in 0..relation_count {
        let name_off = cursor.read_u32()?;
        let relation_name = cursor.string_at(name_off)?;
        let parent_buffer = cursor.read_u16()?;
        let child_buffer = cursor.read_u16()?;
        for ordinal in [parent_buffer, child_buffer] {
            if ordinal >= buffer_count {
                return Err(DecodeError::BadOrdinal {
                    ordinal,
                    limit: buffer_count,
                    name: relation_name,
                });
            }
        }
        let pairs_off = cursor.read_u32()?;
        relations.push(DatasetRelation {
            name: relation_name,
            parent_buffer,
            child_buffer,
            pairs: cursor.string_at(pairs_off)?,
        });
    }
    Ok(DatasetElement {
        name: name.to_string(),
        access,
        is_static,
        buffer_names,
        relations,
    })
}

fn decode_query_payload(
    cursor: &mut Cursor<'_>,
    name: &str,
    access: AccessMode,
    is_static: bool,
) -> Result<QueryElement, DecodeError> {
    let _flags = cursor.read_u16()?;
    let buffer_count = cursor.read_u16()?;
    let mut buffer_names = Vec::with_capacity(buffer_count as usize);
    for _ in 0..buffer_count {
        let off = cursor.read_u32()?;
        buffer_names.push(cursor.string_at(off)?);
    }
    Ok(QueryElement {
        name: name.to_string(),
        access,
        is_static,
        buffer_names,
    })
}

struct IndexEntry {
    kind: u8,
    access: AccessMode,
    is_static: bool,
    is_constructor: bool,
    name: String,
}

fn insert_unique<T>(
    map: &mut IndexMap<String, T>,
    name: &str,
    value: T,
) -> Result<(), DecodeError> {
    if map.insert(name.to_ascii_uppercase(), value).is_some() {
        return Err(DecodeError::BadLayout {
            detail: format!("duplicate member '{name}'"),
        });
    }
    Ok(())
}

/// Decode one compiled unit's metadata buffer into a [`TypeInfo`].
///
/// `order` is the byte order the unit was compiled with. Any inconsistency
/// fails the whole call; there is no partial result.
pub fn decode_unit(buf: &[u8], order: ByteOrder) -> Result<TypeInfo, DecodeError> {
    let mut cursor = Cursor::new(buf, order);

    let magic = cursor.read_u32()?;
    if magic != MAGIC {
        return Err(DecodeError::BadMagic { found: magic });
    }
    let version = cursor.read_u16()?;
    if version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion { version });
    }
    let flags = decode_type_flags(cursor.read_u16()?);
    let bucket_counts = [
        cursor.read_u16()?, // public
        cursor.read_u16()?, // protected
        cursor.read_u16()?, // private
        cursor.read_u16()?, // constructor
    ];
    let type_name_off = cursor.read_u32()?;
    let parent_name_off = cursor.read_u32()?;
    let assembly_name_off = cursor.read_u32()?;
    let interface_count = cursor.read_u16()?;
    let index_offset = cursor.read_u32()? as usize;
    let data_offset = cursor.read_u32()? as usize;
    let text_offset = cursor.read_u32()? as usize;
    let text_size = cursor.read_u32()?;

    if text_offset + text_size as usize != buf.len() {
        return Err(DecodeError::BadLayout {
            detail: format!(
                "text segment {}+{} does not end the {}-byte buffer",
                text_offset,
                text_size,
                buf.len()
            ),
        });
    }
    cursor.text_base = text_offset;
    cursor.text_size = text_size;

    let mut interface_offsets = Vec::with_capacity(interface_count as usize);
    for _ in 0..interface_count {
        interface_offsets.push(cursor.read_u32()?);
    }

    let total_members: usize = bucket_counts.iter().map(|&c| c as usize).sum();
    if index_offset != cursor.pos {
        return Err(DecodeError::BadLayout {
            detail: format!(
                "member index at {} does not follow header at {}",
                index_offset, cursor.pos
            ),
        });
    }
    if index_offset + total_members * 6 != data_offset {
        return Err(DecodeError::BadLayout {
            detail: format!(
                "index of {total_members} members does not reach data region at {data_offset}"
            ),
        });
    }

    let type_name = cursor.string_at(type_name_off)?;
    let parent_type_name = cursor.string_at(parent_name_off)?;
    let assembly_name = cursor.string_at(assembly_name_off)?;
    let interfaces = interface_offsets
        .into_iter()
        .map(|off| cursor.string_at(off))
        .collect::<Result<Vec<_>, _>>()?;

    cursor.seek(index_offset)?;
    let mut index = Vec::with_capacity(total_members);
    let mut seen_buckets = [0u16; 4];
    for entry in 0..total_members {
        let kind = cursor.read_u8()?;
        if !(kind_code::METHOD..=kind_code::QUERY).contains(&kind) {
            return Err(DecodeError::UnknownMemberKind { code: kind, entry });
        }
        let access_byte = cursor.read_u8()?;
        let name_off = cursor.read_u32()?;
        let name = cursor.string_at(name_off)?;
        let (access, is_static, is_constructor) = decode_access(access_byte, &name)?;
        let bucket = if is_constructor {
            3
        } else {
            match access {
                AccessMode::Public => 0,
                AccessMode::Protected => 1,
                AccessMode::Private => 2,
            }
        };
        seen_buckets[bucket] += 1;
        index.push(IndexEntry {
            kind,
            access,
            is_static,
            is_constructor,
            name,
        });
    }
    if seen_buckets != bucket_counts {
        return Err(DecodeError::BadLayout {
            detail: format!(
                "access buckets {seen_buckets:?} disagree with header counts {bucket_counts:?}"
            ),
        });
    }

    cursor.seek(data_offset)?;
    let mut info = TypeInfo {
        type_name,
        parent_type_name,
        assembly_name,
        interfaces,
        flags,
        ..Default::default()
    };

    for entry in &index {
        match entry.kind {
            kind_code::METHOD => {
                let method = decode_sized(&mut cursor, &entry.name, |c| {
                    decode_method_payload(
                        c,
                        &entry.name,
                        entry.access,
                        entry.is_static,
                        entry.is_constructor,
                    )
                })?;
                info.methods.push(method);
            }
            kind_code::PROPERTY => {
                let property = decode_sized(&mut cursor, &entry.name, |c| {
                    decode_property_payload(c, &entry.name, entry.access, entry.is_static)
                })?;
                insert_unique(&mut info.properties, &entry.name, property)?;
            }
            kind_code::VARIABLE => {
                let variable = decode_sized(&mut cursor, &entry.name, |c| {
                    decode_variable_payload(c, &entry.name, entry.access, entry.is_static)
                })?;
                insert_unique(&mut info.variables, &entry.name, variable)?;
            }
            kind_code::EVENT => {
                let event = decode_sized(&mut cursor, &entry.name, |c| {
                    decode_event_payload(c, &entry.name, entry.access, entry.is_static)
                })?;
                insert_unique(&mut info.events, &entry.name, event)?;
            }
            kind_code::TABLE => {
                let table = decode_sized(&mut cursor, &entry.name, |c| {
                    decode_table_payload(c, &entry.name, entry.access, entry.is_static)
                })?;
                insert_unique(&mut info.tables, &entry.name, table)?;
            }
            kind_code::BUFFER => {
                let buffer = decode_sized(&mut cursor, &entry.name, |c| {
                    decode_buffer_payload(c, &entry.name, entry.access, entry.is_static)
                })?;
                insert_unique(&mut info.buffers, &entry.name, buffer)?;
            }
            kind_code::DATASET => {
                let dataset = decode_sized(&mut cursor, &entry.name, |c| {
                    decode_dataset_payload(c, &entry.name, entry.access, entry.is_static)
                })?;
                insert_unique(&mut info.datasets, &entry.name, dataset)?;
            }
            kind_code::QUERY => {
                let query = decode_sized(&mut cursor, &entry.name, |c| {
                    decode_query_payload(c, &entry.name, entry.access, entry.is_static)
                })?;
                insert_unique(&mut info.queries, &entry.name, query)?;
            }
            _ => unreachable!("kind validated while reading the index"),
        }
    }

    if cursor.pos != text_offset {
        return Err(DecodeError::BadLayout {
            detail: format!(
                "member data ends at {} but text segment starts at {}",
                cursor.pos, text_offset
            ),
        });
    }

    trace!(
        "decoded {} with {} members",
        info.type_name,
        info.member_count()
    );
    Ok(info)
}
