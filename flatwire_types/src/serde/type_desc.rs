use crate::serde::Width;
use std::fmt;

/// Identifies the codec of a field or of a list's elements.
///
/// Descriptors nest: a `List` names its element descriptor, and a `Record`
/// names the ordered descriptors of its fields.
///
/// For example, the record
///
/// ```text
/// struct Order {
///     id:     Long,
///     tags:   List<String>,
///     lines:  List<Record { sku: String, qty: Short }>,
/// }
/// ```
///
/// is described by
///
/// ```text
/// TypeDesc::Record(
///     Schema::new()
///         .field("id", TypeDesc::Int(Width::Long))
///         .field("tags", TypeDesc::list_of(TypeDesc::Str))
///         .field("lines", TypeDesc::list_of(TypeDesc::Record(
///             Schema::new()
///                 .field("sku", TypeDesc::Str)
///                 .field("qty", TypeDesc::Int(Width::Short)),
///         ))),
/// )
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum TypeDesc {
    Int(Width),
    Str,
    List(Box<TypeDesc>),
    Record(Schema),
}

impl TypeDesc {
    pub fn list_of(elem: TypeDesc) -> Self {
        Self::List(Box::new(elem))
    }
}

impl From<Width> for TypeDesc {
    fn from(width: Width) -> Self {
        Self::Int(width)
    }
}

impl From<Schema> for TypeDesc {
    fn from(schema: Schema) -> Self {
        Self::Record(schema)
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(Width::Byte) => write!(f, "ByteInt"),
            Self::Int(Width::Short) => write!(f, "Short"),
            Self::Int(Width::Int) => write!(f, "Int"),
            Self::Int(Width::Long) => write!(f, "Long"),
            Self::Str => write!(f, "String"),
            Self::List(elem) => write!(f, "List<{elem}>"),
            Self::Record(schema) => write!(f, "{schema}"),
        }
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct FieldDesc {
    pub name: String,
    pub type_desc: TypeDesc,
}

/// The ordered fields of a record.
/// Names are for diagnostics only; they are never written.
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct Schema {
    fields: Vec<FieldDesc>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, type_desc: impl Into<TypeDesc>) -> Self {
        self.fields.push(FieldDesc {
            name: name.into(),
            type_desc: type_desc.into(),
        });
        self
    }

    pub fn fields(&self) -> &[FieldDesc] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record {{")?;
        for (field_i, field) in self.fields.iter().enumerate() {
            if field_i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", field.name, field.type_desc)?;
        }
        write!(f, " }}")
    }
}
