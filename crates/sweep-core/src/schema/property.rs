/// Maps one entity property to its persisted form.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyMap {
    /// A plain property backed by a single column.
    Scalar(ScalarMap),

    /// A complex group: one property containing several persisted columns.
    Complex(ComplexMap),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarMap {
    /// Name of the property on the entity.
    pub property: String,

    /// Name of the backing column.
    pub column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplexMap {
    /// Name of the property on the entity.
    pub property: String,

    /// Column name for the group itself. Groups usually expand to their
    /// children's columns, so this is often unused.
    pub column: String,

    /// The group's own property maps, in declaration order. Nesting is one
    /// level deep.
    pub children: Vec<PropertyMap>,
}

impl PropertyMap {
    /// Name of the property this entry maps.
    pub fn property(&self) -> &str {
        match self {
            PropertyMap::Scalar(scalar) => &scalar.property,
            PropertyMap::Complex(complex) => &complex.property,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, PropertyMap::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<&ScalarMap> {
        match self {
            PropertyMap::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&ComplexMap> {
        match self {
            PropertyMap::Complex(complex) => Some(complex),
            _ => None,
        }
    }

    /// Finds the entry for `property` in a property-map collection.
    pub fn find<'a>(properties: &'a [PropertyMap], property: &str) -> Option<&'a PropertyMap> {
        properties.iter().find(|map| map.property() == property)
    }

    /// Resolves a property path against a property-map collection, directly
    /// or one level deep through a complex group via a dotted path.
    pub fn resolve<'a>(properties: &'a [PropertyMap], path: &str) -> Option<&'a PropertyMap> {
        match path.split_once('.') {
            None => PropertyMap::find(properties, path),
            Some((group, rest)) => {
                let complex = PropertyMap::find(properties, group)?.as_complex()?;
                PropertyMap::find(&complex.children, rest)
            }
        }
    }
}
