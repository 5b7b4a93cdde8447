//! Spatial functions common to every spatial dialect

use crate::GEOMETRY_JAVA_TYPE;
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_function::{
    ArgumentsValidator, BaseSqmFunctionDescriptors, FunctionContributions, FunctionKey, KeyedSqmFunctionDescriptors,
    ReturnTypeResolver, SqmFunctionDescriptor,
};
use hibernate_sqm_types::JavaTypeKey;
use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpatialReturnType {
    Standard(JavaTypeKey),
    /// The geometry type, or the first argument's type when the type
    /// configuration has no geometry type
    Geometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonSpatialFunction {
    AsText,
    GeometryType,
    Dimension,
    Envelope,
    Srid,
    AsBinary,
    IsEmpty,
    IsSimple,
    Boundary,
    Overlaps,
    Intersects,
    Equals,
    Contains,
    Crosses,
    Disjoint,
    Touches,
    Within,
    Relate,
    Distance,
    Buffer,
    ConvexHull,
    Difference,
    Intersection,
    SymDifference,
    Union,
}

impl CommonSpatialFunction {
    pub const ALL: [Self; 25] = [
        Self::AsText,
        Self::GeometryType,
        Self::Dimension,
        Self::Envelope,
        Self::Srid,
        Self::AsBinary,
        Self::IsEmpty,
        Self::IsSimple,
        Self::Boundary,
        Self::Overlaps,
        Self::Intersects,
        Self::Equals,
        Self::Contains,
        Self::Crosses,
        Self::Disjoint,
        Self::Touches,
        Self::Within,
        Self::Relate,
        Self::Distance,
        Self::Buffer,
        Self::ConvexHull,
        Self::Difference,
        Self::Intersection,
        Self::SymDifference,
        Self::Union,
    ];

    /// Canonical (SQL) name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AsText => "ST_AsText",
            Self::GeometryType => "ST_GeometryType",
            Self::Dimension => "ST_Dimension",
            Self::Envelope => "ST_Envelope",
            Self::Srid => "ST_SRID",
            Self::AsBinary => "ST_AsBinary",
            Self::IsEmpty => "ST_IsEmpty",
            Self::IsSimple => "ST_IsSimple",
            Self::Boundary => "ST_Boundary",
            Self::Overlaps => "ST_Overlaps",
            Self::Intersects => "ST_Intersects",
            Self::Equals => "ST_Equals",
            Self::Contains => "ST_Contains",
            Self::Crosses => "ST_Crosses",
            Self::Disjoint => "ST_Disjoint",
            Self::Touches => "ST_Touches",
            Self::Within => "ST_Within",
            Self::Relate => "ST_Relate",
            Self::Distance => "ST_Distance",
            Self::Buffer => "ST_Buffer",
            Self::ConvexHull => "ST_ConvexHull",
            Self::Difference => "ST_Difference",
            Self::Intersection => "ST_Intersection",
            Self::SymDifference => "ST_SymDifference",
            Self::Union => "ST_Union",
        }
    }

    /// Alternate key; `union` is a reserved word, hence `geomunion`
    pub const fn alt_name(&self) -> &'static str {
        match self {
            Self::AsText => "astext",
            Self::GeometryType => "geometrytype",
            Self::Dimension => "dimension",
            Self::Envelope => "envelope",
            Self::Srid => "srid",
            Self::AsBinary => "asbinary",
            Self::IsEmpty => "isempty",
            Self::IsSimple => "issimple",
            Self::Boundary => "boundary",
            Self::Overlaps => "overlaps",
            Self::Intersects => "intersects",
            Self::Equals => "equals",
            Self::Contains => "contains",
            Self::Crosses => "crosses",
            Self::Disjoint => "disjoint",
            Self::Touches => "touches",
            Self::Within => "within",
            Self::Relate => "relate",
            Self::Distance => "distance",
            Self::Buffer => "buffer",
            Self::ConvexHull => "convexhull",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
            Self::SymDifference => "symdifference",
            Self::Union => "geomunion",
        }
    }

    pub fn key(&self) -> FunctionKey {
        FunctionKey::apply(self.name(), self.alt_name())
    }

    pub const fn arity(&self) -> usize {
        match self {
            Self::AsText
            | Self::GeometryType
            | Self::Dimension
            | Self::Envelope
            | Self::Srid
            | Self::AsBinary
            | Self::IsEmpty
            | Self::IsSimple
            | Self::Boundary
            | Self::ConvexHull => 1,
            Self::Relate => 3,
            _ => 2,
        }
    }

    pub fn return_type(&self) -> SpatialReturnType {
        match self {
            Self::AsText | Self::GeometryType => SpatialReturnType::Standard(JavaTypeKey::STRING),
            Self::Dimension | Self::Srid => SpatialReturnType::Standard(JavaTypeKey::INTEGER),
            Self::AsBinary => SpatialReturnType::Standard(JavaTypeKey::BINARY),
            Self::Distance => SpatialReturnType::Standard(JavaTypeKey::DOUBLE),
            Self::IsEmpty
            | Self::IsSimple
            | Self::Overlaps
            | Self::Intersects
            | Self::Equals
            | Self::Contains
            | Self::Crosses
            | Self::Disjoint
            | Self::Touches
            | Self::Within
            | Self::Relate => SpatialReturnType::Standard(JavaTypeKey::BOOLEAN),
            Self::Envelope
            | Self::Boundary
            | Self::Buffer
            | Self::ConvexHull
            | Self::Difference
            | Self::Intersection
            | Self::SymDifference
            | Self::Union => SpatialReturnType::Geometry,
        }
    }

    /// Named descriptor typed against the contribution's type configuration
    pub fn descriptor(&self, contributions: &dyn FunctionContributions) -> Result<SqmFunctionDescriptor> {
        let return_type = match self.return_type() {
            SpatialReturnType::Standard(java_type) => ReturnTypeResolver::Fixed(contributions.standard_type(&java_type)?),
            SpatialReturnType::Geometry => contributions
                .type_configuration()
                .standard_basic_type_for_java_type(&GEOMETRY_JAVA_TYPE)
                .map_or(ReturnTypeResolver::ArgumentType(0), ReturnTypeResolver::Fixed),
        };
        Ok(SqmFunctionDescriptor::named(
            self.name(),
            ArgumentsValidator::Exactly(self.arity()),
            return_type,
        ))
    }
}

/// Descriptors for the whole common catalogue
#[derive(Debug, Clone)]
pub struct BaseSpatialSqmFunctionDescriptors {
    base: BaseSqmFunctionDescriptors,
}

impl BaseSpatialSqmFunctionDescriptors {
    pub fn new(contributions: &dyn FunctionContributions) -> Result<Self> {
        let mut base = BaseSqmFunctionDescriptors::new();
        for function in CommonSpatialFunction::ALL {
            base.insert(function.key(), function.descriptor(contributions)?);
        }
        Ok(Self { base })
    }
}

impl KeyedSqmFunctionDescriptors for BaseSpatialSqmFunctionDescriptors {
    fn as_map(&self) -> &IndexMap<FunctionKey, Arc<SqmFunctionDescriptor>> {
        self.base.as_map()
    }
}
