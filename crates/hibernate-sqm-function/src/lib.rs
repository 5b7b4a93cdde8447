//! SQM function registry and dialect contribution contracts
//!
//! Dialect contributors register [`SqmFunctionDescriptor`]s into a shared
//! [`SqmFunctionRegistry`] during bootstrap. Each descriptor is keyed by a
//! canonical name and may carry an alternate key that resolves to the same
//! descriptor.

pub mod contributions;
pub mod contributor;
pub mod descriptor;
pub mod keyed;
pub mod observer;
pub mod registry;
pub mod service;
pub mod standard;

pub use contributions::{BootstrapFunctionContributions, FunctionContributions};
pub use contributor::{ContributorImplementor, register_keyed_descriptors};
pub use descriptor::{ArgumentsValidator, FunctionRenderer, ReturnTypeResolver, SqmFunctionDescriptor};
pub use keyed::{BaseSqmFunctionDescriptors, FunctionKey, KeyedSqmFunctionDescriptors};
pub use observer::{ContributionEvent, ContributionObserver, LogObserver, RecordingObserver};
pub use registry::{DuplicatePolicy, SqmFunctionRegistry};
pub use service::ServiceRegistry;
pub use standard::{StandardFunctionContributor, StandardSqmFunctionDescriptors};
