pub(crate) use alloc::string::String;
pub(crate) use allocator_api2::alloc::Allocator;
pub(crate) use allocator_api2::alloc::Global;
pub(crate) use allocator_api2::vec::Vec;
pub(crate) use core::alloc::Layout;
pub(crate) use core::fmt;
pub(crate) use core::mem;
pub(crate) use core::sync::atomic::AtomicU32;
pub(crate) use core::sync::atomic::Ordering;
pub(crate) use tracing::debug;
pub(crate) use tracing::trace;
