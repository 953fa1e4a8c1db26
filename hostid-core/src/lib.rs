//! Host identity primitives used by higher-level provisioning tools.

pub mod addr;
pub mod filter;
pub mod hwaddr;

pub use addr::{parse_ipv4, reverse_zone_of, scope_of, AddrError};
pub use filter::{parse_filter_dump, Disposition, FilterEntry};
pub use hwaddr::{HwAddr, HwAddrError};
