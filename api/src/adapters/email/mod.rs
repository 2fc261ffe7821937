//! Email check adapters
//!
//! Domain existence over DNS-over-HTTPS and the disposable provider list.

pub mod disposable_list;
pub mod dns_resolver;

pub use disposable_list::StaticDisposableEmailList;
pub use dns_resolver::DohDomainResolver;
