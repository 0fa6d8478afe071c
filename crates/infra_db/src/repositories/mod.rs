//! Repository implementations of the store ports

pub mod claims;
pub mod member;
pub mod quotes;

pub use claims::ClaimsRepository;
pub use member::MemberRepository;
pub use quotes::QuoteRepository;
