// Pure ranking logic: category registry, membership, ordering and search.
// Nothing here touches the store or its lock.

mod calculator;
mod category;
mod index;
mod search;
mod tier;

pub use calculator::rank;
pub use category::CategoryKey;
pub use index::members_of;
pub use search::{filter_ranked, search};
pub use tier::Tier;
